use super::Element;

/// Lane-wise numeric conversion into `U`.
///
/// `cast` follows Rust's `as` rules: integers truncate or sign extend, float to integer
/// saturates and maps NaN to zero, integer to float rounds to nearest.
///
/// `IMPLICIT` is the conversion predicate used by the vector conversions: it is `true` iff
/// no value of `Self` can lose precision or range when converted to `U`. For a pair of
/// distinct types at most one direction is implicit.
pub trait CastElement<U: Element>: Element {
    const IMPLICIT: bool;

    fn cast(self) -> U;
}

/// Whether a `Vector<U>` converts to a `Vector<T>` without an explicit `static_cast`.
pub const fn is_implicit_cast_allowed<U, T>() -> bool
where
    U: CastElement<T>,
    T: Element,
{
    <U as CastElement<T>>::IMPLICIT
}

/// Reinterprets the bits of `x` as a `U` of the same size.
///
/// Mismatched sizes are rejected at compile time.
///
/// ```compile_fail
/// use lanevec::element::reinterpret_bits;
/// let _: u16 = reinterpret_bits(1.0f32);
/// ```
#[inline(always)]
pub fn reinterpret_bits<T: Element, U: Element>(x: T) -> U {
    const {
        assert!(
            size_of::<T>() == size_of::<U>(),
            "reinterpret requires lanes of identical size"
        );
    }
    // SAFETY: sizes match, and every Element type is plain old data for which any bit
    // pattern is a valid value.
    unsafe { std::mem::transmute_copy::<T, U>(&x) }
}

macro_rules! impl_cast_row {
    ($from:ty => $($to:ty: $implicit:literal),* $(,)?) => {$(
        impl CastElement<$to> for $from {
            const IMPLICIT: bool = $implicit;

            #[inline(always)]
            fn cast(self) -> $to {
                self as $to
            }
        }
    )*};
}

// A row lists every target of one source type. `true` marks the lossless conversions,
// which are exactly the pairs where core provides `From`.
impl_cast_row!(i8 => i8: true, i16: true, i32: true, i64: true, u8: false, u16: false, u32: false, u64: false, f32: true, f64: true);
impl_cast_row!(i16 => i8: false, i16: true, i32: true, i64: true, u8: false, u16: false, u32: false, u64: false, f32: true, f64: true);
impl_cast_row!(i32 => i8: false, i16: false, i32: true, i64: true, u8: false, u16: false, u32: false, u64: false, f32: false, f64: true);
impl_cast_row!(i64 => i8: false, i16: false, i32: false, i64: true, u8: false, u16: false, u32: false, u64: false, f32: false, f64: false);
impl_cast_row!(u8 => i8: false, i16: true, i32: true, i64: true, u8: true, u16: true, u32: true, u64: true, f32: true, f64: true);
impl_cast_row!(u16 => i8: false, i16: false, i32: true, i64: true, u8: false, u16: true, u32: true, u64: true, f32: true, f64: true);
impl_cast_row!(u32 => i8: false, i16: false, i32: false, i64: true, u8: false, u16: false, u32: true, u64: true, f32: false, f64: true);
impl_cast_row!(u64 => i8: false, i16: false, i32: false, i64: false, u8: false, u16: false, u32: false, u64: true, f32: false, f64: false);
impl_cast_row!(f32 => i8: false, i16: false, i32: false, i64: false, u8: false, u16: false, u32: false, u64: false, f32: true, f64: true);
impl_cast_row!(f64 => i8: false, i16: false, i32: false, i64: false, u8: false, u16: false, u32: false, u64: false, f32: false, f64: true);
