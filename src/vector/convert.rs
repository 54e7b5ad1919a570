use super::Vector;
use crate::element::{CastElement, Element, reinterpret_bits};

impl<T: Element, const N: usize> Vector<T, N> {
    /// Converts every lane to `U` with `as` semantics. Narrowing conversions go through
    /// here; lossless ones are also available through `From`.
    #[inline]
    pub fn static_cast<U: Element>(self) -> Vector<U, N>
    where
        T: CastElement<U>,
    {
        Vector::from_array(self.data.map(CastElement::<U>::cast))
    }

    /// Reinterprets the bits of every lane as `U`. Lanes of different size do not compile:
    ///
    /// ```compile_fail
    /// use lanevec::Vector;
    /// let _ = Vector::<f64>::splat(1.0).reinterpret_cast::<u32>();
    /// ```
    #[inline]
    pub fn reinterpret_cast<U: Element>(self) -> Vector<U, N> {
        Vector::from_array(self.data.map(reinterpret_bits::<T, U>))
    }
}

// Implicit conversions: exactly the pairs whose `CastElement::IMPLICIT` is true.
macro_rules! impl_widening {
    ($($from:ty => $($to:ty),+;)*) => {$($(
        impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
            #[inline]
            fn from(v: Vector<$from, N>) -> Self {
                v.static_cast()
            }
        }
    )+)*};
}

impl_widening! {
    i8 => i16, i32, i64, f32, f64;
    i16 => i32, i64, f32, f64;
    i32 => i64, f64;
    u8 => i16, i32, i64, u16, u32, u64, f32, f64;
    u16 => i32, i64, u32, u64, f32, f64;
    u32 => i64, u64, f64;
    f32 => f64;
}
