//! Lane element types.
//!
//! Every lane of a [`Vector`](crate::vector::Vector) holds one value of a type implementing
//! [`Element`]. The trait family is sealed: only the builtin arithmetic types qualify, and
//! every lane operation a backend may perform is spelled out here so that the one-lane
//! reference and wider backends agree bit for bit.

mod cast;
mod scalar;

pub use cast::{CastElement, is_implicit_cast_allowed, reinterpret_bits};

use std::{cmp::Ordering, fmt::Debug};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// An arithmetic lane type: `i8`..`i64`, `u8`..`u64`, `f32` or `f64`.
///
/// # Contract
///
/// - Integer `lane_add`, `lane_sub`, `lane_mul` and `lane_neg` wrap on overflow.
/// - Integer `lane_div` and `lane_rem` panic on a zero divisor and on `MIN / -1`.
/// - Float operations follow IEEE 754; `lane_rem` is the truncated remainder.
pub trait Element:
    sealed::Sealed + Copy + PartialEq + PartialOrd + Debug + Default + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Smallest representable value (`-inf` for floats).
    const MIN_VALUE: Self;
    /// Largest representable value (`+inf` for floats).
    const MAX_VALUE: Self;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_div(self, rhs: Self) -> Self;
    fn lane_rem(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;

    /// Total order over the lane type. Floats use the IEEE total order, so `-0.0 < 0.0`
    /// and NaN sorts after `+inf`.
    fn lane_cmp(&self, other: &Self) -> Ordering;

    /// Sign bit test. `-0.0` counts as negative, unsigned types never are.
    fn has_sign_bit(self) -> bool;

    /// Raw bit pattern, zero extended. Used for bit-identical comparisons.
    fn to_bits_u64(self) -> u64;
}

/// Lane types supporting the bitwise operators.
///
/// Always implemented for integers. Floats only implement it when the `float-bitops`
/// feature is enabled, in which case the operators act on the IEEE bit pattern.
pub trait BitElement: Element {
    fn lane_and(self, rhs: Self) -> Self;
    fn lane_or(self, rhs: Self) -> Self;
    fn lane_xor(self, rhs: Self) -> Self;
    fn lane_not(self) -> Self;
}

/// Integer lane types, which additionally support shifts.
///
/// The shift amount is taken modulo the bit width. Right shifts are arithmetic for signed
/// types and logical for unsigned ones.
pub trait IntElement: BitElement + Eq + Ord {
    fn lane_shl(self, amount: Self) -> Self;
    fn lane_shr(self, amount: Self) -> Self;
}

/// Floating point lane types.
pub trait FloatElement: Element {
    const QNAN: Self;

    fn lane_copysign(self, sign: Self) -> Self;
    /// `floor(log2(|x|))` as a float, exact for normal and subnormal inputs.
    /// Zero maps to `-inf`, infinities to `+inf`, NaN stays NaN.
    fn lane_exponent(self) -> Self;
    fn lane_is_nan(self) -> bool;
}
