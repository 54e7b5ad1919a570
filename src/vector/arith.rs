use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::Vector;
use crate::{
    element::{BitElement, Element, IntElement},
    ops::{self, BinaryOp},
};

impl<T: Element, const N: usize> Vector<T, N> {
    /// Applies `Op` lane by lane. Every arithmetic, bitwise and shift operator of the vector
    /// is this function instantiated with an operator tag.
    #[inline(always)]
    pub fn zip_with<Op: BinaryOp<T>>(self, rhs: Self) -> Self {
        let mut data = self.data;
        for (l, r) in data.iter_mut().zip(rhs.data) {
            *l = Op::apply(*l, r);
        }
        Self::from_array(data)
    }
}

macro_rules! impl_vector_binary {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $tag:ident, $bound:ident;)*) => {$(
        impl<T: $bound, const N: usize> $trait for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with::<ops::$tag>(rhs)
            }
        }

        impl<T: $bound, const N: usize> $trait<T> for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: T) -> Self {
                self.zip_with::<ops::$tag>(Self::splat(rhs))
            }
        }

        impl<T: $bound, const N: usize> $assign_trait for Vector<T, N> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.zip_with::<ops::$tag>(rhs);
            }
        }

        impl<T: $bound, const N: usize> $assign_trait<T> for Vector<T, N> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                *self = self.zip_with::<ops::$tag>(Self::splat(rhs));
            }
        }
    )*};
}

impl_vector_binary! {
    Add::add, AddAssign::add_assign => Plus, Element;
    Sub::sub, SubAssign::sub_assign => Minus, Element;
    Mul::mul, MulAssign::mul_assign => Multiply, Element;
    Div::div, DivAssign::div_assign => Divide, Element;
    Rem::rem, RemAssign::rem_assign => Remainder, Element;
    BitAnd::bitand, BitAndAssign::bitand_assign => And, BitElement;
    BitOr::bitor, BitOrAssign::bitor_assign => Or, BitElement;
    BitXor::bitxor, BitXorAssign::bitxor_assign => Xor, BitElement;
    Shl::shl, ShlAssign::shl_assign => ShiftLeft, IntElement;
    Shr::shr, ShrAssign::shr_assign => ShiftRight, IntElement;
}

impl<T: Element, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::from_array(self.data.map(T::lane_neg))
    }
}

/// Bitwise complement. Only available for float lanes with the `float-bitops` feature.
///
#[cfg_attr(not(feature = "float-bitops"), doc = "```compile_fail")]
#[cfg_attr(feature = "float-bitops", doc = "```")]
/// use lanevec::Vector;
/// let _ = !Vector::<f32>::splat(1.0);
/// ```
impl<T: BitElement, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::from_array(self.data.map(T::lane_not))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type I4 = Vector<i32, 4>;

    #[test]
    fn test_identity_laws() {
        let v = Vector::<f64, 4>::from_array([1.5, -0.25, 1e300, f64::MIN_POSITIVE]);
        assert_eq!(v + Vector::splat(0.0), v);
        assert_eq!(v * Vector::splat(1.0), v);

        let w = I4::from_array([i32::MIN, -1, 0, i32::MAX]);
        assert_eq!(w + I4::zero(), w);
        assert_eq!(w * I4::one(), w);
        assert_eq!(w & I4::splat(-1), w);
        assert_eq!(w | I4::zero(), w);
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a = I4::from_array([10, 20, -30, 7]);
        let b = I4::from_array([3, -4, 5, 7]);
        assert_eq!((a + b).to_array(), [13, 16, -25, 14]);
        assert_eq!((a - b).to_array(), [7, 24, -35, 0]);
        assert_eq!((a * b).to_array(), [30, -80, -150, 49]);
        assert_eq!((a / b).to_array(), [3, -5, -6, 1]);
        assert_eq!((a % b).to_array(), [1, 0, 0, 0]);
        assert_eq!((-a).to_array(), [-10, -20, 30, -7]);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        let v = Vector::<u8, 2>::from_array([255, 0]);
        assert_eq!((v + 1).to_array(), [0, 1]);
        assert_eq!((v - 1).to_array(), [254, 255]);
        assert_eq!((-Vector::<i16>::splat(i16::MIN))[0], i16::MIN);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let zero = std::hint::black_box(I4::zero());
        let _ = I4::one() / zero;
    }

    #[test]
    fn test_float_division_by_zero_is_ieee() {
        let v = Vector::<f32, 2>::from_array([1.0, -1.0]) / 0.0;
        assert_eq!(v.to_array(), [f32::INFINITY, f32::NEG_INFINITY]);
        assert!((Vector::<f32>::splat(0.0) / 0.0)[0].is_nan());
    }

    #[test]
    fn test_bitwise() {
        let a = Vector::<u8, 2>::from_array([0b1100, 0xff]);
        let b = Vector::<u8, 2>::from_array([0b1010, 0x0f]);
        assert_eq!((a & b).to_array(), [0b1000, 0x0f]);
        assert_eq!((a | b).to_array(), [0b1110, 0xff]);
        assert_eq!((a ^ b).to_array(), [0b0110, 0xf0]);
        assert_eq!((!a).to_array(), [0b1111_0011, 0]);
    }

    #[test]
    fn test_shifts() {
        let v = I4::from_array([1, -16, 3, 1]);
        let amounts = I4::from_array([3, 2, 0, 31]);
        assert_eq!((v << amounts).to_array(), [8, -64, 3, i32::MIN]);
        assert_eq!((v >> amounts).to_array(), [0, -4, 3, 0]);
        assert_eq!((v << 1).to_array(), [2, -32, 6, 2]);
        assert_eq!((Vector::<u32>::splat(u32::MAX) >> 28)[0], 0xf);
    }

    #[test]
    fn test_compound_forms_match_binary_forms() {
        let a = I4::from_array([5, 6, 7, 8]);
        let b = I4::from_array([1, 2, 3, 4]);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= b;
        assert_eq!(c, a * b);
        c /= b;
        assert_eq!(c, a);
        c %= b;
        assert_eq!(c, a % b);

        let mut d = a;
        d &= b;
        assert_eq!(d, a & b);
        d |= a;
        assert_eq!(d, (a & b) | a);
        d ^= b;
        assert_eq!(d, ((a & b) | a) ^ b);
        d <<= 2;
        d >>= b;
        assert_eq!(d, ((((a & b) | a) ^ b) << 2) >> b);
    }

    #[test]
    fn test_scalar_rhs() {
        let mut v = Vector::<f32, 2>::from_array([1.0, 2.0]);
        v += 1.0;
        v *= 2.0;
        assert_eq!(v.to_array(), [4.0, 6.0]);
        assert_eq!((v - 4.0).to_array(), [0.0, 2.0]);
        assert_eq!((v % 4.0).to_array(), [0.0, 2.0]);
    }

    #[test]
    fn test_zip_with_custom_tag() {
        let a = Vector::<i64, 2>::from_array([3, 4]);
        let b = Vector::<i64, 2>::from_array([5, 6]);
        assert_eq!(a.zip_with::<ops::Multiply>(b), a * b);
    }

    #[cfg(feature = "float-bitops")]
    #[test]
    fn test_float_bit_operators() {
        let v = Vector::<f32, 2>::from_array([-1.0, 2.0]);
        let abs_mask = Vector::splat(f32::from_bits(0x7fff_ffff));
        assert_eq!((v & abs_mask).to_array(), [1.0, 2.0]);
        assert_eq!((!Vector::<f64>::splat(f64::from_bits(0)))[0].to_bits(), u64::MAX);
    }
}
