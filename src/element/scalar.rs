use std::cmp::Ordering;

use super::{BitElement, Element, FloatElement, IntElement, sealed::Sealed};

macro_rules! impl_int_element {
    ($($ty:ty => $bits:ty, $signed:literal);* $(;)?) => {$(
        impl Sealed for $ty {}

        impl Element for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN_VALUE: Self = <$ty>::MIN;
            const MAX_VALUE: Self = <$ty>::MAX;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            #[inline(always)]
            #[allow(unused_comparisons)]
            fn has_sign_bit(self) -> bool {
                $signed && self < 0
            }

            #[inline(always)]
            fn to_bits_u64(self) -> u64 {
                self as $bits as u64
            }
        }

        impl BitElement for $ty {
            #[inline(always)]
            fn lane_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline(always)]
            fn lane_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline(always)]
            fn lane_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline(always)]
            fn lane_not(self) -> Self {
                !self
            }
        }

        impl IntElement for $ty {
            #[inline(always)]
            fn lane_shl(self, amount: Self) -> Self {
                self.wrapping_shl(amount as u32)
            }

            #[inline(always)]
            fn lane_shr(self, amount: Self) -> Self {
                self.wrapping_shr(amount as u32)
            }
        }
    )*};
}

impl_int_element!(
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
    i64 => u64, true;
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
    u64 => u64, false;
);

macro_rules! impl_float_element {
    ($($ty:ty => $bits:ty, mantissa: $mantissa:literal, exp_mask: $exp_mask:literal, bias: $bias:literal, scale_log2: $scale_log2:literal);* $(;)?) => {$(
        impl Sealed for $ty {}

        impl Element for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN_VALUE: Self = <$ty>::NEG_INFINITY;
            const MAX_VALUE: Self = <$ty>::INFINITY;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                -self
            }

            #[inline(always)]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                <$ty>::total_cmp(self, other)
            }

            #[inline(always)]
            fn has_sign_bit(self) -> bool {
                self.is_sign_negative()
            }

            #[inline(always)]
            fn to_bits_u64(self) -> u64 {
                self.to_bits() as u64
            }
        }

        #[cfg(feature = "float-bitops")]
        impl BitElement for $ty {
            #[inline(always)]
            fn lane_and(self, rhs: Self) -> Self {
                <$ty>::from_bits(self.to_bits() & rhs.to_bits())
            }

            #[inline(always)]
            fn lane_or(self, rhs: Self) -> Self {
                <$ty>::from_bits(self.to_bits() | rhs.to_bits())
            }

            #[inline(always)]
            fn lane_xor(self, rhs: Self) -> Self {
                <$ty>::from_bits(self.to_bits() ^ rhs.to_bits())
            }

            #[inline(always)]
            fn lane_not(self) -> Self {
                <$ty>::from_bits(!self.to_bits())
            }
        }

        impl FloatElement for $ty {
            const QNAN: Self = <$ty>::NAN;

            #[inline(always)]
            fn lane_copysign(self, sign: Self) -> Self {
                self.copysign(sign)
            }

            fn lane_exponent(self) -> Self {
                let x = self.abs();
                if x == 0.0 {
                    return <$ty>::NEG_INFINITY;
                }
                if !x.is_finite() {
                    return x;
                }
                let biased = ((x.to_bits() >> $mantissa) & $exp_mask) as i32;
                if biased != 0 {
                    return (biased - $bias) as $ty;
                }
                // subnormal: bring it into the normal range first
                let scaled = x * ((1 as $bits) << $scale_log2) as $ty;
                let biased = ((scaled.to_bits() >> $mantissa) & $exp_mask) as i32;
                (biased - $bias - $scale_log2) as $ty
            }

            #[inline(always)]
            fn lane_is_nan(self) -> bool {
                self.is_nan()
            }
        }
    )*};
}

impl_float_element!(
    f32 => u32, mantissa: 23, exp_mask: 0xff, bias: 127, scale_log2: 31;
    f64 => u64, mantissa: 52, exp_mask: 0x7ff, bias: 1023, scale_log2: 63;
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_wraps() {
        assert_eq!(i8::MAX.lane_add(1), i8::MIN);
        assert_eq!(0u16.lane_sub(1), u16::MAX);
        assert_eq!(i32::MIN.lane_neg(), i32::MIN);
        assert_eq!(200u8.lane_mul(2), 144);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let zero = std::hint::black_box(0i32);
        let _ = 7i32.lane_div(zero);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_overflow_panics() {
        let minus_one = std::hint::black_box(-1i64);
        let _ = i64::MIN.lane_div(minus_one);
    }

    #[test]
    fn test_float_remainder_is_truncated() {
        assert_eq!(7.5f32.lane_rem(2.0), 1.5);
        assert_eq!((-7.5f64).lane_rem(2.0), -1.5);
    }

    #[test]
    fn test_shift_amount_wraps_modulo_width() {
        assert_eq!(1u8.lane_shl(9), 2);
        assert_eq!(1i32.lane_shl(33), 2);
        assert_eq!((-8i16).lane_shr(1), -4);
        assert_eq!(0x80u8.lane_shr(7), 1);
    }

    #[test]
    fn test_sign_bit() {
        assert!((-0.0f32).has_sign_bit());
        assert!(!0.0f64.has_sign_bit());
        assert!((-3i8).has_sign_bit());
        assert!(!u64::MAX.has_sign_bit());
    }

    #[test]
    fn test_lane_cmp_is_total_for_floats() {
        assert_eq!((-0.0f32).lane_cmp(&0.0), Ordering::Less);
        assert_eq!(f64::NAN.lane_cmp(&f64::INFINITY), Ordering::Greater);
        assert_eq!(3u32.lane_cmp(&3), Ordering::Equal);
    }

    #[test]
    fn test_bits_are_zero_extended() {
        assert_eq!((-1i8).to_bits_u64(), 0xff);
        assert_eq!((-1i32).to_bits_u64(), 0xffff_ffff);
        assert_eq!(1.0f32.to_bits_u64(), 0x3f80_0000);
    }

    #[test]
    fn test_exponent_of_normals() {
        assert_eq!(1.0f32.lane_exponent(), 0.0);
        assert_eq!(1.9999f32.lane_exponent(), 0.0);
        assert_eq!(2.0f64.lane_exponent(), 1.0);
        assert_eq!(0.75f64.lane_exponent(), -1.0);
        assert_eq!((-8.0f32).lane_exponent(), 3.0);
    }

    #[test]
    fn test_exponent_of_special_values() {
        assert_eq!(0.0f32.lane_exponent(), f32::NEG_INFINITY);
        assert_eq!(f64::INFINITY.lane_exponent(), f64::INFINITY);
        assert!(f32::NAN.lane_exponent().is_nan());
    }

    #[test]
    fn test_exponent_of_subnormals() {
        let smallest = f32::from_bits(1);
        assert_eq!(smallest.lane_exponent(), -149.0);
        let smallest = f64::from_bits(1);
        assert_eq!(smallest.lane_exponent(), -1074.0);
        assert_eq!((f32::MIN_POSITIVE / 2.0).lane_exponent(), -127.0);
    }

    #[cfg(feature = "float-bitops")]
    #[test]
    fn test_float_bit_operators_act_on_bits() {
        assert_eq!((-2.0f32).lane_and(f32::from_bits(0x7fff_ffff)), 2.0);
        assert_eq!(2.0f64.lane_xor(-0.0), -2.0);
    }
}
