use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::Mask;
use crate::element::Element;

macro_rules! impl_mask_binary {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $op:tt;)*) => {$(
        impl<T: Element, const N: usize> $trait for Mask<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                let mut lanes = self.to_array();
                for (l, r) in lanes.iter_mut().zip(rhs.to_array()) {
                    *l = *l $op r;
                }
                Mask::from_array(lanes)
            }
        }

        impl<T: Element, const N: usize> $assign_trait for Mask<T, N> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    )*};
}

impl_mask_binary! {
    BitAnd::bitand, BitAndAssign::bitand_assign => &;
    BitOr::bitor, BitOrAssign::bitor_assign => |;
    BitXor::bitxor, BitXorAssign::bitxor_assign => ^;
}

impl<T: Element, const N: usize> Not for Mask<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Mask::from_array(self.to_array().map(|b| !b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type M4 = Mask<f32, 4>;

    #[test]
    fn test_truth_tables() {
        let a = M4::from_array([false, false, true, true]);
        let b = M4::from_array([false, true, false, true]);
        assert_eq!((a & b).to_array(), [false, false, false, true]);
        assert_eq!((a | b).to_array(), [false, true, true, true]);
        assert_eq!((a ^ b).to_array(), [false, true, true, false]);
        assert_eq!((!a).to_array(), [true, true, false, false]);
    }

    #[test]
    fn test_compound_forms() {
        let b = M4::from_array([false, true, false, true]);
        let mut m = M4::full();
        m &= b;
        assert_eq!(m, b);
        m |= !b;
        assert!(m.is_full());
        m ^= M4::full();
        assert!(m.is_empty());
    }

    #[test]
    fn test_single_lane() {
        let t = Mask::<i32>::splat(true);
        let f = Mask::<i32>::splat(false);
        assert!((t & t).is_full());
        assert!(!(t & f).is_full());
        assert!((t | f).is_full());
        assert!((!f).is_full());
    }
}
