use super::Vector;
use crate::{
    element::Element,
    mask::Mask,
    ops::{self, CompareOp},
};

impl<T: Element, const N: usize> Vector<T, N> {
    /// Evaluates `Op` lane by lane into a mask of the same width.
    #[inline(always)]
    pub fn compare<Op: CompareOp<T>>(self, rhs: Self) -> Mask<T, N> {
        let mut lanes = [false; N];
        for (out, (l, r)) in lanes.iter_mut().zip(self.data.into_iter().zip(rhs.data)) {
            *out = Op::test(l, r);
        }
        Mask::from_array(lanes)
    }

    #[inline(always)]
    pub fn simd_eq(self, rhs: Self) -> Mask<T, N> {
        self.compare::<ops::Equal>(rhs)
    }

    #[inline(always)]
    pub fn simd_ne(self, rhs: Self) -> Mask<T, N> {
        self.compare::<ops::NotEqual>(rhs)
    }

    #[inline(always)]
    pub fn simd_lt(self, rhs: Self) -> Mask<T, N> {
        self.compare::<ops::Less>(rhs)
    }

    #[inline(always)]
    pub fn simd_le(self, rhs: Self) -> Mask<T, N> {
        self.compare::<ops::LessEqual>(rhs)
    }

    #[inline(always)]
    pub fn simd_gt(self, rhs: Self) -> Mask<T, N> {
        self.compare::<ops::Greater>(rhs)
    }

    #[inline(always)]
    pub fn simd_ge(self, rhs: Self) -> Mask<T, N> {
        self.compare::<ops::GreaterEqual>(rhs)
    }

    /// Lanes whose sign bit is set. Includes `-0.0` and negative NaNs.
    pub fn is_negative(self) -> Mask<T, N> {
        Mask::from_array(self.data.map(T::has_sign_bit))
    }
}
