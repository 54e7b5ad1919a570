//! Bridge to `std::simd`.
//!
//! Converts between [`Vector`] and the portable SIMD types lane for lane, so the same values
//! can be pushed through the hardware backend and compared against the reference.

use std::simd::{LaneCount, MaskElement, Simd, SimdElement, SupportedLaneCount};

use crate::{element::Element, mask::Mask, vector::Vector};

impl<T, const N: usize> From<Vector<T, N>> for Simd<T, N>
where
    T: Element + SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(v: Vector<T, N>) -> Self {
        Simd::from_array(v.to_array())
    }
}

impl<T, const N: usize> From<Simd<T, N>> for Vector<T, N>
where
    T: Element + SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(v: Simd<T, N>) -> Self {
        Vector::from_array(v.to_array())
    }
}

impl<T: Element, const N: usize> Mask<T, N> {
    /// The same selection as a `std::simd` mask of element width `M`.
    pub fn to_simd<M: MaskElement>(self) -> std::simd::Mask<M, N>
    where
        LaneCount<N>: SupportedLaneCount,
    {
        std::simd::Mask::from_array(self.to_array())
    }

    pub fn from_simd<M: MaskElement>(mask: std::simd::Mask<M, N>) -> Self
    where
        LaneCount<N>: SupportedLaneCount,
    {
        Mask::from_array(mask.to_array())
    }
}
