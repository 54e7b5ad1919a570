//! The fixed-width lane vector.
//!
//! [`Vector<T, N>`] holds exactly `N` lanes of element type `T` by value. The default width
//! `N = 1` is the scalar reference backend: every operation here is written for an
//! arbitrary width and degenerates to plain scalar arithmetic for a single lane, which makes
//! the one-lane vector the oracle that wider backends are checked against (see
//! [`crate::conformance`]).
//!
//! Preconditions are debug assertions or panics; there is no error channel.

mod arith;
mod compare;
mod convert;
mod float;
mod functional;
mod memory;
mod reduce;
mod shuffle;
mod write_masked;

pub use write_masked::WriteMaskedVector;

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use crate::{
    element::{CastElement, Element},
    mask::Mask,
};

/// `N` lanes of `T`, stored contiguously.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Element, const N: usize = 1> {
    data: [T; N],
}

/// Lane indices for gathers and scatters.
pub type IndexVector<const N: usize> = Vector<i32, N>;

impl<T: Element, const N: usize> Vector<T, N> {
    /// Number of lanes.
    pub const SIZE: usize = N;

    /// Address alignment a backend of this width expects for `ALIGNED` loads and stores:
    /// the vector byte size rounded up to a power of two, capped at 64 bytes. For a single
    /// lane this is the element alignment.
    pub const MEMORY_ALIGNMENT: usize = {
        let bytes = (size_of::<T>() * N).next_power_of_two();
        if bytes > 64 { 64 } else { bytes }
    };

    /// A vector has at least one lane:
    ///
    /// ```compile_fail
    /// use lanevec::Vector;
    /// let _ = Vector::<i32, 0>::zero();
    /// ```
    #[inline(always)]
    pub const fn from_array(data: [T; N]) -> Self {
        const { assert!(N > 0, "a vector needs at least one lane") };
        Vector { data }
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Broadcast `value` to every lane.
    #[inline(always)]
    pub const fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    #[inline(always)]
    pub const fn one() -> Self {
        Self::splat(T::ONE)
    }

    /// `[0, 1, 2, ..]`, converted to `T`.
    pub fn indexes_from_zero() -> Self
    where
        u64: CastElement<T>,
    {
        Self::generate(|lane| CastElement::<T>::cast(lane as u64))
    }

    /// Uniformly random lanes. Floats are drawn from `[0, 1)`, integers from their whole
    /// range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        StandardUniform: Distribution<T>,
    {
        Self::generate(|_| rng.random())
    }

    /// Builds a vector by calling `f` once per lane index, in increasing order.
    #[inline]
    pub fn generate<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Zeroes every lane.
    #[inline(always)]
    pub fn set_zero(&mut self) {
        self.data = [T::ZERO; N];
    }

    /// Zeroes the lanes selected by `mask`.
    #[inline]
    pub fn set_zero_masked(&mut self, mask: Mask<T, N>) {
        self.masked(mask).set(Self::zero());
    }

    /// Zeroes the lanes not selected by `mask`.
    #[inline]
    pub fn set_zero_inverted(&mut self, mask: Mask<T, N>) {
        self.masked(!mask).set(Self::zero());
    }

    /// Write handle for the lanes selected by `mask`.
    ///
    /// ```
    /// use lanevec::Vector;
    ///
    /// let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
    /// let high = v.simd_gt(Vector::splat(2));
    /// v.masked(high).add(Vector::splat(10));
    /// assert_eq!(v.to_array(), [1, 2, 13, 14]);
    /// ```
    #[inline(always)]
    pub fn masked(&mut self, mask: Mask<T, N>) -> WriteMaskedVector<'_, T, N> {
        WriteMaskedVector::new(self, mask)
    }

    /// Copies the lanes of `source` selected by `mask` into `self`.
    #[inline]
    pub fn assign(&mut self, source: Self, mask: Mask<T, N>) {
        self.masked(mask).set(source);
    }

    /// Mask of the lanes equal to zero. Counterpart of a logical not on a scalar.
    #[inline]
    pub fn is_zero(self) -> Mask<T, N> {
        self.simd_eq(Self::zero())
    }

    /// Increments every lane, returning the new value.
    #[inline]
    pub fn pre_increment(&mut self) -> Self {
        *self += Self::one();
        *self
    }

    /// Increments every lane, returning the value before the increment.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += Self::one();
        previous
    }

    /// Decrements every lane, returning the new value.
    #[inline]
    pub fn pre_decrement(&mut self) -> Self {
        *self -= Self::one();
        *self
    }

    /// Decrements every lane, returning the value before the decrement.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= Self::one();
        previous
    }

    /// `self = self * factor + summand`.
    ///
    /// This backend rounds twice. Backends with a fused instruction round once, so float
    /// results may differ in the last bit between backends.
    #[inline]
    pub fn fused_multiply_add(&mut self, factor: Self, summand: Self) {
        *self = *self * factor + summand;
    }

    /// Stream compaction step.
    ///
    /// Every lane that is unselected in `m1` but selected in `m2` moves from `other` into
    /// `self`; the lane then becomes selected in `m1` and unselected in `m2`. Returns
    /// whether `m1` selects every lane afterwards.
    pub fn pack(&mut self, m1: &mut Mask<T, N>, other: &mut Self, m2: &mut Mask<T, N>) -> bool {
        let (free, taken) = (m1.lanes_mut(), m2.lanes_mut());
        for lane in 0..N {
            if !free[lane] && taken[lane] {
                self.data[lane] = other.data[lane];
                free[lane] = true;
                taken[lane] = false;
            }
        }
        m1.is_full()
    }

    /// Lane-wise comparison of the bit patterns: unlike `==`, NaN equals an identical NaN
    /// and `0.0` differs from `-0.0`.
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.to_bits_u64() == b.to_bits_u64())
    }
}

impl<T: Element, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Element, const N: usize> From<T> for Vector<T, N> {
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Element, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Element, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `lane >= N`
    #[inline(always)]
    fn index(&self, lane: usize) -> &T {
        &self.data[lane]
    }
}

impl<T: Element, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.data[lane]
    }
}

impl<T: Element, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector")?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector::<f32>::default(), Vector::splat(0.0));
        assert_eq!(Vector::<u16, 8>::default().to_array(), [0; 8]);
    }

    #[test]
    fn test_broadcast() {
        let v: Vector<i64, 4> = 7.into();
        assert_eq!(v.to_array(), [7; 4]);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Vector::<f64>::SIZE, 1);
        assert_eq!(Vector::<f64>::MEMORY_ALIGNMENT, align_of::<f64>());
        assert_eq!(Vector::<f32, 4>::MEMORY_ALIGNMENT, 16);
        assert_eq!(Vector::<f32, 3>::MEMORY_ALIGNMENT, 16);
        assert_eq!(Vector::<f64, 16>::MEMORY_ALIGNMENT, 64);
        assert_eq!(size_of::<Vector<u8, 5>>(), 5);
    }

    #[test]
    fn test_indexes_from_zero() {
        assert_eq!(Vector::<f32, 4>::indexes_from_zero().to_array(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(Vector::<u8>::indexes_from_zero()[0], 0);
    }

    #[test]
    fn test_index_access() {
        let mut v = Vector::<i32, 2>::from_array([3, 4]);
        v[1] = 9;
        assert_eq!(v[0], 3);
        assert_eq!(v[1], 9);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = Vector::<i32>::splat(1);
        let lane = std::hint::black_box(1);
        let _ = v[lane];
    }

    #[test]
    fn test_random_is_seeded() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = Vector::<f32, 8>::random(&mut rng1);
        let b = Vector::<f32, 8>::random(&mut rng2);
        assert!(a.bits_eq(&b));
        assert!(a.as_slice().iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn test_zeroing() {
        let mask = Mask::<i32, 4>::from_array([true, false, true, false]);

        let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        v.set_zero_masked(mask);
        assert_eq!(v.to_array(), [0, 2, 0, 4]);

        let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        v.set_zero_inverted(mask);
        assert_eq!(v.to_array(), [1, 0, 3, 0]);

        v.set_zero();
        assert_eq!(v, Vector::zero());
    }

    #[test]
    fn test_single_lane_zeroing() {
        let mut v = Vector::<f32>::splat(2.5);
        v.set_zero_masked(Mask::splat(false));
        assert_eq!(v[0], 2.5);
        v.set_zero_inverted(Mask::splat(true));
        assert_eq!(v[0], 2.5);
        v.set_zero_masked(Mask::splat(true));
        assert_eq!(v[0], 0.0);
    }

    #[test]
    fn test_assign_full_mask_equals_plain_assignment() {
        let mut v = Vector::<u32, 4>::from_array([1, 2, 3, 4]);
        let w = Vector::from_array([9, 8, 7, 6]);
        v.assign(w, Mask::full());
        assert_eq!(v, w);
    }

    #[test]
    fn test_assign_partial() {
        let mut v = Vector::<u32, 4>::from_array([1, 2, 3, 4]);
        v.assign(
            Vector::splat(0),
            Mask::from_array([false, true, true, false]),
        );
        assert_eq!(v.to_array(), [1, 0, 0, 4]);
    }

    #[test]
    fn test_is_zero() {
        let v = Vector::<f64, 4>::from_array([0.0, -0.0, 1.0, f64::NAN]);
        assert_eq!(v.is_zero().to_array(), [true, true, false, false]);
    }

    #[test]
    fn test_increments() {
        let mut v = Vector::<i8>::splat(i8::MAX);
        assert_eq!(v.post_increment()[0], i8::MAX);
        assert_eq!(v[0], i8::MIN);
        assert_eq!(v.pre_decrement()[0], i8::MAX);
        assert_eq!(v.pre_increment()[0], i8::MIN);
        assert_eq!(v.post_decrement()[0], i8::MIN);
        assert_eq!(v[0], i8::MAX);
    }

    #[test]
    fn test_fused_multiply_add() {
        let mut v = Vector::<f32, 2>::from_array([2.0, -1.0]);
        v.fused_multiply_add(Vector::splat(3.0), Vector::splat(0.5));
        assert_eq!(v.to_array(), [6.5, -2.5]);

        let mut w = Vector::<i32>::splat(4);
        w.fused_multiply_add(Vector::splat(5), Vector::splat(-1));
        assert_eq!(w[0], 19);
    }

    #[test]
    fn test_pack_absorbs_into_free_lane() {
        let mut v = Vector::<f32>::splat(1.0);
        let mut v2 = Vector::<f32>::splat(2.0);
        let mut m1 = Mask::splat(false);
        let mut m2 = Mask::splat(true);

        assert!(v.pack(&mut m1, &mut v2, &mut m2));
        assert!(m1.is_full());
        assert!(m2.is_empty());
        assert_eq!(v[0], 2.0);
    }

    #[test]
    fn test_pack_with_occupied_lane_is_a_no_op() {
        let mut v = Vector::<f32>::splat(1.0);
        let mut v2 = Vector::<f32>::splat(2.0);
        let mut m1 = Mask::splat(true);
        let mut m2 = Mask::splat(true);

        assert!(v.pack(&mut m1, &mut v2, &mut m2));
        assert!(m1.is_full());
        assert!(m2.is_full());
        assert_eq!(v[0], 1.0);
    }

    #[test]
    fn test_pack_with_nothing_to_absorb() {
        let mut v = Vector::<i32>::splat(1);
        let mut v2 = Vector::<i32>::splat(2);
        let mut m1 = Mask::splat(false);
        let mut m2 = Mask::splat(false);

        assert!(!v.pack(&mut m1, &mut v2, &mut m2));
        assert_eq!(v[0], 1);
    }

    #[test]
    fn test_pack_wide() {
        let mut v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let mut v2 = Vector::<i32, 4>::from_array([10, 20, 30, 40]);
        let mut m1 = Mask::from_array([true, false, false, true]);
        let mut m2 = Mask::from_array([true, true, false, false]);

        assert!(!v.pack(&mut m1, &mut v2, &mut m2));
        assert_eq!(v.to_array(), [1, 20, 3, 4]);
        assert_eq!(m1.to_array(), [true, true, false, true]);
        assert_eq!(m2.to_array(), [true, false, false, false]);
    }

    #[test]
    fn test_bits_eq() {
        let nan = Vector::<f32>::splat(f32::NAN);
        assert!(nan != nan);
        assert!(nan.bits_eq(&nan));
        assert!(!Vector::<f32>::splat(0.0).bits_eq(&Vector::splat(-0.0)));
    }

    #[test]
    fn test_debug_format() {
        let v = Vector::<i32, 3>::from_array([1, -2, 3]);
        assert_eq!(format!("{v:?}"), "Vector[1, -2, 3]");
    }
}
