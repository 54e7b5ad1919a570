//! Per-lane boolean selectors.
//!
//! A [`Mask<T, N>`] carries one flag per lane of the matching [`Vector<T, N>`]. The element
//! type is part of the mask type so that a mask produced by comparing `f32` vectors cannot
//! be handed to an `i64` vector of a different width by accident; conversions between
//! element types of the same width go through [`Mask::cast`].
//!
//! [`Vector<T, N>`]: crate::vector::Vector

mod bitwise;

use std::{fmt, hash::Hash, marker::PhantomData};

use crate::element::Element;

pub struct Mask<T: Element, const N: usize = 1> {
    lanes: [bool; N],
    _element: PhantomData<T>,
}

impl<T: Element, const N: usize> Mask<T, N> {
    pub const SIZE: usize = N;

    #[inline(always)]
    pub const fn from_array(lanes: [bool; N]) -> Self {
        const { assert!(N > 0, "a mask needs at least one lane") };
        Mask {
            lanes,
            _element: PhantomData,
        }
    }

    /// Broadcast `value` to every lane.
    #[inline(always)]
    pub const fn splat(value: bool) -> Self {
        Self::from_array([value; N])
    }

    #[inline(always)]
    pub const fn full() -> Self {
        Self::splat(true)
    }

    #[inline(always)]
    pub const fn empty() -> Self {
        Self::splat(false)
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; N] {
        self.lanes
    }

    /// # Panics
    ///
    /// Panics if `lane >= N`
    #[inline(always)]
    pub fn get(&self, lane: usize) -> bool {
        self.lanes[lane]
    }

    /// # Panics
    ///
    /// Panics if `lane >= N`
    #[inline(always)]
    pub fn set(&mut self, lane: usize, value: bool) {
        self.lanes[lane] = value;
    }

    /// True iff every lane is selected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.lanes.iter().all(|&b| b)
    }

    /// True iff no lane is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.lanes.iter().any(|&b| b)
    }

    /// True iff the mask is neither full nor empty. Never true for a single lane.
    #[inline]
    pub fn is_mix(&self) -> bool {
        !self.is_full() && !self.is_empty()
    }

    /// Number of selected lanes.
    #[inline]
    pub fn count(&self) -> usize {
        self.lanes.iter().filter(|&&b| b).count()
    }

    /// Index of the lowest selected lane.
    #[inline]
    pub fn first_one(&self) -> Option<usize> {
        self.lanes.iter().position(|&b| b)
    }

    /// Packs the lanes into an integer, lane `i` in bit `i`.
    ///
    /// # Panics
    ///
    /// Panics if the mask has more than 64 lanes.
    pub fn to_int(&self) -> u64 {
        assert!(N <= u64::BITS as usize, "mask too wide for a u64 bitmask");
        self.lanes
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | ((b as u64) << i))
    }

    /// The same selection, typed for vectors of element `U`.
    #[inline(always)]
    pub fn cast<U: Element>(self) -> Mask<U, N> {
        Mask::from_array(self.lanes)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.lanes.iter().copied()
    }

    pub(crate) fn lanes_mut(&mut self) -> &mut [bool; N] {
        &mut self.lanes
    }
}

impl<T: Element, const N: usize> Clone for Mask<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Element, const N: usize> Copy for Mask<T, N> {}

impl<T: Element, const N: usize> PartialEq for Mask<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.lanes == other.lanes
    }
}

impl<T: Element, const N: usize> Eq for Mask<T, N> {}

impl<T: Element, const N: usize> Hash for Mask<T, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.lanes.hash(state);
    }
}

impl<T: Element, const N: usize> Default for Mask<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element, const N: usize> From<bool> for Mask<T, N> {
    fn from(value: bool) -> Self {
        Self::splat(value)
    }
}

impl<T: Element, const N: usize> From<[bool; N]> for Mask<T, N> {
    fn from(lanes: [bool; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Element, const N: usize> fmt::Debug for Mask<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask[")?;
        for b in self.lanes.iter() {
            write!(f, "{}", if *b { '1' } else { '0' })?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    #[test]
    fn test_single_lane_predicates() {
        let set = Mask::<f32>::splat(true);
        assert!(set.is_full());
        assert!(!set.is_empty());
        assert!(!set.is_mix());
        assert_eq!(set.count(), 1);
        assert_eq!(set.first_one(), Some(0));

        let unset = Mask::<f32>::splat(false);
        assert!(!unset.is_full());
        assert!(unset.is_empty());
        assert!(!unset.is_mix());
        assert_eq!(unset.count(), 0);
        assert_eq!(unset.first_one(), None);
    }

    #[test]
    fn test_wide_predicates() {
        let m = Mask::<i32, 4>::from_array([false, true, false, true]);
        assert!(!m.is_full());
        assert!(!m.is_empty());
        assert!(m.is_mix());
        assert_eq!(m.count(), 2);
        assert_eq!(m.first_one(), Some(1));
        assert_eq!(m.to_int(), 0b1010);
    }

    #[test]
    fn test_default_is_empty() {
        let m = Mask::<u8, 8>::default();
        assert!(m.is_empty());
        assert_eq!(m, Mask::empty());
    }

    #[test]
    fn test_get_set() {
        let mut m = Mask::<i16, 2>::empty();
        m.set(1, true);
        assert!(!m.get(0));
        assert!(m.get(1));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let m = Mask::<i16, 2>::empty();
        let _ = m.get(2);
    }

    #[test]
    fn test_cast_preserves_selection() {
        let m = Mask::<f64, 2>::from_array([true, false]);
        let c: Mask<i64, 2> = m.cast();
        assert_eq!(c.to_array(), [true, false]);
    }

    #[test]
    fn test_from_bool_broadcasts() {
        let m: Mask<u32, 4> = true.into();
        assert!(m.is_full());
    }

    #[test]
    fn test_debug_format() {
        let m = Mask::<i8, 4>::from_array([true, false, false, true]);
        assert_eq!(format!("{m:?}"), "Mask[1001]");
    }

    #[test]
    fn test_hash_follows_lanes() {
        let a = Mask::<f32, 4>::from_array([true, false, true, false]);
        let b = Mask::<f32, 4>::from_array([true, false, true, false]);
        let mut hasher_a = DefaultHasher::new();
        let mut hasher_b = DefaultHasher::new();
        a.hash(&mut hasher_a);
        b.hash(&mut hasher_b);
        assert_eq!(hasher_a.finish(), hasher_b.finish());
    }
}
