use super::Vector;
use crate::{element::Element, mask::Mask};

/// Smaller of two lanes; NaN loses against any number, ties keep `a`.
#[inline(always)]
fn min_lane<T: Element>(a: T, b: T) -> T {
    #[allow(clippy::eq_op)]
    let a_is_nan = a != a;
    if b < a || a_is_nan { b } else { a }
}

/// Larger of two lanes; NaN loses against any number, ties keep `a`.
#[inline(always)]
fn max_lane<T: Element>(a: T, b: T) -> T {
    #[allow(clippy::eq_op)]
    let a_is_nan = a != a;
    if b > a || a_is_nan { b } else { a }
}

// All reductions combine lanes strictly from lane 0 upwards, so float results are
// reproducible across widths for the same lane order.
impl<T: Element, const N: usize> Vector<T, N> {
    #[inline]
    fn fold_lanes(self, f: impl Fn(T, T) -> T) -> T {
        self.data[1..].iter().fold(self.data[0], |acc, &x| f(acc, x))
    }

    #[inline]
    fn fold_selected(self, mask: Mask<T, N>, f: impl Fn(T, T) -> T) -> Option<T> {
        self.data
            .into_iter()
            .zip(mask.iter())
            .filter_map(|(x, selected)| selected.then_some(x))
            .reduce(f)
    }

    /// Replaces the unselected lanes with `identity`.
    #[inline]
    fn select_or(self, mask: Mask<T, N>, identity: T) -> Self {
        let mut data = self.data;
        for (x, selected) in data.iter_mut().zip(mask.iter()) {
            if !selected {
                *x = identity;
            }
        }
        Self::from_array(data)
    }

    /// Smallest lane. NaN lanes are ignored unless every lane is NaN.
    pub fn min(self) -> T {
        self.fold_lanes(min_lane)
    }

    /// Largest lane. NaN lanes are ignored unless every lane is NaN.
    pub fn max(self) -> T {
        self.fold_lanes(max_lane)
    }

    /// Wrapping for integers.
    pub fn sum(self) -> T {
        self.fold_lanes(T::lane_add)
    }

    /// Wrapping for integers.
    pub fn product(self) -> T {
        self.fold_lanes(T::lane_mul)
    }

    /// Smallest selected lane.
    ///
    /// There is no identity element for `min`, so an empty selection returns
    /// `T::MAX_VALUE` (`+inf` for floats). This holds for a single lane too: an unselected
    /// lane is never returned, unlike a plain scalar `min` that ignores the mask.
    pub fn min_masked(self, mask: Mask<T, N>) -> T {
        self.fold_selected(mask, min_lane).unwrap_or(T::MAX_VALUE)
    }

    /// Largest selected lane. An empty selection returns `T::MIN_VALUE` (`-inf` for
    /// floats), also for a single lane.
    pub fn max_masked(self, mask: Mask<T, N>) -> T {
        self.fold_selected(mask, max_lane).unwrap_or(T::MIN_VALUE)
    }

    /// Sum with unselected lanes counted as 0.
    pub fn sum_masked(self, mask: Mask<T, N>) -> T {
        self.select_or(mask, T::ZERO).sum()
    }

    /// Product with unselected lanes counted as 1.
    pub fn product_masked(self, mask: Mask<T, N>) -> T {
        self.select_or(mask, T::ONE).product()
    }

    /// Inclusive prefix sum: lane `i` holds the sum of lanes `0..=i`.
    pub fn partial_sum(self) -> Self {
        let mut data = self.data;
        for i in 1..N {
            data[i] = data[i - 1].lane_add(data[i]);
        }
        Self::from_array(data)
    }
}
