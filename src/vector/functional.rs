use super::Vector;
use crate::{element::Element, mask::Mask};

impl<T: Element, const N: usize> Vector<T, N> {
    /// Maps `f` over every lane.
    #[inline]
    pub fn apply<F: FnMut(T) -> T>(self, f: F) -> Self {
        Self::from_array(self.data.map(f))
    }

    /// Maps `f` over the selected lanes; the others pass through unchanged. `f` is not
    /// called for unselected lanes.
    #[inline]
    pub fn apply_masked<F: FnMut(T) -> T>(self, mut f: F, mask: Mask<T, N>) -> Self {
        let mut data = self.data;
        for (x, selected) in data.iter_mut().zip(mask.iter()) {
            if selected {
                *x = f(*x);
            }
        }
        Self::from_array(data)
    }

    /// Calls `f` with every lane, in lane order.
    #[inline]
    pub fn call<F: FnMut(T)>(&self, f: F) {
        self.data.iter().copied().for_each(f);
    }

    /// Calls `f` with every selected lane, in lane order.
    #[inline]
    pub fn call_masked<F: FnMut(T)>(&self, f: F, mask: Mask<T, N>) {
        self.data
            .iter()
            .copied()
            .zip(mask.iter())
            .filter_map(|(x, selected)| selected.then_some(x))
            .for_each(f);
    }

    /// Calls `f` with every lane, in ascending order of value.
    pub fn call_with_values_sorted<F: FnMut(T)>(&self, f: F) {
        self.sorted().call(f);
    }

    /// Overwrites lane `i` with `f(i)`.
    #[inline]
    pub fn fill<F: FnMut(usize) -> T>(&mut self, f: F) {
        *self = Self::generate(f);
    }

    /// Overwrites every lane with a fresh call to `f`, in lane order.
    #[inline]
    pub fn fill_with<F: FnMut() -> T>(&mut self, mut f: F) {
        *self = Self::generate(|_| f());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        assert_eq!(v.apply(|x| x * x).to_array(), [1, 4, 9, 16]);
    }

    #[test]
    fn test_apply_masked_skips_unselected_lanes() {
        let v = Vector::<i32, 4>::from_array([1, 0, 3, 0]);
        let m = v.simd_ne(Vector::zero());
        let mut calls = 0;
        let r = v.apply_masked(
            |x| {
                calls += 1;
                100 / x
            },
            m,
        );
        assert_eq!(r.to_array(), [100, 0, 33, 0]);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_single_lane_apply_masked() {
        let v = Vector::<f32>::splat(2.0);
        assert_eq!(v.apply_masked(|x| x * 10.0, Mask::splat(true))[0], 20.0);
        assert_eq!(v.apply_masked(|x| x * 10.0, Mask::splat(false))[0], 2.0);
    }

    #[test]
    fn test_call_visits_lanes_in_order() {
        let v = Vector::<u8, 4>::from_array([4, 3, 2, 1]);
        let mut seen = Vec::new();
        v.call(|x| seen.push(x));
        assert_eq!(seen, vec![4, 3, 2, 1]);

        let mut sorted = Vec::new();
        v.call_with_values_sorted(|x| sorted.push(x));
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_call_masked() {
        let v = Vector::<u8, 4>::from_array([4, 3, 2, 1]);
        let mut seen = Vec::new();
        v.call_masked(|x| seen.push(x), Mask::from_array([false, true, false, true]));
        assert_eq!(seen, vec![3, 1]);

        let mut untouched = true;
        Vector::<u8>::splat(1).call_masked(|_| untouched = false, Mask::splat(false));
        assert!(untouched);
    }

    #[test]
    fn test_fill_and_generate() {
        let mut v = Vector::<f64, 4>::zero();
        v.fill(|i| i as f64 * 0.5);
        assert_eq!(v.to_array(), [0.0, 0.5, 1.0, 1.5]);

        let mut counter = 10;
        v.fill_with(|| {
            counter += 1;
            counter as f64
        });
        assert_eq!(v.to_array(), [11.0, 12.0, 13.0, 14.0]);

        let g = Vector::<i32>::generate(|i| i as i32 + 5);
        assert_eq!(g[0], 5);
    }
}
