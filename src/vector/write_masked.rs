use super::Vector;
use crate::{
    element::{BitElement, Element, IntElement},
    mask::Mask,
    ops::{self, BinaryOp},
};

/// A vector borrowed for writing through a mask.
///
/// Produced by [`Vector::masked`]. Every operation consumes the handle, writes the selected
/// lanes of the target and leaves the others untouched. The operator is evaluated on the
/// selected lanes only, so an integer division whose unselected lanes hold a zero divisor
/// does not panic.
///
/// For a single lane the mask is a plain boolean: the operation either happens or it does
/// not.
pub struct WriteMaskedVector<'a, T: Element, const N: usize> {
    target: &'a mut Vector<T, N>,
    mask: Mask<T, N>,
}

macro_rules! masked_ops {
    ($($(#[$doc:meta])* $name:ident => $tag:ident, $bound:ident;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(self, rhs: Vector<T, N>) -> Vector<T, N>
        where
            T: $bound,
        {
            self.apply::<ops::$tag>(rhs)
        }
    )*};
}

impl<'a, T: Element, const N: usize> WriteMaskedVector<'a, T, N> {
    pub(crate) fn new(target: &'a mut Vector<T, N>, mask: Mask<T, N>) -> Self {
        WriteMaskedVector { target, mask }
    }

    pub fn mask(&self) -> Mask<T, N> {
        self.mask
    }

    /// Copies the selected lanes of `value`. Returns the updated target.
    #[inline]
    pub fn set(self, value: Vector<T, N>) -> Vector<T, N> {
        self.update(|lane, _| value.data[lane])
    }

    /// `target[i] = Op(target[i], rhs[i])` for every selected lane `i`. Returns the updated
    /// target.
    #[inline]
    pub fn apply<Op: BinaryOp<T>>(self, rhs: Vector<T, N>) -> Vector<T, N> {
        self.update(|lane, x| Op::apply(x, rhs.data[lane]))
    }

    masked_ops! {
        add => Plus, Element;
        sub => Minus, Element;
        mul => Multiply, Element;
        div => Divide, Element;
        rem => Remainder, Element;
        bitand => And, BitElement;
        bitor => Or, BitElement;
        bitxor => Xor, BitElement;
        shl => ShiftLeft, IntElement;
        shr => ShiftRight, IntElement;
    }

    /// Adds one to the selected lanes. Returns the updated target.
    #[inline]
    pub fn increment(self) -> Vector<T, N> {
        self.add(Vector::one())
    }

    /// Subtracts one from the selected lanes. Returns the updated target.
    #[inline]
    pub fn decrement(self) -> Vector<T, N> {
        self.sub(Vector::one())
    }

    #[inline(always)]
    fn update(self, mut f: impl FnMut(usize, T) -> T) -> Vector<T, N> {
        for (lane, selected) in self.mask.iter().enumerate() {
            if selected {
                self.target.data[lane] = f(lane, self.target.data[lane]);
            }
        }
        *self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_set_partial() {
        let mut v = Vector::<f32, 4>::from_array([1.0, 2.0, 3.0, 4.0]);
        let r = v
            .masked(Mask::from_array([false, true, false, true]))
            .set(Vector::splat(0.5));
        assert_eq!(v.to_array(), [1.0, 0.5, 3.0, 0.5]);
        assert_eq!(r, v);
    }

    #[test]
    fn test_arithmetic_through_mask() {
        let m = Mask::<i32, 4>::from_array([true, false, true, false]);
        let base = Vector::<i32, 4>::from_array([10, 20, 30, 40]);
        let rhs = Vector::splat(3);

        let mut v = base;
        v.masked(m).sub(rhs);
        assert_eq!(v.to_array(), [7, 20, 27, 40]);

        let mut v = base;
        v.masked(m).mul(rhs);
        assert_eq!(v.to_array(), [30, 20, 90, 40]);

        let mut v = base;
        v.masked(m).rem(rhs);
        assert_eq!(v.to_array(), [1, 20, 0, 40]);

        let mut v = base;
        v.masked(m).shl(Vector::splat(1));
        assert_eq!(v.to_array(), [20, 20, 60, 40]);

        let mut v = base;
        v.masked(!m).bitxor(Vector::splat(-1));
        assert_eq!(v.to_array(), [10, !20, 30, !40]);
    }

    #[test]
    fn test_division_by_zero_in_unselected_lane() {
        let mut v = Vector::<i32, 4>::from_array([8, 8, 8, 8]);
        let divisor = Vector::from_array([2, 0, 4, 0]);
        let selected = divisor.simd_ne(Vector::zero());
        v.masked(selected).div(divisor);
        assert_eq!(v.to_array(), [4, 8, 2, 8]);

        let mut s = Vector::<u16>::splat(5);
        s.masked(Mask::splat(false)).div(Vector::zero());
        assert_eq!(s[0], 5);
    }

    #[test]
    fn test_increment_decrement() {
        let mut v = Vector::<u8, 4>::from_array([0, 255, 7, 7]);
        v.masked(Mask::from_array([true, true, false, false])).increment();
        assert_eq!(v.to_array(), [1, 0, 7, 7]);
        v.masked(Mask::from_array([false, false, false, true])).decrement();
        assert_eq!(v.to_array(), [1, 0, 7, 6]);
    }

    #[test]
    fn test_full_mask_matches_plain_operator() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let a = Vector::<i64, 8>::generate(|_| rng.random_range(-1000..1000));
            let b = Vector::<i64, 8>::generate(|_| rng.random_range(1..50));

            let mut c = a;
            assert_eq!(c.masked(Mask::full()).add(b), a + b);
            let mut c = a;
            assert_eq!(c.masked(Mask::full()).div(b), a / b);
            let mut c = a;
            assert_eq!(c.masked(Mask::full()).bitand(b), a & b);
            let mut c = a;
            assert_eq!(c.masked(Mask::empty()).bitor(b), a);
        }
    }

    #[test]
    fn test_mask_accessor() {
        let mut v = Vector::<f64, 2>::zero();
        let m = Mask::from_array([true, false]);
        assert_eq!(v.masked(m).mask(), m);
    }
}
