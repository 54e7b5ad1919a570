//! Operator-tagged masked assignment.
//!
//! Generic code that is written once for every width names the assignment it wants with a
//! tag type and calls [`conditional_assign`] or [`conditional_update`]. A full mask takes
//! the unmasked operator directly; any other mask goes through
//! [`Vector::masked`](crate::vector::Vector::masked), so only the selected lanes change.
//!
//! For a single lane every mask is either full or empty, and an empty mask leaves the
//! operand untouched.

mod operators;

pub use operators::{
    AndAssign, Assign, AssignOperator, DivideAssign, LeftShiftAssign, MinusAssign,
    MultiplyAssign, OrAssign, PlusAssign, PostDecrement, PostIncrement, PreDecrement,
    PreIncrement, RemainderAssign, RightShiftAssign, UpdateOperator, XorAssign,
};

use crate::{element::Element, mask::Mask, vector::Vector};

/// `lhs op= rhs` on the lanes selected by `mask`.
///
/// ```
/// use lanevec::{Vector, conditional::{PlusAssign, conditional_assign}};
///
/// let mut v = Vector::<i32>::splat(5);
/// let mask = v.simd_gt(Vector::splat(3));
/// conditional_assign::<PlusAssign, i32, 1>(&mut v, &mask, Vector::splat(2));
/// assert_eq!(v[0], 7);
/// ```
#[inline]
pub fn conditional_assign<Op, T, const N: usize>(
    lhs: &mut Vector<T, N>,
    mask: &Mask<T, N>,
    rhs: Vector<T, N>,
) where
    Op: AssignOperator<T>,
    T: Element,
{
    if mask.is_full() {
        Op::assign(lhs, rhs);
    } else {
        Op::assign_masked(lhs.masked(*mask), rhs);
    }
}

/// `++`/`--` on the lanes selected by `mask`. Returns what the operator returns: the new
/// value for the prefix forms, the previous one for the postfix forms.
#[inline]
pub fn conditional_update<Op, T, const N: usize>(lhs: &mut Vector<T, N>, mask: &Mask<T, N>) -> Vector<T, N>
where
    Op: UpdateOperator,
    T: Element,
{
    if mask.is_full() {
        Op::update(lhs)
    } else {
        Op::update_masked(lhs, *mask)
    }
}
