use std::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, RemAssign,
    ShlAssign, ShrAssign, SubAssign,
};

use crate::{
    element::{BitElement, Element, IntElement},
    mask::Mask,
    ops,
    vector::{Vector, WriteMaskedVector},
};

/// A compound assignment `lhs op= rhs`, in an unmasked and a write-masked flavour.
pub trait AssignOperator<T: Element> {
    /// Applies the assignment to every lane of `lhs`.
    fn assign<const N: usize>(lhs: &mut Vector<T, N>, rhs: Vector<T, N>);

    /// Applies the assignment to the lanes selected by the handle.
    fn assign_masked<const N: usize>(target: WriteMaskedVector<'_, T, N>, rhs: Vector<T, N>);
}

/// A value-free update (`++`/`--`), returning either the new or the previous value.
pub trait UpdateOperator {
    fn update<T: Element, const N: usize>(lhs: &mut Vector<T, N>) -> Vector<T, N>;

    fn update_masked<T: Element, const N: usize>(
        lhs: &mut Vector<T, N>,
        mask: Mask<T, N>,
    ) -> Vector<T, N>;
}

/// Plain assignment `lhs = rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Assign;

impl<T: Element> AssignOperator<T> for Assign {
    #[inline(always)]
    fn assign<const N: usize>(lhs: &mut Vector<T, N>, rhs: Vector<T, N>) {
        *lhs = rhs;
    }

    #[inline(always)]
    fn assign_masked<const N: usize>(target: WriteMaskedVector<'_, T, N>, rhs: Vector<T, N>) {
        target.set(rhs);
    }
}

macro_rules! compound_assign_tags {
    ($($tag:ident: $bound:ident => $assign_trait:ident::$assign_method:ident, $op:ident;)*) => {$(
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $tag;

        impl<T: $bound> AssignOperator<T> for $tag {
            #[inline(always)]
            fn assign<const N: usize>(lhs: &mut Vector<T, N>, rhs: Vector<T, N>) {
                $assign_trait::$assign_method(lhs, rhs);
            }

            #[inline(always)]
            fn assign_masked<const N: usize>(target: WriteMaskedVector<'_, T, N>, rhs: Vector<T, N>) {
                target.apply::<ops::$op>(rhs);
            }
        }
    )*};
}

compound_assign_tags! {
    PlusAssign: Element => AddAssign::add_assign, Plus;
    MinusAssign: Element => SubAssign::sub_assign, Minus;
    MultiplyAssign: Element => MulAssign::mul_assign, Multiply;
    DivideAssign: Element => DivAssign::div_assign, Divide;
    RemainderAssign: Element => RemAssign::rem_assign, Remainder;
    XorAssign: BitElement => BitXorAssign::bitxor_assign, Xor;
    AndAssign: BitElement => BitAndAssign::bitand_assign, And;
    OrAssign: BitElement => BitOrAssign::bitor_assign, Or;
    LeftShiftAssign: IntElement => ShlAssign::shl_assign, ShiftLeft;
    RightShiftAssign: IntElement => ShrAssign::shr_assign, ShiftRight;
}

/// `++lhs`: returns the incremented value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PreIncrement;

/// `lhs++`: returns the value before the increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PostIncrement;

/// `--lhs`: returns the decremented value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PreDecrement;

/// `lhs--`: returns the value before the decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PostDecrement;

impl UpdateOperator for PreIncrement {
    fn update<T: Element, const N: usize>(lhs: &mut Vector<T, N>) -> Vector<T, N> {
        lhs.pre_increment()
    }

    fn update_masked<T: Element, const N: usize>(
        lhs: &mut Vector<T, N>,
        mask: Mask<T, N>,
    ) -> Vector<T, N> {
        lhs.masked(mask).increment()
    }
}

impl UpdateOperator for PostIncrement {
    fn update<T: Element, const N: usize>(lhs: &mut Vector<T, N>) -> Vector<T, N> {
        lhs.post_increment()
    }

    fn update_masked<T: Element, const N: usize>(
        lhs: &mut Vector<T, N>,
        mask: Mask<T, N>,
    ) -> Vector<T, N> {
        let previous = *lhs;
        lhs.masked(mask).increment();
        previous
    }
}

impl UpdateOperator for PreDecrement {
    fn update<T: Element, const N: usize>(lhs: &mut Vector<T, N>) -> Vector<T, N> {
        lhs.pre_decrement()
    }

    fn update_masked<T: Element, const N: usize>(
        lhs: &mut Vector<T, N>,
        mask: Mask<T, N>,
    ) -> Vector<T, N> {
        lhs.masked(mask).decrement()
    }
}

impl UpdateOperator for PostDecrement {
    fn update<T: Element, const N: usize>(lhs: &mut Vector<T, N>) -> Vector<T, N> {
        lhs.post_decrement()
    }

    fn update_masked<T: Element, const N: usize>(
        lhs: &mut Vector<T, N>,
        mask: Mask<T, N>,
    ) -> Vector<T, N> {
        let previous = *lhs;
        lhs.masked(mask).decrement();
        previous
    }
}
