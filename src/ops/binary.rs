use crate::element::{BitElement, Element, IntElement};

/// A lane-wise binary operator producing a lane of the same type.
pub trait BinaryOp<T: Element> {
    const SYMBOL: &'static str;

    fn apply(lhs: T, rhs: T) -> T;
}

macro_rules! binary_tags {
    ($($(#[$doc:meta])* $tag:ident: $bound:ident => $symbol:literal, $lane_fn:ident;)*) => {$(
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $tag;

        impl<T: $bound> BinaryOp<T> for $tag {
            const SYMBOL: &'static str = $symbol;

            #[inline(always)]
            fn apply(lhs: T, rhs: T) -> T {
                lhs.$lane_fn(rhs)
            }
        }
    )*};
}

binary_tags! {
    /// Wrapping for integers.
    Plus: Element => "+", lane_add;
    /// Wrapping for integers.
    Minus: Element => "-", lane_sub;
    /// Wrapping for integers.
    Multiply: Element => "*", lane_mul;
    /// Panics on integer division by zero or overflow.
    Divide: Element => "/", lane_div;
    Remainder: Element => "%", lane_rem;
    And: BitElement => "&", lane_and;
    Or: BitElement => "|", lane_or;
    Xor: BitElement => "^", lane_xor;
    ShiftLeft: IntElement => "<<", lane_shl;
    ShiftRight: IntElement => ">>", lane_shr;
}
