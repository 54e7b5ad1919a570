//! Operator tags.
//!
//! Each lane-wise operator is defined exactly once, as a zero-sized tag implementing
//! [`BinaryOp`] or [`CompareOp`]. Vectors, write-masked vectors and the conditional
//! assignment protocol are all generic over these tags instead of repeating a loop per
//! operator symbol.

mod binary;
mod compare;

pub use binary::{
    And, BinaryOp, Divide, Minus, Multiply, Or, Plus, Remainder, ShiftLeft, ShiftRight, Xor,
};
pub use compare::{CompareOp, Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
