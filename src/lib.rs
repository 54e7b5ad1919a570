#![cfg_attr(feature = "portable-simd", feature(portable_simd))]

pub mod conditional;
pub mod conformance;
pub mod element;
pub mod fs;
pub mod mask;
pub mod memory;
pub mod ops;
mod serialize;
#[cfg(feature = "portable-simd")]
pub mod simd;
pub mod vector;

pub use conditional::{conditional_assign, conditional_update};
pub use element::{BitElement, CastElement, Element, FloatElement, IntElement, is_implicit_cast_allowed};
pub use mask::Mask;
pub use memory::LoadStoreFlags;
pub use vector::{IndexVector, Vector, WriteMaskedVector};
