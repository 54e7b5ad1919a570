//! Load/store configuration shared by every memory entry point of a vector.
//!
//! Flags are a `bitflags` set so that they can be combined: `ALIGNED | STREAMING`.

mod flags;

pub use flags::LoadStoreFlags;
