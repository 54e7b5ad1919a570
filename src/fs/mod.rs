//! File system input.
//!
//! Lane data for the command line tools comes from NumPy `.npy` files.

mod npy_load;

pub use npy_load::{LaneBuffer, load_lanes_from_npy};
