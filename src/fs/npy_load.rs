use crate::{mask::Mask, vector::Vector};

use std::{
    io::{Error, ErrorKind, Result},
    path::Path,
};

/// Values packed into vectors of `N` lanes. The last vector is zero padded when `len` is
/// not a multiple of `N`.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneBuffer<const N: usize> {
    pub lanes: Vec<Vector<f32, N>>,
    /// Number of values read, padding excluded.
    pub len: usize,
}

impl<const N: usize> LaneBuffer<N> {
    /// Selects the lanes of `lanes[index]` that hold a value rather than padding.
    pub fn valid(&self, index: usize) -> Mask<f32, N> {
        let filled = self.len.saturating_sub(index * N);
        Mask::from_array(std::array::from_fn(|lane| lane < filled))
    }
}

/// Reads a 1-D or 2-D `f32` NumPy file and packs its values, in row-major order, into
/// vectors of `N` lanes. Other ranks and element types are `ErrorKind::InvalidData`.
pub fn load_lanes_from_npy<const N: usize>(path: impl AsRef<Path>) -> Result<LaneBuffer<N>> {
    let bytes = std::fs::read(path)?;
    lanes_from_npy_bytes(&bytes)
}

pub(crate) fn lanes_from_npy_bytes<const N: usize>(bytes: &[u8]) -> Result<LaneBuffer<N>> {
    let npy = npyz::NpyFile::new(bytes)?;
    let shape = npy.shape().to_vec();
    if shape.is_empty() || shape.len() > 2 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("expected a 1-D or 2-D array, found shape {shape:?}"),
        ));
    }

    let values = npy
        .data::<f32>()
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))?
        .collect::<Result<Vec<f32>>>()?;
    Ok(LaneBuffer {
        lanes: pack_padded(&values),
        len: values.len(),
    })
}

fn pack_padded<const N: usize>(values: &[f32]) -> Vec<Vector<f32, N>> {
    let (chunks, remainder) = values.as_chunks::<N>();
    let mut packed = Vec::with_capacity(values.len().div_ceil(N));
    packed.extend(chunks.iter().map(|&chunk| Vector::from_array(chunk)));

    if !remainder.is_empty() {
        let mut tail = Vector::zero();
        tail.as_mut_slice()[..remainder.len()].copy_from_slice(remainder);
        packed.push(tail);
    }
    packed
}
