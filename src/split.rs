use ndarray::{Array2, s};
use thiserror::Error;

/// Errors raised by the segment splitter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// A split index referenced a position outside the sequence.
    #[error("Split index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Cut a sequence into contiguous pieces at the given indices.
///
/// Indices must lie in `[0, len)` and are sorted internally; duplicates or an
/// index of 0 produce empty pieces. Concatenating the result in order
/// reproduces the input.
pub fn split_at_indices<T: Clone>(values: &[T], indices: &[usize]) -> Result<Vec<Vec<T>>, SplitError> {
    for &index in indices {
        if index >= values.len() {
            return Err(SplitError::IndexOutOfRange {
                index,
                len: values.len(),
            });
        }
    }
    let mut cuts: Vec<usize> = indices.to_vec();
    cuts.sort_unstable();
    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &cut in &cuts {
        pieces.push(values[start..cut].to_vec());
        start = cut;
    }
    pieces.push(values[start..].to_vec());
    Ok(pieces)
}

/// Cut a feature matrix into column blocks at the given frame indices.
pub fn split_columns(
    values: &Array2<f32>,
    indices: &[usize],
) -> Result<Vec<Array2<f32>>, SplitError> {
    let frames = values.ncols();
    for &index in indices {
        if index >= frames {
            return Err(SplitError::IndexOutOfRange { index, len: frames });
        }
    }
    let mut cuts: Vec<usize> = indices.to_vec();
    cuts.sort_unstable();
    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for &cut in &cuts {
        pieces.push(values.slice(s![.., start..cut]).to_owned());
        start = cut;
    }
    pieces.push(values.slice(s![.., start..]).to_owned());
    Ok(pieces)
}
