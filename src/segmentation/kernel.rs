use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use ndarray::Array2;
use ordered_float::OrderedFloat;

use super::error::SegmentationError;

/// Build the Gaussian-tapered checkerboard kernel of side `2 * half_size + 1`.
///
/// Quadrants on the main diagonal carry positive weight, off-diagonal
/// quadrants negative weight, and row/column `half_size` are zero
/// (`sign(0) = 0` nulls the center cross). With `normalize`, the absolute
/// weights sum to 1; a half-size of 0 cannot be normalized because the
/// kernel is identically zero.
pub fn checkerboard_kernel(
    half_size: usize,
    variance: f32,
    normalize: bool,
) -> Result<Array2<f32>, SegmentationError> {
    if !variance.is_finite() || variance <= 0.0 {
        return Err(SegmentationError::KernelVariance { value: variance });
    }
    if half_size == 0 {
        if normalize {
            return Err(SegmentationError::DegenerateKernel);
        }
        // The center cross is always zero, so L = 0 is the 1x1 zero kernel.
        // Evaluating the taper formula here would divide by zero.
        return Ok(Array2::zeros((1, 1)));
    }
    let side = 2 * half_size + 1;
    let taper = 0.5_f32.sqrt() / (half_size as f32 * variance);
    let axis: Vec<f32> = (0..side).map(|i| i as f32 - half_size as f32).collect();
    let gaussian: Vec<f32> = axis
        .iter()
        .map(|&value| (-(taper * taper) * value * value).exp())
        .collect();
    let mut kernel = Array2::zeros((side, side));
    for i in 0..side {
        for j in 0..side {
            kernel[[i, j]] = gaussian[i] * gaussian[j] * sign(axis[i]) * sign(axis[j]);
        }
    }
    if normalize {
        let abs_sum: f32 = kernel.iter().map(|value| value.abs()).sum();
        kernel.mapv_inplace(|value| value / abs_sum);
    }
    Ok(kernel)
}

fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

type KernelKey = (usize, OrderedFloat<f32>, bool);

/// Read-mostly store of built kernels keyed by `(half_size, variance,
/// normalize)`.
///
/// Kernels are pure functions of their key, so concurrent misses that race
/// to build the same entry are harmless; the first stored value wins.
#[derive(Debug, Default)]
pub struct KernelCache {
    entries: RwLock<HashMap<KernelKey, Arc<Array2<f32>>>>,
}

impl KernelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a kernel, building and storing it on first use.
    pub fn get(
        &self,
        half_size: usize,
        variance: f32,
        normalize: bool,
    ) -> Result<Arc<Array2<f32>>, SegmentationError> {
        let key = (half_size, OrderedFloat(variance), normalize);
        if let Ok(entries) = self.entries.read() {
            if let Some(kernel) = entries.get(&key) {
                return Ok(kernel.clone());
            }
        }
        let kernel = Arc::new(checkerboard_kernel(half_size, variance, normalize)?);
        if let Ok(mut entries) = self.entries.write() {
            return Ok(entries.entry(key).or_insert(kernel).clone());
        }
        Ok(kernel)
    }
}
