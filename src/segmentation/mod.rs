//! Structural boundary estimation over a self-similarity matrix.
//!
//! The pipeline smooths and downsamples a feature sequence, computes its
//! self-similarity matrix, correlates a Gaussian-tapered checkerboard kernel
//! along the diagonal into a novelty curve, and picks boundary times from
//! the novelty peaks. Each stage is a pure function usable on its own; the
//! entry points below wire them together.

mod boundaries;
mod error;
mod kernel;
mod novelty;
mod peaks;
pub mod report;
mod smooth;
mod ssm;

pub use boundaries::{Boundaries, assemble_boundaries};
pub use error::SegmentationError;
pub use kernel::{KernelCache, checkerboard_kernel};
pub use novelty::novelty_curve;
pub use peaks::{peak_to_mean_ratio, pick_peaks};
pub use smooth::{smooth_downsample, smoothing_window};
pub use ssm::self_similarity;

use ndarray::Array2;
use tracing::debug;

use crate::config::SegmentationConfig;
use crate::features::FeatureSequence;

/// Intermediate products of the pipeline up to the novelty curve.
#[derive(Clone, Debug)]
pub struct StructureFeatures {
    /// Smoothed, downsampled feature sequence.
    pub smoothed: FeatureSequence,
    /// Self-similarity matrix of the smoothed sequence.
    pub ssm: Array2<f32>,
    /// Checkerboard novelty per smoothed frame.
    pub novelty: Vec<f32>,
}

/// Full pipeline output.
#[derive(Clone, Debug)]
pub struct Segmentation {
    /// Self-similarity matrix of the smoothed sequence.
    pub ssm: Array2<f32>,
    /// Checkerboard novelty per smoothed frame.
    pub novelty: Vec<f32>,
    /// Boundary times and the accepted peak frames.
    pub boundaries: Boundaries,
    /// Frame rate of `novelty` and of the boundary frame indices.
    pub frame_rate: f32,
}

/// Run the pipeline up to the novelty curve.
///
/// Validates the configuration and input eagerly, then smooths, builds the
/// self-similarity matrix, and correlates the checkerboard kernel fetched
/// from `kernels`.
pub fn structure_features(
    features: &FeatureSequence,
    config: &SegmentationConfig,
    kernels: &KernelCache,
) -> Result<StructureFeatures, SegmentationError> {
    config.validate()?;
    if features.frame_count() == 0 {
        return Err(SegmentationError::EmptyFeatureSequence);
    }
    if !features.frame_rate.is_finite() || features.frame_rate <= 0.0 {
        return Err(SegmentationError::FrameRate {
            value: features.frame_rate,
        });
    }
    let smoothed = smooth_downsample(features, &config.smoothing)?;
    let ssm = self_similarity(&smoothed.values);
    let kernel = kernels.get(
        config.kernel.half_size,
        config.kernel.variance,
        config.kernel.normalize,
    )?;
    let novelty = novelty_curve(&ssm, &kernel, config.kernel.exclude_edges)?;
    debug!(
        "novelty: frames={}, frame_rate={:.3}, kernel_half_size={}",
        smoothed.frame_count(),
        smoothed.frame_rate,
        config.kernel.half_size
    );
    Ok(StructureFeatures {
        smoothed,
        ssm,
        novelty,
    })
}

/// Run the full pipeline: novelty, peak picking, boundary assembly.
pub fn segment(
    features: &FeatureSequence,
    config: &SegmentationConfig,
    kernels: &KernelCache,
) -> Result<Segmentation, SegmentationError> {
    let StructureFeatures {
        smoothed,
        ssm,
        novelty,
    } = structure_features(features, config, kernels)?;
    let peak_frames = pick_peaks(&novelty, &config.peaks);
    let time_sec = smoothed.time_axis();
    let bounds = assemble_boundaries(&peak_frames, &time_sec)?;
    debug!(
        "boundaries: peaks={}, times={}",
        bounds.frames.len(),
        bounds.times.len()
    );
    Ok(Segmentation {
        ssm,
        novelty,
        boundaries: bounds,
        frame_rate: smoothed.frame_rate,
    })
}
