use std::f32::consts::PI;

use ndarray::{Array2, Axis};

use super::error::SegmentationError;
use crate::config::{SmoothingSettings, WindowShape};
use crate::features::FeatureSequence;

/// Window weights for the smoother.
pub fn smoothing_window(shape: WindowShape, len: usize) -> Vec<f32> {
    match shape {
        WindowShape::Boxcar => vec![1.0; len],
        WindowShape::Hann => {
            if len <= 1 {
                return vec![1.0; len];
            }
            let denom = (len - 1) as f32;
            (0..len)
                .map(|n| 0.5_f32 * (1.0 - (2.0 * PI * n as f32 / denom).cos()))
                .collect()
        }
    }
}

/// Smooth each feature channel with the configured window and keep every
/// `downsample`-th frame.
///
/// Convolution is "same"-length with zero padding at the edges; the window
/// is normalized by its weight sum, so the boxcar case is a running mean
/// over `filter_len` frames. The output frame rate is the input rate divided
/// by the downsampling factor.
pub fn smooth_downsample(
    features: &FeatureSequence,
    settings: &SmoothingSettings,
) -> Result<FeatureSequence, SegmentationError> {
    if settings.filter_len == 0 {
        return Err(SegmentationError::FilterLength { value: 0 });
    }
    if settings.downsample == 0 {
        return Err(SegmentationError::DownsampleFactor { value: 0 });
    }
    let weights = smoothing_window(settings.window, settings.filter_len);
    let weight_sum: f32 = weights.iter().sum();
    if weight_sum <= 0.0 {
        // A length-2 Hann window is all zeros.
        return Err(SegmentationError::WindowWeights {
            len: settings.filter_len,
        });
    }
    let channels = features.channel_count();
    let frames = features.frame_count();
    let offset = (settings.filter_len - 1) / 2;
    let mut smoothed = Array2::zeros((channels, frames));
    for (channel, row) in features.values.outer_iter().enumerate() {
        for n in 0..frames {
            let mut acc = 0.0_f32;
            for (k, weight) in weights.iter().enumerate() {
                let index = n as isize + offset as isize - k as isize;
                if index >= 0 && (index as usize) < frames {
                    acc += weight * row[index as usize];
                }
            }
            smoothed[[channel, n]] = acc / weight_sum;
        }
    }
    let kept: Vec<usize> = (0..frames).step_by(settings.downsample).collect();
    let values = smoothed.select(Axis(1), &kept);
    Ok(FeatureSequence {
        values,
        frame_rate: features.frame_rate / settings.downsample as f32,
    })
}
