use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config_defaults::{
    default_downsample, default_filter_len, default_half_window, default_kernel_half_size,
    default_kernel_variance, default_min_distance, default_threshold, default_true,
};
use crate::segmentation::SegmentationError;

/// Errors that may occur while loading or saving pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML: {0}")]
    SerializeToml(toml::ser::Error),
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Window shape used by the feature smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowShape {
    /// Flat window; smoothing becomes a running mean.
    #[default]
    Boxcar,
    /// Symmetric Hann window.
    Hann,
}

/// Feature smoothing and downsampling parameters.
///
/// Config keys: `filter_len`, `downsample`, `window`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingSettings {
    /// Smoothing window length in frames.
    #[serde(default = "default_filter_len")]
    pub filter_len: usize,
    /// Keep every n-th frame after smoothing.
    #[serde(default = "default_downsample")]
    pub downsample: usize,
    #[serde(default)]
    pub window: WindowShape,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            filter_len: default_filter_len(),
            downsample: default_downsample(),
            window: WindowShape::default(),
        }
    }
}

/// Checkerboard kernel and novelty parameters.
///
/// Config keys: `half_size`, `variance`, `normalize`, `exclude_edges`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelSettings {
    /// Kernel half-size `L`; the kernel is `(2L+1) x (2L+1)`.
    #[serde(default = "default_kernel_half_size")]
    pub half_size: usize,
    /// Gaussian taper variance.
    #[serde(default = "default_kernel_variance")]
    pub variance: f32,
    /// Scale the kernel so its absolute weights sum to 1.
    #[serde(default = "default_true")]
    pub normalize: bool,
    /// Zero novelty values whose kernel footprint reads past the matrix edge.
    #[serde(default = "default_true")]
    pub exclude_edges: bool,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            half_size: default_kernel_half_size(),
            variance: default_kernel_variance(),
            normalize: true,
            exclude_edges: true,
        }
    }
}

/// Peak picking parameters.
///
/// Config keys: `half_window`, `threshold`, `min_distance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakSettings {
    /// Half-width of the local-mean window, in frames.
    #[serde(default = "default_half_window")]
    pub half_window: usize,
    /// Minimum peak-to-local-mean ratio for an accepted boundary.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Minimum spacing between accepted peaks, in frames.
    #[serde(default = "default_min_distance")]
    pub min_distance: usize,
}

impl Default for PeakSettings {
    fn default() -> Self {
        Self {
            half_window: default_half_window(),
            threshold: default_threshold(),
            min_distance: default_min_distance(),
        }
    }
}

/// Aggregate pipeline configuration.
///
/// Config keys (TOML): `smoothing`, `kernel`, `peaks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentationConfig {
    #[serde(default)]
    pub smoothing: SmoothingSettings,
    #[serde(default)]
    pub kernel: KernelSettings,
    #[serde(default)]
    pub peaks: PeakSettings,
}

impl SegmentationConfig {
    /// Reject invalid parameters before any heavy computation.
    pub fn validate(&self) -> Result<(), SegmentationError> {
        if self.smoothing.filter_len == 0 {
            return Err(SegmentationError::FilterLength { value: 0 });
        }
        if self.smoothing.downsample == 0 {
            return Err(SegmentationError::DownsampleFactor { value: 0 });
        }
        if !self.kernel.variance.is_finite() || self.kernel.variance <= 0.0 {
            return Err(SegmentationError::KernelVariance {
                value: self.kernel.variance,
            });
        }
        if self.kernel.half_size == 0 && self.kernel.normalize {
            return Err(SegmentationError::DegenerateKernel);
        }
        Ok(())
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(ConfigError::SerializeToml)?;
        std::fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SegmentationConfig::default();
        assert_eq!(config.smoothing.filter_len, 41);
        assert_eq!(config.smoothing.downsample, 10);
        assert_eq!(config.smoothing.window, WindowShape::Boxcar);
        assert_eq!(config.kernel.half_size, 10);
        assert_eq!(config.kernel.variance, 1.0);
        assert!(config.kernel.normalize);
        assert!(config.kernel.exclude_edges);
        assert_eq!(config.peaks.half_window, 10);
        assert_eq!(config.peaks.threshold, 1.35);
        assert_eq!(config.peaks.min_distance, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = SegmentationConfig::from_toml_str("").expect("parse");
        assert_eq!(config.smoothing.filter_len, 41);
        assert_eq!(config.peaks.min_distance, 7);
    }

    #[test]
    fn partial_toml_overrides_single_fields() {
        let text = "[kernel]\nhalf_size = 5\n\n[peaks]\nthreshold = 1.1\n";
        let config = SegmentationConfig::from_toml_str(text).expect("parse");
        assert_eq!(config.kernel.half_size, 5);
        assert_eq!(config.kernel.variance, 1.0);
        assert!((config.peaks.threshold - 1.1).abs() < 1e-6);
        assert_eq!(config.peaks.half_window, 10);
    }

    #[test]
    fn validate_rejects_zero_filter_len() {
        let mut config = SegmentationConfig::default();
        config.smoothing.filter_len = 0;
        assert!(matches!(
            config.validate(),
            Err(SegmentationError::FilterLength { value: 0 })
        ));
    }

    #[test]
    fn validate_rejects_zero_downsample() {
        let mut config = SegmentationConfig::default();
        config.smoothing.downsample = 0;
        assert!(matches!(
            config.validate(),
            Err(SegmentationError::DownsampleFactor { value: 0 })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_variance() {
        let mut config = SegmentationConfig::default();
        config.kernel.variance = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SegmentationError::KernelVariance { .. })
        ));
    }

    #[test]
    fn validate_rejects_normalized_degenerate_kernel() {
        let mut config = SegmentationConfig::default();
        config.kernel.half_size = 0;
        assert!(matches!(
            config.validate(),
            Err(SegmentationError::DegenerateKernel)
        ));
        config.kernel.normalize = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("segpal.toml");
        let mut config = SegmentationConfig::default();
        config.smoothing.window = WindowShape::Hann;
        config.kernel.half_size = 4;
        config.save(&path).expect("save");
        let loaded = SegmentationConfig::load(&path).expect("load");
        assert_eq!(loaded.smoothing.window, WindowShape::Hann);
        assert_eq!(loaded.kernel.half_size, 4);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = SegmentationConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
