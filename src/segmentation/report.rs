use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::Segmentation;

/// Flat summary of a segmentation run for downstream consumers.
///
/// The self-similarity matrix is omitted; it is cheap to recompute and
/// dominates the serialized size.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentationReport {
    pub frame_rate: f32,
    pub boundary_times: Vec<f32>,
    pub boundary_frames: Vec<usize>,
    pub novelty: Vec<f32>,
}

/// Errors that may occur while writing a segmentation report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to serialize the report to JSON.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Failed to write the report file.
    #[error("Failed to write report to {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl Segmentation {
    /// Flatten the run into a serializable report.
    pub fn report(&self) -> SegmentationReport {
        SegmentationReport {
            frame_rate: self.frame_rate,
            boundary_times: self.boundaries.times.clone(),
            boundary_frames: self.boundaries.frames.clone(),
            novelty: self.novelty.clone(),
        }
    }
}

/// Write a report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &SegmentationReport) -> Result<(), ReportError> {
    let data = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, data).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
