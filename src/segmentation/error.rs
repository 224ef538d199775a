use thiserror::Error;

/// Errors raised by the boundary-estimation pipeline.
///
/// Configuration problems are reported before any heavy computation runs;
/// degenerate inputs are reported by the stage that detects them. The
/// pipeline is deterministic, so a failing invocation fails identically on
/// retry.
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// Smoothing filter length must be at least 1.
    #[error("Filter length must be at least 1, got {value}")]
    FilterLength { value: usize },
    /// Downsampling factor must be at least 1.
    #[error("Downsample factor must be at least 1, got {value}")]
    DownsampleFactor { value: usize },
    /// The smoothing window has no usable weight.
    #[error("Smoothing window of length {len} has zero total weight")]
    WindowWeights { len: usize },
    /// Kernel taper variance must be positive and finite.
    #[error("Kernel variance must be positive, got {value}")]
    KernelVariance { value: f32 },
    /// A half-size of 0 yields an all-zero kernel, which cannot be normalized.
    #[error("Kernel half-size 0 yields an all-zero kernel and cannot be normalized")]
    DegenerateKernel,
    /// The novelty kernel must be square with odd side length.
    #[error("Kernel must be square with odd side length, got {rows}x{cols}")]
    KernelShape { rows: usize, cols: usize },
    /// The self-similarity matrix must be square.
    #[error("Self-similarity matrix must be square, got {rows}x{cols}")]
    MatrixShape { rows: usize, cols: usize },
    /// The feature sequence has no frames.
    #[error("Feature sequence has no frames")]
    EmptyFeatureSequence,
    /// The feature sequence's frame rate must be positive and finite.
    #[error("Frame rate must be positive, got {value}")]
    FrameRate { value: f32 },
    /// An accepted peak frame lies outside the time axis.
    #[error("Peak frame {frame} out of range for {frames} frames")]
    PeakFrameOutOfRange { frame: usize, frames: usize },
}
