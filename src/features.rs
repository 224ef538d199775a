use ndarray::Array2;

/// A time-ordered feature matrix with one column per frame.
///
/// Rows are feature channels (e.g. pitch-class energies), columns are frames
/// sampled at `frame_rate`. The pipeline never mutates a sequence in place;
/// every stage derives a fresh one.
#[derive(Clone, Debug)]
pub struct FeatureSequence {
    /// Feature values, `channels x frames`.
    pub values: Array2<f32>,
    /// Frames per second along the column axis.
    pub frame_rate: f32,
}

impl FeatureSequence {
    pub fn new(values: Array2<f32>, frame_rate: f32) -> Self {
        Self { values, frame_rate }
    }

    pub fn channel_count(&self) -> usize {
        self.values.nrows()
    }

    pub fn frame_count(&self) -> usize {
        self.values.ncols()
    }

    /// Seconds elapsed at each frame index.
    pub fn time_axis(&self) -> Vec<f32> {
        time_axis(self.frame_count(), self.frame_rate)
    }
}

/// Per-frame time axis in seconds for `frame_count` frames at `frame_rate`.
pub fn time_axis(frame_count: usize, frame_rate: f32) -> Vec<f32> {
    (0..frame_count).map(|n| n as f32 / frame_rate).collect()
}

/// Scale every column to unit L2 norm so the Gram self-similarity matrix
/// reads as cosine similarity. Zero and non-finite columns are left as-is.
pub fn normalize_columns(values: &Array2<f32>) -> Array2<f32> {
    let mut out = values.clone();
    for mut column in out.columns_mut() {
        let mut sum = 0.0_f32;
        for value in column.iter() {
            sum += value * value;
        }
        if !sum.is_finite() || sum <= 0.0 {
            continue;
        }
        let norm = sum.sqrt();
        column.mapv_inplace(|value| value / norm);
    }
    out
}

/// Rescale a slice to `[0, 1]`. Constant or empty input maps to all zeros.
pub fn normalize_range(values: &[f32]) -> Vec<f32> {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &value in values {
        if value.is_finite() {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if !min.is_finite() || max <= min {
        return vec![0.0; values.len()];
    }
    let span = max - min;
    values.iter().map(|&value| (value - min) / span).collect()
}
