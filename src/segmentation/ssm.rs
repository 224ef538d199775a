use ndarray::Array2;

/// Self-similarity matrix of a feature sequence: the Gram matrix `Xᵗ·X` of
/// its columns.
///
/// The result is square with one row/column per frame and symmetric up to
/// floating-point rounding. No normalization is applied; pre-normalize the
/// columns (see [`crate::features::normalize_columns`]) for a cosine
/// similarity reading.
pub fn self_similarity(values: &Array2<f32>) -> Array2<f32> {
    values.t().dot(values)
}
