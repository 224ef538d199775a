use ndarray::{Array2, Zip, s};

use super::error::SegmentationError;

/// Correlate a checkerboard kernel along the main diagonal of a
/// self-similarity matrix.
///
/// The matrix is zero-padded by the kernel half-size on every side so each
/// frame gets a full-size footprint; the value at frame `n` is the
/// elementwise product of the kernel with the padded block centered at
/// `(n, n)`, summed. With `exclude_edges`, the first and last `half_size`
/// values are zeroed because their footprints read past the real matrix.
pub fn novelty_curve(
    ssm: &Array2<f32>,
    kernel: &Array2<f32>,
    exclude_edges: bool,
) -> Result<Vec<f32>, SegmentationError> {
    let side = kernel.nrows();
    if kernel.ncols() != side || side % 2 == 0 {
        return Err(SegmentationError::KernelShape {
            rows: kernel.nrows(),
            cols: kernel.ncols(),
        });
    }
    let frames = ssm.nrows();
    if ssm.ncols() != frames {
        return Err(SegmentationError::MatrixShape {
            rows: ssm.nrows(),
            cols: ssm.ncols(),
        });
    }
    let half_size = (side - 1) / 2;
    let mut padded = Array2::zeros((frames + 2 * half_size, frames + 2 * half_size));
    padded
        .slice_mut(s![half_size..half_size + frames, half_size..half_size + frames])
        .assign(ssm);
    let mut novelty = Vec::with_capacity(frames);
    for n in 0..frames {
        let window = padded.slice(s![n..n + side, n..n + side]);
        let mut acc = 0.0_f32;
        Zip::from(&window).and(kernel).for_each(|&value, &weight| {
            acc += value * weight;
        });
        novelty.push(acc);
    }
    if exclude_edges {
        for value in novelty.iter_mut().take(half_size.min(frames)) {
            *value = 0.0;
        }
        for value in novelty.iter_mut().skip(frames.saturating_sub(half_size)) {
            *value = 0.0;
        }
    }
    Ok(novelty)
}

#[cfg(test)]
mod tests {
    use super::super::kernel::checkerboard_kernel;
    use super::super::ssm::self_similarity;
    use super::*;
    use ndarray::Array2;

    fn two_block_ssm(frames: usize, boundary: usize) -> Array2<f32> {
        let mut features = Array2::zeros((2, frames));
        for n in 0..frames {
            let channel = usize::from(n >= boundary);
            features[[channel, n]] = 1.0;
        }
        self_similarity(&features)
    }

    #[test]
    fn edge_frames_are_suppressed() {
        let ssm = two_block_ssm(12, 6);
        let kernel = checkerboard_kernel(3, 1.0, true).expect("kernel");
        let novelty = novelty_curve(&ssm, &kernel, true).expect("novelty");
        assert_eq!(novelty.len(), 12);
        for n in 0..3 {
            assert_eq!(novelty[n], 0.0);
            assert_eq!(novelty[12 - 1 - n], 0.0);
        }
    }

    #[test]
    fn without_exclusion_edges_keep_their_values() {
        let ssm = two_block_ssm(12, 6);
        let kernel = checkerboard_kernel(3, 1.0, true).expect("kernel");
        let novelty = novelty_curve(&ssm, &kernel, false).expect("novelty");
        // Frame 0 sits on a uniform block corner; positive quadrant weight
        // remains once padding zeros out the rest.
        assert!(novelty[0] > 0.0);
    }

    #[test]
    fn block_transition_is_the_novelty_maximum() {
        let ssm = two_block_ssm(30, 15);
        let kernel = checkerboard_kernel(4, 1.0, true).expect("kernel");
        let novelty = novelty_curve(&ssm, &kernel, true).expect("novelty");
        let (argmax, _) = novelty
            .iter()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |(bi, bv), (i, &v)| {
                if v > bv { (i, v) } else { (bi, bv) }
            });
        assert_eq!(argmax, 15);
        // Uniform regions away from the transition stay near zero.
        assert!(novelty[8].abs() < 1e-4);
        assert!(novelty[22].abs() < 1e-4);
    }

    #[test]
    fn kernel_shape_is_validated() {
        let ssm = Array2::<f32>::zeros((5, 5));
        let even = Array2::<f32>::zeros((4, 4));
        assert!(matches!(
            novelty_curve(&ssm, &even, true),
            Err(SegmentationError::KernelShape { rows: 4, cols: 4 })
        ));
        let rect = Array2::<f32>::zeros((3, 5));
        assert!(matches!(
            novelty_curve(&ssm, &rect, true),
            Err(SegmentationError::KernelShape { .. })
        ));
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let ssm = Array2::<f32>::zeros((4, 6));
        let kernel = checkerboard_kernel(1, 1.0, true).expect("kernel");
        assert!(matches!(
            novelty_curve(&ssm, &kernel, true),
            Err(SegmentationError::MatrixShape { rows: 4, cols: 6 })
        ));
    }

    #[test]
    fn empty_matrix_yields_empty_curve() {
        let ssm = Array2::<f32>::zeros((0, 0));
        let kernel = checkerboard_kernel(2, 1.0, true).expect("kernel");
        assert!(novelty_curve(&ssm, &kernel, true).expect("novelty").is_empty());
    }
}
