use crate::config::PeakSettings;

/// Ratio of each novelty value to the mean of its surrounding window.
///
/// The window spans `[n - half_window, n + half_window]` clamped to the
/// curve. The ratio is forced to 0 wherever the local mean is not positive:
/// a peak reading against a zero baseline is undefined, and against a
/// negative one the quotient flips sign and becomes meaningless.
pub fn peak_to_mean_ratio(novelty: &[f32], half_window: usize) -> Vec<f32> {
    let frames = novelty.len();
    let mut ratio = Vec::with_capacity(frames);
    for n in 0..frames {
        let start = n.saturating_sub(half_window);
        let end = (n + half_window + 1).min(frames);
        let window = &novelty[start..end];
        let mean = window.iter().sum::<f32>() / window.len() as f32;
        ratio.push(if mean > 0.0 { novelty[n] / mean } else { 0.0 });
    }
    ratio
}

/// Frame indices of accepted novelty peaks, ascending.
///
/// Local maxima of the peak-to-mean ratio are thinned so that no two stay
/// closer than `min_distance` frames (the taller peak wins, the earlier
/// index on ties), then filtered by the ratio threshold.
pub fn pick_peaks(novelty: &[f32], settings: &PeakSettings) -> Vec<usize> {
    let ratio = peak_to_mean_ratio(novelty, settings.half_window);
    let mut peaks: Vec<(usize, f32)> = Vec::new();
    let mut last_frame: Option<usize> = None;
    let mut last_value = 0.0_f32;
    for n in 1..ratio.len().saturating_sub(1) {
        let value = ratio[n];
        if value <= 0.0 || value < ratio[n - 1] || value < ratio[n + 1] {
            continue;
        }
        if let Some(prev) = last_frame {
            if n - prev < settings.min_distance {
                if value > last_value {
                    if let Some(last) = peaks.last_mut() {
                        *last = (n, value);
                    }
                    last_frame = Some(n);
                    last_value = value;
                }
                continue;
            }
        }
        peaks.push((n, value));
        last_frame = Some(n);
        last_value = value;
    }
    peaks
        .into_iter()
        .filter(|&(_, value)| value >= settings.threshold)
        .map(|(frame, _)| frame)
        .collect()
}
