use serde::Serialize;

use super::error::SegmentationError;

/// Sorted boundary times with the accepted peak frames that produced them.
///
/// `times` always starts at 0.0 and ends at the final time-axis value, with
/// exact duplicates collapsed. `frames` is the raw accepted-peak list in
/// ascending order; the synthetic start and end entries have no frame index,
/// and a peak that maps exactly onto 0.0 or the end time stays in `frames`
/// even though `times` deduplicates it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Boundaries {
    pub times: Vec<f32>,
    pub frames: Vec<usize>,
}

/// Convert accepted peak frames into a boundary time list over `time_sec`.
pub fn assemble_boundaries(
    peak_frames: &[usize],
    time_sec: &[f32],
) -> Result<Boundaries, SegmentationError> {
    if time_sec.is_empty() {
        return Err(SegmentationError::EmptyFeatureSequence);
    }
    let frame_count = time_sec.len();
    let mut times = Vec::with_capacity(peak_frames.len() + 2);
    for &frame in peak_frames {
        if frame >= frame_count {
            return Err(SegmentationError::PeakFrameOutOfRange {
                frame,
                frames: frame_count,
            });
        }
        times.push(time_sec[frame]);
    }
    times.push(0.0);
    times.push(time_sec[frame_count - 1]);
    times.sort_by(f32::total_cmp);
    times.dedup();
    Ok(Boundaries {
        times,
        frames: peak_frames.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(frames: usize, rate: f32) -> Vec<f32> {
        (0..frames).map(|n| n as f32 / rate).collect()
    }

    #[test]
    fn boundaries_are_bracketed_sorted_and_unique() {
        let time_sec = axis(100, 10.0);
        let bounds = assemble_boundaries(&[70, 40], &time_sec).expect("boundaries");
        assert_eq!(bounds.times, vec![0.0, 4.0, 7.0, 9.9]);
        assert_eq!(bounds.frames, vec![70, 40]);
    }

    #[test]
    fn no_peaks_still_brackets_the_sequence() {
        let time_sec = axis(50, 5.0);
        let bounds = assemble_boundaries(&[], &time_sec).expect("boundaries");
        assert_eq!(bounds.times, vec![0.0, 49.0 / 5.0]);
        assert!(bounds.frames.is_empty());
    }

    #[test]
    fn peak_at_frame_zero_is_deduplicated_in_times_only() {
        let time_sec = axis(20, 10.0);
        let bounds = assemble_boundaries(&[0, 10], &time_sec).expect("boundaries");
        assert_eq!(bounds.times, vec![0.0, 1.0, 1.9]);
        // The raw frame list keeps the peak that collided with time zero.
        assert_eq!(bounds.frames, vec![0, 10]);
    }

    #[test]
    fn peak_at_the_last_frame_is_deduplicated_in_times_only() {
        let time_sec = axis(20, 10.0);
        let bounds = assemble_boundaries(&[19], &time_sec).expect("boundaries");
        assert_eq!(bounds.times, vec![0.0, 1.9]);
        assert_eq!(bounds.frames, vec![19]);
    }

    #[test]
    fn out_of_range_peak_frame_is_rejected() {
        let time_sec = axis(10, 10.0);
        assert!(matches!(
            assemble_boundaries(&[10], &time_sec),
            Err(SegmentationError::PeakFrameOutOfRange {
                frame: 10,
                frames: 10
            })
        ));
    }

    #[test]
    fn empty_time_axis_is_rejected() {
        assert!(matches!(
            assemble_boundaries(&[], &[]),
            Err(SegmentationError::EmptyFeatureSequence)
        ));
    }

    #[test]
    fn single_frame_collapses_to_one_boundary() {
        let bounds = assemble_boundaries(&[], &[0.0]).expect("boundaries");
        assert_eq!(bounds.times, vec![0.0]);
    }
}
