pub(crate) fn default_filter_len() -> usize {
    41
}

pub(crate) fn default_downsample() -> usize {
    10
}

pub(crate) fn default_kernel_half_size() -> usize {
    10
}

pub(crate) fn default_kernel_variance() -> f32 {
    1.0
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_half_window() -> usize {
    10
}

pub(crate) fn default_threshold() -> f32 {
    1.35
}

pub(crate) fn default_min_distance() -> usize {
    7
}
