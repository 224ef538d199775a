//! Structural segment boundary estimation for time-ordered feature sequences.
//!
//! Callers hand in a feature matrix (one column per frame) together with its
//! frame rate. The pipeline smooths and downsamples the sequence, builds its
//! self-similarity matrix, correlates a checkerboard kernel along the
//! diagonal into a novelty curve, and picks boundary times from the novelty
//! peaks.
/// Pipeline configuration and TOML load/save.
pub mod config;
mod config_defaults;
/// Feature sequence container and normalization helpers.
pub mod features;
/// Logging setup.
pub mod logging;
/// The boundary-estimation pipeline stages.
pub mod segmentation;
/// Contiguous sequence splitting at boundary indices.
pub mod split;
