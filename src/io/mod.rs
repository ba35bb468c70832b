//! Command line, rasterization, progress display and error handling

/// Command-line arguments and painting orchestration
pub mod cli;
/// Defaults and fixed constants
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Rasterization of draw commands and PNG export
pub mod image;
/// Progress display over a run of paintings
pub mod progress;
