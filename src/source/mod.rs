//! Inputs that feed a painting: digit streams and color tables

/// File, pi and random digit streams
pub mod digits;
/// Ten-color palettes parsed from text
pub mod palette;

pub use digits::DigitSource;
pub use palette::Palette;
