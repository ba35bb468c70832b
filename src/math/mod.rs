//! Numeric helpers shared by subdivision and projection

/// Tie-to-even rounding used for cut coordinates and line insets
pub mod rounding;
