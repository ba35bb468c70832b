//! Mondrian-style paintings grown from a stream of digits
//!
//! The canvas is split in two, then each half in two again, one generation at
//! a time. Every split reads three digits: where to cut, in tenths of the
//! rectangle, and the palette slots of the two halves. The deepest generation
//! is then projected onto a pixel canvas and saved as a PNG.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Rounding helpers for coordinates
pub mod math;
/// Subdivision engine, rectangle geometry and pixel projection
pub mod painting;
/// Digit streams and color palettes
pub mod source;

pub use io::error::{PaintingError, Result};
pub use painting::Painting;
