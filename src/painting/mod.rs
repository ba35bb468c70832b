//! Subdivision of the canvas and its projection to pixels
//!
//! This module contains the core of the crate:
//! - Percentage-space rectangles and their orientation
//! - The digit-driven subdivision engine
//! - Projection of a generation onto a pixel canvas

/// Mapping of percentage rectangles onto a pixel canvas
pub mod projection;
/// Rectangle geometry in percentage coordinates
pub mod rectangle;
/// Breadth-first subdivision engine
pub mod subdivision;

pub use subdivision::Painting;
