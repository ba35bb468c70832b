//! Painting constants and runtime configuration defaults

use image::Rgb;

// Geometry
/// Extent of the percentage coordinate space on both dimensions
pub const CANVAS_EXTENT: f64 = 100.0;

/// Number of colors in a palette, one per digit
pub const PALETTE_SIZE: usize = 10;

/// Color of the lines between rectangles and of the bare canvas
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Number of digits of pi bundled with the crate
pub const PI_DIGIT_COUNT: usize = 10_000;

// Guards against exhausting memory, the tree doubles every round
/// Maximum accepted subdivision rounds
pub const MAX_ITERATIONS: usize = 20;

// Default values for configurable parameters
/// Output name used when none is given
pub const DEFAULT_PAINT_NAME: &str = "PiMondrian";

/// Default line thickness in pixels
pub const DEFAULT_LINE_SIZE: u32 = 4;

/// Default number of subdivision rounds
pub const DEFAULT_ITERATIONS: usize = 5;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1200;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 800;

// Output settings
/// Extension appended to every painting name
pub const OUTPUT_EXTENSION: &str = "png";
