//! Projection of one generation of a painting onto a pixel canvas
//!
//! Percentage coordinates are scaled to the canvas and every rectangle is
//! pulled in by half the line width on each side, leaving room for the black
//! lines between the colored areas.

use crate::io::configuration::{CANVAS_EXTENT, OUTLINE_COLOR};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::rasterize;
use crate::math::rounding::round_half_even;
use crate::painting::rectangle::{Point, Rectangle};
use crate::painting::subdivision::Painting;
use crate::source::palette::Palette;
use image::{Rgb, RgbImage};

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Scale a percentage point to pixel space
    pub fn scale(&self, point: Point) -> Point {
        Point::new(
            point.x * f64::from(self.width) / CANVAS_EXTENT,
            point.y * f64::from(self.height) / CANVAS_EXTENT,
        )
    }
}

/// A filled, outlined rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Top-left pixel corner, already inset
    pub origin: Point,
    /// Bottom-right pixel corner, already inset
    pub corner: Point,
    /// Interior color
    pub fill: Rgb<u8>,
    /// Border color
    pub outline: Rgb<u8>,
}

/// Target canvas and line width for turning a painting into draw commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    canvas: CanvasSize,
    line_width: f64,
}

impl Projection {
    /// Create a projection onto `canvas` with lines `line_width` pixels thick
    ///
    /// # Errors
    ///
    /// Returns an error if the line width is negative or not finite
    pub fn new(canvas: CanvasSize, line_width: f64) -> Result<Self> {
        if !line_width.is_finite() || line_width < 0.0 {
            return Err(invalid_parameter(
                "line",
                &line_width,
                &"must be a non-negative number",
            ));
        }
        Ok(Self { canvas, line_width })
    }

    /// Target canvas
    pub const fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Inset applied to each side, half the line width rounded half to even
    pub fn half_line(&self) -> f64 {
        round_half_even(self.line_width / 2.0)
    }

    /// Pixel geometry of a single rectangle
    pub fn project_rectangle(&self, rectangle: &Rectangle, palette: &Palette) -> DrawCommand {
        let half = self.half_line();
        let origin = self.canvas.scale(rectangle.origin);
        let corner = self.canvas.scale(rectangle.corner);

        DrawCommand {
            origin: Point::new(origin.x + half, origin.y + half),
            corner: Point::new(corner.x - half, corner.y - half),
            // The root carries no color of its own and borrows slot 0
            fill: palette.color(rectangle.color.unwrap_or(0)),
            outline: OUTLINE_COLOR,
        }
    }

    /// Draw commands for one generation, the deepest when `target` is `None`
    ///
    /// A generation the painting never reached projects to nothing.
    pub fn project(
        &self,
        painting: &Painting,
        target: Option<usize>,
        palette: &Palette,
    ) -> Vec<DrawCommand> {
        let generation = target.unwrap_or_else(|| painting.iterations());
        painting
            .generation(generation)
            .map(|rectangle| self.project_rectangle(rectangle, palette))
            .collect()
    }

    /// Project and rasterize in one step
    pub fn render(
        &self,
        painting: &Painting,
        target: Option<usize>,
        palette: &Palette,
    ) -> RgbImage {
        rasterize(self.canvas, &self.project(painting, target, palette))
    }
}
