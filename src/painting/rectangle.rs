//! Percentage-space rectangles that make up a painting
//!
//! Every coordinate lives in `[0, 100]` on both dimensions, independent of the
//! eventual canvas size. A rectangle remembers the orientation of the cut that
//! produced it so that its own children are cut the other way.

use crate::io::configuration::CANVAS_EXTENT;

/// Orientation of the cut line that produced a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Produced by a vertical cut line, so its parent's x extent was divided
    Vertical,
    /// Produced by a horizontal cut line, so its parent's y extent was divided
    Horizontal,
}

impl Axis {
    /// The orientation used one generation further down
    pub const fn opposite(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// A point in percentage coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position, 0 at the left edge
    pub x: f64,
    /// Vertical position, 0 at the top edge
    pub y: f64,
}

impl Point {
    /// Create a point from its two coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the dimension divided by a cut of the given orientation
    pub const fn along(self, cut: Axis) -> f64 {
        match cut {
            Axis::Vertical => self.x,
            Axis::Horizontal => self.y,
        }
    }

    /// Copy of this point with the coordinate divided by `cut` replaced
    pub const fn with(self, cut: Axis, value: f64) -> Self {
        match cut {
            Axis::Vertical => Self::new(value, self.y),
            Axis::Horizontal => Self::new(self.x, value),
        }
    }
}

/// One node of the subdivision tree
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Depth in the tree, 0 for the root
    pub generation: usize,
    /// Orientation of the cut that produced this rectangle
    pub axis: Axis,
    /// Top-left corner
    pub origin: Point,
    /// Bottom-right corner
    pub corner: Point,
    /// Palette slot, `None` for the root
    pub color: Option<u8>,
    /// Arena index of the rectangle this one was split from
    pub parent: Option<usize>,
}

impl Rectangle {
    /// The whole canvas
    ///
    /// The root counts as the product of a horizontal cut, so the first
    /// division of every painting is a vertical line.
    pub const fn root() -> Self {
        Self {
            generation: 0,
            axis: Axis::Horizontal,
            origin: Point::new(0.0, 0.0),
            corner: Point::new(CANVAS_EXTENT, CANVAS_EXTENT),
            color: None,
            parent: None,
        }
    }

    /// Orientation of the cut that divides this rectangle
    pub const fn cut_axis(&self) -> Axis {
        self.axis.opposite()
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.corner.x - self.origin.x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.corner.y - self.origin.y
    }

    /// Covered area in squared percentage units
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Split at `cut_at` along this rectangle's cut axis into its two children
    ///
    /// `index` is this rectangle's arena position, recorded as the children's
    /// parent. The first child spans `[start, cut_at]`, the second
    /// `[cut_at, end]` on the divided dimension; the other dimension is kept.
    pub fn split(&self, index: usize, cut_at: f64, colors: (u8, u8)) -> (Self, Self) {
        let cut = self.cut_axis();
        let child = |origin: Point, corner: Point, color: u8| Self {
            generation: self.generation + 1,
            axis: cut,
            origin,
            corner,
            color: Some(color),
            parent: Some(index),
        };

        (
            child(self.origin, self.corner.with(cut, cut_at), colors.0),
            child(self.origin.with(cut, cut_at), self.corner, colors.1),
        )
    }
}
