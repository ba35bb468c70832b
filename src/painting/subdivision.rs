//! Breadth-first recursive subdivision of the canvas driven by a digit stream
//!
//! Each split consumes three digits: the cut position in tenths and the palette
//! slots of the two children. Rounds proceed one generation at a time, so a
//! given digit always lands on the same rectangle regardless of depth.

use crate::math::rounding::tenths_between;
use crate::painting::rectangle::Rectangle;

/// Digits consumed by a single split: cut position and two colors
pub const DIGITS_PER_SPLIT: usize = 3;

/// An immutable subdivision of the canvas
///
/// All rectangles of all generations are kept in one arena in construction
/// order: the root first, then each generation's children appended pairwise
/// after the whole previous generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Painting {
    rectangles: Vec<Rectangle>,
    iterations: usize,
}

impl Painting {
    /// Build a painting with `iterations` rounds of subdivision
    ///
    /// Pulls exactly `3 * (2^iterations - 1)` digits from `digits`. Once the
    /// source runs dry every further digit reads as 0, so a short source still
    /// yields a complete tree. Pass `source.by_ref()` to keep using the stream
    /// afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the arena for `iterations` rounds cannot be allocated, which
    /// happens long before the counts in [`Self::rectangle_count`] saturate.
    pub fn new<I>(iterations: usize, digits: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut digits = digits.into_iter();
        let mut rectangles = Vec::with_capacity(Self::rectangle_count(iterations));
        rectangles.push(Rectangle::root());

        // Generation g occupies arena slots [2^g - 1, 2^(g+1) - 1)
        let mut generation_start = 0;
        for _ in 0..iterations {
            let generation_end = rectangles.len();
            for index in generation_start..generation_end {
                let (cut, first, second) = (
                    next_digit(&mut digits),
                    next_digit(&mut digits),
                    next_digit(&mut digits),
                );

                let Some(parent) = rectangles.get(index) else {
                    continue;
                };
                let axis = parent.cut_axis();
                let cut_at = tenths_between(
                    parent.origin.along(axis),
                    parent.corner.along(axis),
                    cut,
                );
                let (a, b) = parent.split(index, cut_at, (first, second));

                rectangles.push(a);
                rectangles.push(b);
            }
            generation_start = generation_end;
        }

        Self {
            rectangles,
            iterations,
        }
    }

    /// Total rectangles in a tree built with `iterations` rounds
    ///
    /// Saturates at `usize::MAX` for trees too deep to address.
    pub const fn rectangle_count(iterations: usize) -> usize {
        if iterations >= usize::BITS as usize - 1 {
            return usize::MAX;
        }
        (1 << (iterations + 1)) - 1
    }

    /// Digits a tree built with `iterations` rounds consumes
    ///
    /// Saturates at `usize::MAX` like [`Self::rectangle_count`].
    pub const fn digits_consumed(iterations: usize) -> usize {
        // Splits are the inner nodes: half the tree, rounded down
        DIGITS_PER_SPLIT.saturating_mul(Self::rectangle_count(iterations) / 2)
    }

    /// Every rectangle across all generations, in construction order
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// Number of subdivision rounds, which is also the deepest generation
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Rectangles of one generation; empty if that generation was never built
    pub fn generation(&self, generation: usize) -> impl Iterator<Item = &Rectangle> {
        self.rectangles
            .iter()
            .filter(move |rectangle| rectangle.generation == generation)
    }

    /// Rectangles of the deepest generation
    pub fn final_generation(&self) -> impl Iterator<Item = &Rectangle> {
        self.generation(self.iterations)
    }

    /// The two children split from the rectangle at `index`, if it was split
    pub fn children(&self, index: usize) -> Option<(&Rectangle, &Rectangle)> {
        let mut children = self
            .rectangles
            .iter()
            .skip(index.saturating_add(1))
            .filter(|rectangle| rectangle.parent == Some(index));
        Some((children.next()?, children.next()?))
    }
}

// Exhausted sources read as an endless run of zeros
fn next_digit<I: Iterator<Item = u8>>(digits: &mut I) -> u8 {
    digits.next().map_or(0, |digit| digit % 10)
}
