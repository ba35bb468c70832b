//! Ten-slot color tables indexed by single digits

use crate::io::configuration::{OUTLINE_COLOR, PALETTE_SIZE};
use crate::io::error::{PaintingError, Result, invalid_palette};
use csscolorparser::Color;
use image::Rgb;
use std::io::Read;
use std::path::Path;

const BUNDLED_COLORS: &str = include_str!("../../data/colors.txt");

/// Exactly ten colors, one per digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb<u8>; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::bundled()
    }
}

impl Palette {
    /// Wrap an explicit set of colors
    pub const fn new(colors: [Rgb<u8>; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// The palette shipped with the crate
    pub fn bundled() -> Self {
        // The bundled table is known to parse; see the palette unit tests
        Self::parse(BUNDLED_COLORS).unwrap_or_else(|_| Self::new([OUTLINE_COLOR; PALETTE_SIZE]))
    }

    /// Parse the first ten non-empty lines of `text`, one CSS color per line
    ///
    /// Lines after the tenth color are ignored. Accepts `#RRGGBB` as well as the
    /// other notations understood by CSS (`#rgb`, `rgb(...)`, named colors).
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than ten colors are present or a line is not
    /// a valid color.
    pub fn parse(text: &str) -> Result<Self> {
        let mut colors = [OUTLINE_COLOR; PALETTE_SIZE];
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        for (slot, color) in colors.iter_mut().enumerate() {
            let line = lines.next().ok_or_else(|| {
                invalid_palette(&format!(
                    "expected {PALETTE_SIZE} colors but found only {slot}"
                ))
            })?;
            *color = parse_color(line)?;
        }

        Ok(Self { colors })
    }

    /// Read and parse a palette from any byte stream
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read, is not UTF-8, or does not
    /// hold ten valid colors.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Load a palette file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold ten valid
    /// colors.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PaintingError::FileSystem {
            path: path.to_path_buf(),
            operation: "read palette",
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Color for a digit; digits above 9 wrap around
    pub fn color(&self, digit: u8) -> Rgb<u8> {
        self.colors
            .get(usize::from(digit) % PALETTE_SIZE)
            .copied()
            .unwrap_or(OUTLINE_COLOR)
    }

    /// All ten colors in slot order
    pub const fn colors(&self) -> &[Rgb<u8>; PALETTE_SIZE] {
        &self.colors
    }
}

fn parse_color(line: &str) -> Result<Rgb<u8>> {
    let parsed: Color = line
        .parse()
        .map_err(|e| invalid_palette(&format!("'{line}' is not a color: {e}")))?;
    let [red, green, blue, _alpha] = parsed.to_rgba8();
    Ok(Rgb([red, green, blue]))
}
