//! Rasterization of draw commands and PNG export

use crate::io::configuration::{OUTLINE_COLOR, OUTPUT_EXTENSION};
use crate::io::error::{PaintingError, Result};
use crate::painting::projection::{CanvasSize, DrawCommand};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

// Inclusive pixel bounds of a command, before and after clipping to the canvas
#[derive(Debug)]
struct PixelBounds {
    edges: [i64; 4],
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl PixelBounds {
    fn of(command: &DrawCommand, canvas: CanvasSize) -> Option<Self> {
        // Fractional pixel coordinates truncate towards zero
        let left = command.origin.x.trunc() as i64;
        let top = command.origin.y.trunc() as i64;
        let right = command.corner.x.trunc() as i64;
        let bottom = command.corner.y.trunc() as i64;

        if right < left || bottom < top {
            return None;
        }

        let max_x = i64::from(canvas.width) - 1;
        let max_y = i64::from(canvas.height) - 1;
        if right < 0 || bottom < 0 || left > max_x || top > max_y {
            return None;
        }

        Some(Self {
            edges: [left, top, right, bottom],
            left: left.clamp(0, max_x) as u32,
            top: top.clamp(0, max_y) as u32,
            right: right.clamp(0, max_x) as u32,
            bottom: bottom.clamp(0, max_y) as u32,
        })
    }

    // Clipped edges are not borders
    const fn on_border(&self, x: u32, y: u32) -> bool {
        let [left, top, right, bottom] = self.edges;
        let (x, y) = (x as i64, y as i64);
        x == left || x == right || y == top || y == bottom
    }
}

/// Paint `commands` in order onto a canvas filled with the outline color
///
/// Each command fills its inclusive pixel range and then draws a one pixel
/// border in its outline color. Parts outside the canvas are clipped and
/// commands whose corner lies before their origin are skipped.
pub fn rasterize(canvas: CanvasSize, commands: &[DrawCommand]) -> RgbImage {
    let mut img = RgbImage::from_pixel(canvas.width, canvas.height, OUTLINE_COLOR);

    for command in commands {
        let Some(bounds) = PixelBounds::of(command, canvas) else {
            continue;
        };

        for y in bounds.top..=bounds.bottom {
            for x in bounds.left..=bounds.right {
                let color: Rgb<u8> = if bounds.on_border(x, y) {
                    command.outline
                } else {
                    command.fill
                };
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

/// File name for a painting: the name with the PNG extension appended
pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}.{OUTPUT_EXTENSION}"))
}

/// Save a painting as `<name>.png`, creating missing parent directories
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(img: &RgbImage, name: &str) -> Result<PathBuf> {
    let path = output_path(name);

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PaintingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    save(img, &path)?;
    Ok(path)
}

fn save(img: &RgbImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PaintingError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
