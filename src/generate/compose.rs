//! Vertical stacking of course panels.
//!
//! Panels are stacked top first onto an RGB canvas as wide as the wider panel.
//! When widths differ the narrower panel is centered horizontally and the
//! margins stay black.

use crate::error::{PosterError, Result};
use crate::fs::atomic_write;
use image::{DynamicImage, ImageFormat, RgbImage, imageops};
use std::io::Cursor;
use std::path::Path;

/// Stack two encoded images vertically.
pub fn stack_vertically(top: &[u8], bottom: &[u8]) -> Result<RgbImage> {
    let top = decode(top, "top")?;
    let bottom = decode(bottom, "bottom")?;

    let width = top.width().max(bottom.width());
    let height = top.height() + bottom.height();

    if top.width() != bottom.width() {
        tracing::warn!(
            top_width = top.width(),
            bottom_width = bottom.width(),
            "panel widths differ, padding the narrower panel"
        );
    }

    let mut canvas = RgbImage::new(width, height);
    imageops::replace(&mut canvas, &top, centered_x(width, top.width()), 0);
    imageops::replace(
        &mut canvas,
        &bottom,
        centered_x(width, bottom.width()),
        i64::from(top.height()),
    );
    Ok(canvas)
}

/// Read both panel files, stack them, and write the merged PNG.
pub fn merge_panel_files(top: &Path, bottom: &Path, output: &Path) -> Result<()> {
    let top_bytes = read(top)?;
    let bottom_bytes = read(bottom)?;

    let merged = stack_vertically(&top_bytes, &bottom_bytes)?;
    let (width, height) = merged.dimensions();

    let mut encoded = Vec::new();
    DynamicImage::ImageRgb8(merged)
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| PosterError::Compose(format!("failed to encode merged poster: {e}")))?;

    atomic_write(output, &encoded)?;
    tracing::info!(path = %output.display(), width, height, "merged course panels");
    Ok(())
}

fn decode(bytes: &[u8], which: &str) -> Result<RgbImage> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgb8())
        .map_err(|e| PosterError::Compose(format!("failed to decode {which} panel: {e}")))
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| PosterError::Io(format!("failed to read '{}': {}", path.display(), e)))
}

fn centered_x(canvas_width: u32, panel_width: u32) -> i64 {
    i64::from((canvas_width - panel_width) / 2)
}
