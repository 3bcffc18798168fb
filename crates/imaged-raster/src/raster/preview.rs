// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display previews: scale a raster to fit a region, keeping aspect ratio.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use imaged_core::error::{ImagedError, Result};
use tracing::{debug, warn};

use super::buffer::{Pixels, Raster, buffer_len};

/// Largest `(width, height)` with the aspect ratio of `width` x `height` that
/// fits inside `max_width` x `max_height`. Never returns a zero dimension.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (max_width.max(1), max_height.max(1));
    }
    let scale = f64::min(
        f64::from(max_width.max(1)) / f64::from(width),
        f64::from(max_height.max(1)) / f64::from(height),
    );
    let fit = |v: u32| ((f64::from(v) * scale).round() as u32).max(1);
    (fit(width), fit(height))
}

impl Raster {
    /// RGBA copy scaled to fit `max_width` x `max_height` for display.
    ///
    /// Scales up as well as down. Uses Lanczos3 filtering. A fitted size
    /// whose buffer would exceed `MAX_BUFFER_BYTES` is `InvalidSize`.
    pub fn preview(&self, max_width: u32, max_height: u32) -> Result<RgbaImage> {
        let (width, height) = fit_within(self.width(), self.height(), max_width, max_height);
        if buffer_len(width, height, 4).is_none() {
            warn!(width, height, "preview region exceeds the buffer limit");
            return Err(ImagedError::InvalidSize {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        debug!(width, height, "Rendering preview");
        let rgba: RgbaImage = match &self.pixels {
            Pixels::Rgb(img) => image::DynamicImage::ImageRgb8(img.clone()).to_rgba8(),
            Pixels::Rgba(img) => img.clone(),
        };
        if rgba.dimensions() == (width, height) {
            return Ok(rgba);
        }
        Ok(imageops::resize(&rgba, width, height, FilterType::Lanczos3))
    }
}
