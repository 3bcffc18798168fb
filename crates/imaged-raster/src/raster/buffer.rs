// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory RGB(A) pixel buffer.

use std::borrow::Cow;

use image::buffer::ConvertBuffer;
use image::{DynamicImage, RgbImage, RgbaImage};

/// Largest pixel buffer, in bytes, a transform or preview may allocate (1 GiB).
pub const MAX_BUFFER_BYTES: u64 = 1 << 30;

/// Byte length of a `width` x `height` buffer with `channels` samples per
/// pixel, or `None` when it would exceed `MAX_BUFFER_BYTES`.
pub fn buffer_len(width: u32, height: u32, channels: u8) -> Option<u64> {
    u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(u64::from(channels))
        .filter(|&len| len <= MAX_BUFFER_BYTES)
}

/// Pixel storage. Every pixel of one raster has the same channel count.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Pixels {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

/// A width x height grid of 8-bit RGB or RGBA pixels.
///
/// The channel count is fixed when the raster is created; only explicit
/// conversion (`to_rgb`, `from_dynamic`) produces a raster with a different
/// layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub(crate) pixels: Pixels,
}

impl Raster {
    // -- Construction ---------------------------------------------------------

    /// Wrap a 3-channel image.
    pub fn from_rgb(image: RgbImage) -> Self {
        Self {
            pixels: Pixels::Rgb(image),
        }
    }

    /// Wrap a 4-channel image.
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            pixels: Pixels::Rgba(image),
        }
    }

    /// Normalize any decoded image to 8-bit RGB, or RGBA when it carries alpha.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgb8(rgb) => Self::from_rgb(rgb),
            DynamicImage::ImageRgba8(rgba) => Self::from_rgba(rgba),
            other if other.color().has_alpha() => Self::from_rgba(other.to_rgba8()),
            other => Self::from_rgb(other.to_rgb8()),
        }
    }

    /// A `width` x `height` RGB raster where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self::from_rgb(RgbImage::from_pixel(width, height, image::Rgb(color)))
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        match &self.pixels {
            Pixels::Rgb(img) => img.width(),
            Pixels::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.pixels {
            Pixels::Rgb(img) => img.height(),
            Pixels::Rgba(img) => img.height(),
        }
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// 3 for RGB, 4 for RGBA.
    pub fn channel_count(&self) -> u8 {
        match &self.pixels {
            Pixels::Rgb(_) => 3,
            Pixels::Rgba(_) => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self.pixels, Pixels::Rgba(_))
    }

    /// Channel values of the pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        match &self.pixels {
            Pixels::Rgb(img) => img.get_pixel_checked(x, y).map(|p| &p.0[..]),
            Pixels::Rgba(img) => img.get_pixel_checked(x, y).map(|p| &p.0[..]),
        }
    }

    /// Raw interleaved samples, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.pixels {
            Pixels::Rgb(img) => img.as_raw(),
            Pixels::Rgba(img) => img.as_raw(),
        }
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        match &mut self.pixels {
            Pixels::Rgb(img) => &mut **img,
            Pixels::Rgba(img) => &mut **img,
        }
    }

    /// Borrow the pixels as RGB, converting (and dropping alpha) only when needed.
    pub fn rgb_view(&self) -> Cow<'_, RgbImage> {
        match &self.pixels {
            Pixels::Rgb(img) => Cow::Borrowed(img),
            Pixels::Rgba(img) => Cow::Owned(img.convert()),
        }
    }

    /// Explicit conversion to a 3-channel raster.
    pub fn to_rgb(&self) -> Raster {
        Raster::from_rgb(self.rgb_view().into_owned())
    }

    /// Copy the pixels into a `DynamicImage` for the codec or display layers.
    pub fn to_dynamic(&self) -> DynamicImage {
        self.clone().into_dynamic()
    }

    /// Consume the raster and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        match self.pixels {
            Pixels::Rgb(img) => DynamicImage::ImageRgb8(img),
            Pixels::Rgba(img) => DynamicImage::ImageRgba8(img),
        }
    }
}
