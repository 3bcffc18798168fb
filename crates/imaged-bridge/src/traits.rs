// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic camera abstractions.

use image::{Rgb, RgbImage};
use imaged_core::config::PixelOrder;
use imaged_core::error::{ImagedError, Result};

/// A source of camera devices.
pub trait CameraBackend {
    /// Human-readable backend name (e.g. "Desktop (stub)").
    fn name(&self) -> &str;

    /// Open the device at `device_index` for exclusive use.
    ///
    /// Fails with `ImagedError::Device` when the device does not exist or is
    /// busy.
    fn open(&self, device_index: u32) -> Result<Box<dyn CameraHandle>>;
}

/// An opened camera device.
pub trait CameraHandle {
    /// Read the next frame. `Ok(None)` means the device delivered nothing.
    fn read_frame(&mut self) -> Result<Option<Frame>>;

    /// Give the device back to the system. Must be safe to call more than once.
    fn release(&mut self);
}

/// One still frame as delivered by a device: 3 interleaved bytes per pixel,
/// in the device's native channel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// A frame where every pixel has the same three bytes.
    pub fn uniform(width: u32, height: u32, pixel: [u8; 3]) -> Result<Self> {
        let len = frame_len(width, height)?;
        Ok(Self::new(width, height, pixel.into_iter().cycle().take(len).collect()))
    }

    /// Convert to an RGB image, swapping channels if the device order is BGR.
    pub fn into_rgb_image(self, order: PixelOrder) -> Result<RgbImage> {
        let expected = frame_len(self.width, self.height)?;
        if self.data.len() != expected {
            return Err(ImagedError::Device(format!(
                "frame of {}x{} carries {} bytes, expected {}",
                self.width,
                self.height,
                self.data.len(),
                expected
            )));
        }

        let mut image = RgbImage::from_raw(self.width, self.height, self.data).ok_or_else(|| {
            ImagedError::Device("frame buffer does not match its dimensions".into())
        })?;
        if order == PixelOrder::Bgr {
            for Rgb(pixel) in image.pixels_mut() {
                pixel.swap(0, 2);
            }
        }
        Ok(image)
    }
}

/// Byte length of a 3-channel `width` x `height` frame.
fn frame_len(width: u32, height: u32) -> Result<usize> {
    usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h)?.checked_mul(3))
        .ok_or_else(|| {
            ImagedError::Device(format!("frame of {width}x{height} is too large to address"))
        })
}
