// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Persistent editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Camera capture settings.
    pub camera: CameraSettings,
    /// Appearance of circle annotations.
    pub circle: CircleStyle,
    /// Resampling filter used by resize.
    pub resize_filter: ResizeFilter,
    /// What to do with brightness reductions larger than 255.
    pub brightness_overflow: BrightnessOverflow,
    /// JPEG encoder quality (1-100).
    pub jpeg_quality: u8,
    /// Bounds for the numeric control fields.
    pub input_limits: InputLimits,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            circle: CircleStyle::default(),
            resize_filter: ResizeFilter::Bilinear,
            brightness_overflow: BrightnessOverflow::Ignore,
            jpeg_quality: 95,
            input_limits: InputLimits::default(),
        }
    }
}

impl EditorConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Read a JSON config file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// JPEG quality clamped to the range the encoder accepts.
    pub fn effective_jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

/// Channel order of frames produced by a camera device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelOrder {
    Rgb,
    Bgr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Index of the device to open (0 = system default).
    pub device_index: u32,
    /// Frames read and discarded before the captured one, so auto-exposure
    /// can settle.
    pub warm_up_frames: u32,
    /// Channel order the device delivers.
    pub native_order: PixelOrder,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            warm_up_frames: 10,
            native_order: PixelOrder::Bgr,
        }
    }
}

/// Colour and stroke of circle annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStyle {
    pub color: [u8; 3],
    pub stroke_width: u32,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            stroke_width: 2,
        }
    }
}

/// Resampling used when resizing to exact dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    Bilinear,
}

/// Policy for brightness reductions above 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightnessOverflow {
    /// Leave the image untouched.
    Ignore,
    /// Apply the maximum reduction (every channel becomes 0).
    Clamp,
}

/// Inclusive bounds for one numeric control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: i64,
    pub max: i64,
}

impl FieldRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub brightness: FieldRange,
    pub size: FieldRange,
    pub circle: FieldRange,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            brightness: FieldRange::new(0, 255),
            size: FieldRange::new(0, 999),
            circle: FieldRange::new(0, 9999),
        }
    }
}
