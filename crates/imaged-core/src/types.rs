// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the IMAGEd editor.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::ImagedError;

/// One colour component of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in pixel order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside an RGB(A) pixel.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Channel at pixel position `index` (0 = red, 1 = green, 2 = blue).
    pub fn from_index(index: usize) -> Result<Self, ImagedError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| ImagedError::InvalidChannel(index.to_string()))
    }

    /// Short label used in UI selectors and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

impl FromStr for Channel {
    type Err = ImagedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Self::Red),
            "g" | "green" => Ok(Self::Green),
            "b" | "blue" => Ok(Self::Blue),
            other => Err(ImagedError::InvalidChannel(other.to_owned())),
        }
    }
}

/// What the channel selector asks the display to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelView {
    /// The full RGB image.
    #[default]
    All,
    /// A single channel, the other two zeroed.
    Only(Channel),
}

impl ChannelView {
    /// Map a selector position to a view: 0 is "all channels", 1..=3 are R, G, B.
    pub fn from_selector_index(index: usize) -> Result<Self, ImagedError> {
        match index {
            0 => Ok(Self::All),
            n => Channel::from_index(n - 1)
                .map(Self::Only)
                .map_err(|_| ImagedError::InvalidChannel(format!("selector index {n}"))),
        }
    }
}

/// Image file formats the editor can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl SaveFormat {
    /// MIME type string.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    /// Infer the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    /// Infer the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self, ImagedError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| {
            if ext.is_empty() {
                ImagedError::UnsupportedFormat(format!("{} has no file extension", path.display()))
            } else {
                ImagedError::UnsupportedFormat(format!(".{ext}"))
            }
        })
    }
}

/// Whether the editor currently holds an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorState {
    /// Nothing loaded yet; transforms and save are unavailable.
    Empty,
    /// A current raster exists.
    Loaded,
}

/// User-triggerable editor actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    LoadFile,
    Capture,
    SelectChannel,
    Resize,
    DecreaseBrightness,
    DrawCircle,
    Save,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::LoadFile,
        Action::Capture,
        Action::SelectChannel,
        Action::Resize,
        Action::DecreaseBrightness,
        Action::DrawCircle,
        Action::Save,
    ];
}
