// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Feedback shown in the status line after each editor action.

/// Outcome of the last successful editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing has happened yet.
    #[default]
    Idle,
    ImageLoaded,
    PhotoTaken,
    BrightnessDecreased,
    CircleDrawn,
    Resized,
    Saved,
}

impl Status {
    /// Text for the status line.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Idle => "Load an image",
            Self::ImageLoaded => "Image loaded successfully",
            Self::PhotoTaken => "Photo taken successfully",
            Self::BrightnessDecreased => "Brightness decreased",
            Self::CircleDrawn => "Circle drawn",
            Self::Resized => "Image resized",
            Self::Saved => "Image saved successfully",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
