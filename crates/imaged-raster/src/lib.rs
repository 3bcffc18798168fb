// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imaged-raster — In-memory RGB(A) rasters for the IMAGEd editor.
//
// Provides the pixel buffer, the pixel transforms (brightness reduction,
// channel isolation, circle annotation, resize), load/save through the
// `image` codecs, and scaled previews for display.

pub mod raster;

// Re-export the primary types so callers can use `imaged_raster::Raster`.
pub use raster::{MAX_BUFFER_BYTES, Raster, buffer_len, fit_within};
