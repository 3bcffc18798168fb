// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raster module — pixel buffer, transforms, codec and display preview.

pub mod buffer;
pub mod codec;
pub mod preview;
pub mod transform;

pub use buffer::{MAX_BUFFER_BYTES, Raster, buffer_len};
pub use preview::fit_within;
