// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for IMAGEd.

use thiserror::Error;

/// Top-level error type for all IMAGEd operations.
#[derive(Debug, Error)]
pub enum ImagedError {
    // -- Codec errors --
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    // -- Camera --
    #[error("camera device error: {0}")]
    Device(String),

    // -- Transform arguments --
    #[error("invalid channel: {0} (expected red, green or blue)")]
    InvalidChannel(String),

    #[error("invalid size {width}x{height}: both dimensions must be positive")]
    InvalidSize { width: i64, height: i64 },

    #[error("invalid circle radius {0}: radius must be positive")]
    InvalidRadius(i64),

    #[error("no image loaded")]
    NoImageLoaded,

    // -- Control inputs --
    #[error("invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ImagedError>;
