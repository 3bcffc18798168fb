// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub camera for builds without a native capture backend.
//
// Opening a device always fails with `ImagedError::Device`, so callers take
// their normal "camera unavailable" path.

use imaged_core::error::{ImagedError, Result};

use crate::traits::{CameraBackend, CameraHandle};

/// Camera backend that has no devices.
pub struct StubCamera;

impl CameraBackend for StubCamera {
    fn name(&self) -> &str {
        "Desktop (stub)"
    }

    fn open(&self, device_index: u32) -> Result<Box<dyn CameraHandle>> {
        tracing::warn!(device_index, "CameraBackend::open called on stub camera");
        Err(ImagedError::Device(format!(
            "no camera backend available (device {device_index})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_never_opens() {
        assert!(matches!(StubCamera.open(0), Err(ImagedError::Device(_))));
    }
}
