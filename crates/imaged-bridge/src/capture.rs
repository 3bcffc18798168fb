// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Still capture: open the device, discard warm-up frames, read one frame and
// release the device on every exit path.

use image::RgbImage;
use imaged_core::config::CameraSettings;
use imaged_core::error::{ImagedError, Result};
use tracing::{debug, info, instrument, warn};

use crate::traits::{CameraBackend, CameraHandle};

/// Releases the wrapped device when dropped.
struct DeviceGuard {
    handle: Box<dyn CameraHandle>,
}

impl Drop for DeviceGuard {
    fn drop(&mut self) {
        self.handle.release();
        debug!("Camera released");
    }
}

/// Capture one still frame from `backend` as an RGB image.
///
/// The first `settings.warm_up_frames` reads are discarded (failures among
/// them are ignored) so auto-exposure can settle; the next frame is returned,
/// converted from `settings.native_order` to RGB. Fails with
/// `ImagedError::Device` when the device cannot be opened or delivers no
/// frame.
#[instrument(skip_all, fields(backend = backend.name(), device = settings.device_index))]
pub fn capture_still(backend: &dyn CameraBackend, settings: &CameraSettings) -> Result<RgbImage> {
    let mut guard = DeviceGuard {
        handle: backend.open(settings.device_index)?,
    };

    for n in 0..settings.warm_up_frames {
        if let Err(err) = guard.handle.read_frame() {
            debug!(frame = n, error = %err, "Warm-up read failed");
        }
    }

    let frame = match guard.handle.read_frame() {
        Ok(Some(frame)) => frame,
        Ok(None) => {
            warn!("Camera returned no frame");
            return Err(ImagedError::Device("camera returned no frame".into()));
        }
        Err(err) => {
            warn!(error = %err, "Camera read failed");
            return Err(err);
        }
    };
    drop(guard);

    let image = frame.into_rgb_image(settings.native_order)?;
    info!(width = image.width(), height = image.height(), "Photo captured");
    Ok(image)
}
