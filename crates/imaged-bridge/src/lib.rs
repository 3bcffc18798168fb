// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IMAGEd — Camera device bridge.
//
// Defines the camera traits, the scoped still-capture routine, and the
// backends available to the editor: a stub for builds without native capture
// and a playback backend that replays recorded frames.

pub mod capture;
pub mod playback;
pub mod stub;
pub mod traits;

pub use capture::capture_still;
pub use playback::{PlaybackCamera, Scripted};
pub use stub::StubCamera;
pub use traits::{CameraBackend, CameraHandle, Frame};

/// Camera backend for the target platform.
///
/// No native capture backend is wired in yet, so every platform gets the stub,
/// which reports the device as unavailable.
pub fn default_camera() -> Box<dyn CameraBackend> {
    Box::new(StubCamera)
}
