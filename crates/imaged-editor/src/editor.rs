// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Editing session — owns the current raster and routes user actions to the
// raster transforms, the codec and the camera.
//
// Failed loads, captures and saves leave the current raster untouched.
// Transforms called before anything is loaded fail with `NoImageLoaded`.

use std::borrow::Cow;
use std::path::Path;

use image::RgbaImage;
use imaged_bridge::{CameraBackend, capture_still, default_camera};
use imaged_core::EditorConfig;
use imaged_core::error::{ImagedError, Result};
use imaged_core::types::{Channel, ChannelView, EditorState};
use imaged_raster::Raster;
use tracing::{info, instrument, warn};

use crate::controls::{ActionSet, ControlInputs, enabled_actions};
use crate::state::Status;

/// Single-image editor.
pub struct PixelEditor {
    config: EditorConfig,
    camera: Box<dyn CameraBackend>,
    current: Option<Raster>,
    status: Status,
}

impl PixelEditor {
    // -- Construction ---------------------------------------------------------

    /// Editor using the platform's default camera backend.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_camera(config, default_camera())
    }

    pub fn with_camera(config: EditorConfig, camera: Box<dyn CameraBackend>) -> Self {
        Self {
            config,
            camera,
            current: None,
            status: Status::Idle,
        }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> EditorState {
        if self.current.is_some() {
            EditorState::Loaded
        } else {
            EditorState::Empty
        }
    }

    /// The current raster, if any.
    pub fn current(&self) -> Option<&Raster> {
        self.current.as_ref()
    }

    /// Outcome of the last successful action.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Actions available for the given field contents.
    pub fn enabled_actions(&self, inputs: &ControlInputs) -> ActionSet {
        enabled_actions(self.state(), inputs, &self.config.input_limits)
    }

    fn current_mut(&mut self) -> Result<&mut Raster> {
        self.current.as_mut().ok_or(ImagedError::NoImageLoaded)
    }

    fn require_current(&self) -> Result<&Raster> {
        self.current.as_ref().ok_or(ImagedError::NoImageLoaded)
    }

    // -- Acquisition ----------------------------------------------------------

    /// Decode the file at `path` and make it the current image.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&Raster> {
        let raster = Raster::open(path.as_ref()).inspect_err(|err| {
            warn!(error = %err, "Load failed, keeping current image");
        })?;
        self.status = Status::ImageLoaded;
        Ok(&*self.current.insert(raster))
    }

    /// Take a photo with the configured camera and make it the current image.
    #[instrument(skip(self))]
    pub fn capture_from_camera(&mut self) -> Result<&Raster> {
        let image = capture_still(self.camera.as_ref(), &self.config.camera).inspect_err(|err| {
            warn!(error = %err, "Capture failed, keeping current image");
        })?;
        self.status = Status::PhotoTaken;
        Ok(&*self.current.insert(Raster::from_rgb(image)))
    }

    /// Replace the current image with an in-memory raster.
    pub fn set_image(&mut self, raster: Raster) {
        info!(width = raster.width(), height = raster.height(), "Image replaced");
        self.current = Some(raster);
        self.status = Status::ImageLoaded;
    }

    // -- Transforms -----------------------------------------------------------

    /// Darken the current image in place. Returns whether anything was applied
    /// (reductions above 255 follow `config.brightness_overflow`).
    pub fn decrease_brightness(&mut self, amount: u32) -> Result<bool> {
        let overflow = self.config.brightness_overflow;
        let applied = self.current_mut()?.decrease_brightness(amount, overflow);
        if applied {
            self.status = Status::BrightnessDecreased;
        }
        Ok(applied)
    }

    /// Current image with only `channel` kept. The current image is unchanged.
    pub fn isolate_channel(&self, channel: Channel) -> Result<Raster> {
        Ok(self.require_current()?.isolate_channel(channel))
    }

    /// Current image as the channel selector asks to show it.
    pub fn view(&self, view: ChannelView) -> Result<Cow<'_, Raster>> {
        let current = self.require_current()?;
        Ok(match view {
            ChannelView::All => Cow::Borrowed(current),
            ChannelView::Only(channel) => Cow::Owned(current.isolate_channel(channel)),
        })
    }

    /// `view` scaled to fit the display region.
    pub fn preview(&self, view: ChannelView, max_width: u32, max_height: u32) -> Result<RgbaImage> {
        self.view(view)?.preview(max_width, max_height)
    }

    /// Draw the configured circle outline on the current image.
    pub fn draw_circle(&mut self, center_x: i64, center_y: i64, radius: i64) -> Result<()> {
        let style = self.config.circle;
        self.current_mut()?
            .draw_circle(center_x, center_y, radius, &style)?;
        self.status = Status::CircleDrawn;
        Ok(())
    }

    /// Replace the current image with a resampled copy of exactly
    /// `new_width` x `new_height`.
    pub fn resize(&mut self, new_width: i64, new_height: i64) -> Result<&Raster> {
        let resized = self
            .require_current()?
            .resize(new_width, new_height, self.config.resize_filter)?;
        self.status = Status::Resized;
        Ok(&*self.current.insert(resized))
    }

    // -- Output ---------------------------------------------------------------

    /// Write the current image; the format comes from the extension of `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let quality = self.config.effective_jpeg_quality();
        self.require_current()?.save(path.as_ref(), quality)?;
        self.status = Status::Saved;
        Ok(())
    }
}
