// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Playback camera — replays a scripted frame sequence. Used for tests and
// for running the editor offline against recorded frames.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use imaged_core::error::{ImagedError, Result};

use crate::traits::{CameraBackend, CameraHandle, Frame};

/// One scripted result of `read_frame`.
#[derive(Debug, Clone)]
pub enum Scripted {
    Frame(Frame),
    Empty,
    Fail(String),
}

/// Counters shared between a `PlaybackCamera` and the test that owns it.
#[derive(Debug, Default)]
pub struct DeviceStats {
    opens: AtomicUsize,
    reads: AtomicUsize,
    releases: AtomicUsize,
}

impl DeviceStats {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Camera backend that plays `script` back on every open.
///
/// Reads past the end of the script return `Ok(None)`.
#[derive(Debug, Clone)]
pub struct PlaybackCamera {
    script: Vec<Scripted>,
    available: bool,
    stats: Arc<DeviceStats>,
}

impl PlaybackCamera {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script,
            available: true,
            stats: Arc::new(DeviceStats::default()),
        }
    }

    /// `count` copies of `frame`.
    pub fn repeating(frame: Frame, count: usize) -> Self {
        Self::new(vec![Scripted::Frame(frame); count])
    }

    /// A backend whose device cannot be opened.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(Vec::new())
        }
    }

    pub fn stats(&self) -> Arc<DeviceStats> {
        Arc::clone(&self.stats)
    }
}

impl CameraBackend for PlaybackCamera {
    fn name(&self) -> &str {
        "Playback"
    }

    fn open(&self, device_index: u32) -> Result<Box<dyn CameraHandle>> {
        if !self.available {
            return Err(ImagedError::Device(format!("device {device_index} not found")));
        }
        self.stats.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(PlaybackHandle {
            remaining: self.script.iter().cloned().collect(),
            stats: Arc::clone(&self.stats),
            released: false,
        }))
    }
}

struct PlaybackHandle {
    remaining: VecDeque<Scripted>,
    stats: Arc<DeviceStats>,
    released: bool,
}

impl CameraHandle for PlaybackHandle {
    fn read_frame(&mut self) -> Result<Option<Frame>> {
        if self.released {
            return Err(ImagedError::Device("read from a released device".into()));
        }
        self.stats.reads.fetch_add(1, Ordering::SeqCst);
        match self.remaining.pop_front() {
            Some(Scripted::Frame(frame)) => Ok(Some(frame)),
            Some(Scripted::Empty) | None => Ok(None),
            Some(Scripted::Fail(reason)) => Err(ImagedError::Device(reason)),
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.stats.releases.fetch_add(1, Ordering::SeqCst);
        }
    }
}
