// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IMAGEd — editing session.
//
// `PixelEditor` holds the current image and exposes load, camera capture, the
// pixel transforms and save. `controls` maps editor state and field contents
// to the set of available actions, independent of any GUI toolkit.

pub mod controls;
pub mod editor;
pub mod state;

pub use controls::{ActionSet, ControlInputs, enabled_actions, parse_field};
pub use editor::PixelEditor;
pub use state::Status;
