// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Control state — which actions are available, and validation of the numeric
// input fields that feed them. Independent of any widget toolkit.

use std::collections::BTreeSet;

use imaged_core::config::{FieldRange, InputLimits};
use imaged_core::error::{ImagedError, Result};
use imaged_core::types::{Action, EditorState};
use serde::{Deserialize, Serialize};

/// A set of actions, iterated in `Action` declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionSet(BTreeSet<Action>);

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `action`; returns `false` if it was already present.
    pub fn insert(&mut self, action: Action) -> bool {
        self.0.insert(action)
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Raw text of the numeric input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub width: String,
    pub height: String,
    pub brightness: String,
    pub circle_x: String,
    pub circle_y: String,
    pub radius: String,
}

impl ControlInputs {
    /// Brightness reduction, within `limits.brightness`.
    pub fn brightness(&self, limits: &InputLimits) -> Result<u32> {
        let value = parse_field("brightness", &self.brightness, limits.brightness)?;
        u32::try_from(value).map_err(|_| invalid("brightness", "must not be negative"))
    }

    /// `(width, height)` for resize; both within `limits.size` and positive.
    pub fn size(&self, limits: &InputLimits) -> Result<(i64, i64)> {
        let width = parse_positive("width", &self.width, limits.size)?;
        let height = parse_positive("height", &self.height, limits.size)?;
        Ok((width, height))
    }

    /// `(center_x, center_y, radius)`; all within `limits.circle`, radius positive.
    pub fn circle(&self, limits: &InputLimits) -> Result<(i64, i64, i64)> {
        let x = parse_field("circle x", &self.circle_x, limits.circle)?;
        let y = parse_field("circle y", &self.circle_y, limits.circle)?;
        let radius = parse_positive("radius", &self.radius, limits.circle)?;
        Ok((x, y, radius))
    }

    /// Clear the per-operation fields after an edit. Size fields are kept.
    pub fn clear_operation_fields(&mut self) {
        self.brightness.clear();
        self.circle_x.clear();
        self.circle_y.clear();
        self.radius.clear();
    }
}

/// Parse a whole number from a text field and check it against `range`.
pub fn parse_field(field: &str, text: &str, range: FieldRange) -> Result<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(invalid(field, "value is empty"));
    }
    let value: i64 = text
        .parse()
        .map_err(|_| invalid(field, &format!("{text:?} is not a whole number")))?;
    if !range.contains(value) {
        return Err(invalid(
            field,
            &format!("must be between {} and {}", range.min, range.max),
        ));
    }
    Ok(value)
}

fn parse_positive(field: &str, text: &str, range: FieldRange) -> Result<i64> {
    let value = parse_field(field, text, range)?;
    if value <= 0 {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

fn invalid(field: &str, reason: &str) -> ImagedError {
    ImagedError::InvalidInput {
        field: field.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Actions the user may trigger in `state` with the given field contents.
///
/// Loading and capturing are always available. Everything else needs a loaded
/// image, and the parameterised actions also need their fields to be valid.
pub fn enabled_actions(
    state: EditorState,
    inputs: &ControlInputs,
    limits: &InputLimits,
) -> ActionSet {
    let mut set = ActionSet::from_iter([Action::LoadFile, Action::Capture]);
    if state == EditorState::Empty {
        return set;
    }

    set.insert(Action::SelectChannel);
    set.insert(Action::Save);
    if inputs.size(limits).is_ok() {
        set.insert(Action::Resize);
    }
    if inputs.brightness(limits).is_ok() {
        set.insert(Action::DecreaseBrightness);
    }
    if inputs.circle(limits).is_ok() {
        set.insert(Action::DrawCircle);
    }
    set
}
