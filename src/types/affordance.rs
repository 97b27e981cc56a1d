use serde::{Deserialize, Serialize};

use super::errors::SaveError;

/// Bounding rectangle of a selection range, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    /// Builds a rect from its origin and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
            width,
            height,
        }
    }
}

/// Size of the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Fixed (viewport-relative) placement of the affordance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordancePosition {
    pub top: f64,
    pub left: f64,
}

/// The live text selection as reported by the host page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub text: String,
    /// `None` when the selection has no range.
    pub rect: Option<SelectionRect>,
}

impl Selection {
    pub fn new(text: &str, rect: SelectionRect) -> Self {
        Self {
            text: text.to_string(),
            rect: Some(rect),
        }
    }

    /// Selection text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Where a selection-end signal originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrigin {
    /// Ordinary host page content.
    Page,
    /// The affordance button itself, or one of its children.
    Affordance,
    /// Anything inside the isolated render container.
    IsolatedRoot,
}

impl EventOrigin {
    /// Signals raised by our own UI never trigger a new affordance.
    pub fn is_own_ui(self) -> bool {
        !matches!(self, EventOrigin::Page)
    }
}

/// Lifecycle of the floating affordance.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AffordanceState {
    #[default]
    Hidden,
    Shown,
    Saving,
    Success,
    Error(SaveError),
}

/// Visual variant of the affordance; maps to distinct styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordanceVariant {
    Idle,
    Saving,
    Success,
    Error,
}

/// What the host draws inside the isolated render target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordanceView {
    pub label: String,
    pub position: AffordancePosition,
    pub variant: AffordanceVariant,
    /// Inspectable reason shown on hover; set in the error state.
    pub tooltip: Option<String>,
}
