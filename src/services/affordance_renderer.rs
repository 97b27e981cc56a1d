//! Affordance Renderer: placement, styling and per-state views of the
//! floating save button.
//!
//! The stylesheet is only ever injected into the isolated render root, so
//! every rule is scoped to the button's own class.

use crate::types::affordance::{
    AffordancePosition, AffordanceState, AffordanceVariant, AffordanceView, SelectionRect, Viewport,
};
use crate::types::settings::LayoutSettings;

/// Base class carried by the button in every state.
pub const AFFORDANCE_CLASS: &str = "whs-floating-btn";

pub const LABEL_SHOWN: &str = "Save Highlight?";
pub const LABEL_SAVING: &str = "Saving...";
pub const LABEL_SUCCESS: &str = "✓ Saved!";
pub const LABEL_ERROR: &str = "⚠ Error";

/// Per-variant gradient colors.
struct Palette;
impl Palette {
    const IDLE: (&'static str, &'static str) = ("#667eea", "#764ba2");
    const SUCCESS: (&'static str, &'static str) = ("#10b981", "#059669");
    const ERROR: (&'static str, &'static str) = ("#ef4444", "#dc2626");
    const IDLE_SHADOW: &'static str = "102, 126, 234";
    const SUCCESS_SHADOW: &'static str = "16, 185, 129";
    const ERROR_SHADOW: &'static str = "239, 68, 68";
}

impl AffordanceVariant {
    /// Modifier class appended to [`AFFORDANCE_CLASS`].
    pub fn class_name(self) -> &'static str {
        match self {
            AffordanceVariant::Idle => "whs-floating-btn--idle",
            AffordanceVariant::Saving => "whs-floating-btn--saving",
            AffordanceVariant::Success => "whs-floating-btn--success",
            AffordanceVariant::Error => "whs-floating-btn--error",
        }
    }
}

/// Places the affordance centred above the selection.
///
/// Falls back to below the selection when there is not enough room above,
/// and clamps horizontally so the button keeps `margin` from both edges.
pub fn compute_position(
    rect: &SelectionRect,
    viewport: &Viewport,
    layout: &LayoutSettings,
) -> AffordancePosition {
    let mut top = rect.top - layout.height - layout.offset;
    let mut left = rect.left + rect.width / 2.0 - layout.width / 2.0;

    if top < layout.margin {
        top = rect.bottom + layout.offset;
    }
    if left < layout.margin {
        left = layout.margin;
    }
    if left + layout.width > viewport.width - layout.margin {
        left = viewport.width - layout.width - layout.margin;
    }

    AffordancePosition { top, left }
}

/// Builds the view the host draws for `state`, or `None` when hidden.
pub fn view_for(state: &AffordanceState, position: AffordancePosition) -> Option<AffordanceView> {
    let (label, variant, tooltip) = match state {
        AffordanceState::Hidden => return None,
        AffordanceState::Shown => (LABEL_SHOWN, AffordanceVariant::Idle, None),
        AffordanceState::Saving => (LABEL_SAVING, AffordanceVariant::Saving, None),
        AffordanceState::Success => (LABEL_SUCCESS, AffordanceVariant::Success, None),
        AffordanceState::Error(err) => (
            LABEL_ERROR,
            AffordanceVariant::Error,
            Some(err.user_message().to_string()),
        ),
    };
    Some(AffordanceView {
        label: label.to_string(),
        position,
        variant,
        tooltip,
    })
}

fn gradient(colors: (&str, &str)) -> String {
    format!("linear-gradient(135deg, {} 0%, {} 100%)", colors.0, colors.1)
}

fn shadow(rgb: &str) -> String {
    format!("0 8px 16px rgba({rgb}, 0.4), 0 4px 8px rgba(0, 0, 0, 0.2)")
}

/// Stylesheet injected into the isolated root next to the button.
///
/// Every declaration is `!important` so nothing the page manages to inherit
/// through the root can override it.
pub fn stylesheet() -> String {
    let base = AFFORDANCE_CLASS;
    let mut css = String::with_capacity(2048);

    css.push_str(&format!(
        ".{base} {{\
position: fixed !important;\
z-index: 2147483647 !important;\
background: {bg} !important;\
color: white !important;\
border: none !important;\
border-radius: 12px !important;\
padding: 10px 18px !important;\
font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif !important;\
font-size: 13px !important;\
font-weight: 600 !important;\
cursor: pointer !important;\
box-shadow: {shadow} !important;\
transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1) !important;\
pointer-events: auto !important;\
margin: 0 !important;\
display: block !important;\
visibility: visible !important;\
opacity: 1 !important;\
letter-spacing: 0.3px !important;\
}}",
        bg = gradient(Palette::IDLE),
        shadow = shadow(Palette::IDLE_SHADOW),
    ));
    css.push_str(&format!(
        ".{base}:hover {{background: {} !important; transform: translateY(-2px) !important;}}",
        gradient((Palette::IDLE.1, Palette::IDLE.0)),
    ));
    css.push_str(&format!(
        ".{base}:active {{transform: translateY(0) !important;}}"
    ));
    css.push_str(&format!(
        ".{}.{} {{cursor: progress !important; opacity: 0.85 !important;}}",
        base,
        AffordanceVariant::Saving.class_name(),
    ));
    for (variant, colors, rgb) in [
        (AffordanceVariant::Success, Palette::SUCCESS, Palette::SUCCESS_SHADOW),
        (AffordanceVariant::Error, Palette::ERROR, Palette::ERROR_SHADOW),
    ] {
        css.push_str(&format!(
            ".{}.{} {{background: {} !important; box-shadow: {} !important;}}",
            base,
            variant.class_name(),
            gradient(colors),
            shadow(rgb),
        ));
    }
    css
}
