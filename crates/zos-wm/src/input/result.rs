//! Input result type

use serde::Serialize;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed by a gesture; the host suppresses the default action
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// No gesture is active; the host shows this cursor on the hovered element
    Hover {
        cursor: &'static str,
    },
}
