//! Error types for the window manager
//!
//! Only control-tree management and configuration report errors. Gesture
//! handling never fails: missing containers, anchors or snap targets simply
//! produce no effect.

use std::fmt;
use crate::control::ControlId;

/// Errors reported by control-tree management and configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WmError {
    /// No control with this ID exists
    UnknownControl(ControlId),

    /// The control exists but is not a window
    NotAWindow(ControlId),

    /// The requested parent cannot contain controls
    InvalidParent(ControlId),

    /// Style values are out of range
    InvalidStyle(String),

    /// Configuration could not be parsed
    Config(String),
}

impl fmt::Display for WmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmError::UnknownControl(id) => write!(f, "Unknown control: {}", id),
            WmError::NotAWindow(id) => write!(f, "Control {} is not a window", id),
            WmError::InvalidParent(id) => write!(f, "Control {} cannot contain controls", id),
            WmError::InvalidStyle(msg) => write!(f, "Invalid style: {}", msg),
            WmError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for WmError {}
