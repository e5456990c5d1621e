//! Window-specific control state

use crate::input::Gesture;

/// Window data carried by a window control
#[derive(Debug, Default)]
pub struct Window {
    /// Window title
    pub title: String,
    /// Gesture in progress, if any
    pub(crate) gesture: Gesture,
}

impl Window {
    /// Create an idle window
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            gesture: Gesture::Idle,
        }
    }

    /// Current gesture
    #[inline]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }
}
