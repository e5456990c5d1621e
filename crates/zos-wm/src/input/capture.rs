//! Document-level pointer capture for active gestures
//!
//! While a window is being moved or resized it needs pointer move/up events
//! from the whole document, not just from the element that received the
//! pointer-down. The host provides an [`InputSurface`] that can attach and
//! detach those listeners and apply the global cursor; gestures hold a
//! [`PointerCapture`] guard for as long as they are active.

use std::fmt;
use std::rc::Rc;
use crate::control::ControlId;

/// Host-side pointer event surface
pub trait InputSurface {
    /// Start routing document pointer move/up events to `owner`
    fn subscribe(&self, owner: ControlId);

    /// Stop routing document pointer events to `owner`
    fn unsubscribe(&self, owner: ControlId);

    /// Apply a cursor to the whole document
    fn set_cursor(&self, cursor: &str);
}

/// Surface that ignores every request
///
/// Used when the engine runs headless.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl InputSurface for NullSurface {
    fn subscribe(&self, _owner: ControlId) {}
    fn unsubscribe(&self, _owner: ControlId) {}
    fn set_cursor(&self, _cursor: &str) {}
}

/// Subscription to document pointer events, released on drop
pub struct PointerCapture {
    surface: Rc<dyn InputSurface>,
    owner: ControlId,
}

impl PointerCapture {
    /// Subscribe `owner` to document pointer events
    pub fn acquire(surface: Rc<dyn InputSurface>, owner: ControlId) -> Self {
        surface.subscribe(owner);
        Self { surface, owner }
    }

    /// Control the events are routed to
    #[inline]
    pub fn owner(&self) -> ControlId {
        self.owner
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.surface.unsubscribe(self.owner);
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture").field("owner", &self.owner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingSurface;

    #[test]
    fn test_capture_subscribes_and_releases_on_drop() {
        let surface = Rc::new(RecordingSurface::default());

        let capture = PointerCapture::acquire(surface.clone(), 7);
        assert_eq!(capture.owner(), 7);
        assert_eq!(surface.subscribed(), vec![7]);
        assert!(surface.unsubscribed().is_empty());

        drop(capture);
        assert_eq!(surface.unsubscribed(), vec![7]);
        assert_eq!(surface.active_captures(), 0);
    }

    #[test]
    fn test_capture_released_when_replaced() {
        let surface = Rc::new(RecordingSurface::default());

        let mut slot = Some(PointerCapture::acquire(surface.clone(), 1));
        assert_eq!(slot.as_ref().map(PointerCapture::owner), Some(1));
        slot = Some(PointerCapture::acquire(surface.clone(), 2));

        assert_eq!(surface.unsubscribed(), vec![1]);
        assert_eq!(surface.active_captures(), 1);
        drop(slot);
        assert_eq!(surface.active_captures(), 0);
    }
}
