//! Test helpers shared by unit tests

use std::cell::RefCell;
use crate::control::ControlId;
use crate::input::InputSurface;

/// Input surface that records every request
#[derive(Default)]
pub struct RecordingSurface {
    subscribed: RefCell<Vec<ControlId>>,
    unsubscribed: RefCell<Vec<ControlId>>,
    cursors: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn subscribed(&self) -> Vec<ControlId> {
        self.subscribed.borrow().clone()
    }

    pub fn unsubscribed(&self) -> Vec<ControlId> {
        self.unsubscribed.borrow().clone()
    }

    pub fn cursors(&self) -> Vec<String> {
        self.cursors.borrow().clone()
    }

    pub fn last_cursor(&self) -> Option<String> {
        self.cursors.borrow().last().cloned()
    }

    /// Subscriptions not yet released
    pub fn active_captures(&self) -> usize {
        self.subscribed.borrow().len() - self.unsubscribed.borrow().len()
    }
}

impl InputSurface for RecordingSurface {
    fn subscribe(&self, owner: ControlId) {
        self.subscribed.borrow_mut().push(owner);
    }

    fn unsubscribe(&self, owner: ControlId) {
        self.unsubscribed.borrow_mut().push(owner);
    }

    fn set_cursor(&self, cursor: &str) {
        self.cursors.borrow_mut().push(cursor.to_string());
    }
}
