//! Container queries used by gestures
//!
//! Every container (the desktop, or a window body) answers two geometric
//! questions for the gesture code:
//! - [`snap_edge`](crate::ControlTree::snap_edge): where should this edge snap to?
//! - [`snap_controls`](crate::ControlTree::snap_controls): which controls share this edge?
//!
//! and accepts layout invalidation through
//! [`update_control_sizes`](crate::ControlTree::update_control_sizes).
//! The queries read the control list only; they never move anything.

mod snap;
mod layout;
