//! Per-window gesture state

use crate::anchor::AnchorIsland;
use crate::math::Vec2Int;
use super::PointerCapture;

/// Values captured when a gesture begins
///
/// Every update derives geometry from this snapshot and the current pointer
/// sample, so errors never accumulate across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSnapshot {
    /// Pointer position at gesture start (document coords)
    pub mouse_start: Vec2Int,
    /// Window position at gesture start (parent coords)
    pub position_start: Vec2Int,
    /// Window size at gesture start
    pub size_start: Vec2Int,
}

/// Current gesture of a window
#[derive(Debug, Default)]
pub enum Gesture {
    /// No gesture in progress
    #[default]
    Idle,
    /// Window follows the pointer
    Moving {
        snapshot: DragSnapshot,
        capture: PointerCapture,
    },
    /// One or two edges follow the pointer
    Resizing {
        snapshot: DragSnapshot,
        /// Edges being dragged
        mask: Vec2Int,
        /// Controls moving in lockstep with this window
        island: AnchorIsland,
        /// Present on the window driving the gesture, absent on anchored ones
        capture: Option<PointerCapture>,
    },
}

impl Gesture {
    /// Check if no gesture is in progress
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Check if this is a move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Gesture::Moving { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Gesture::Resizing { .. })
    }

    /// Snapshot taken at gesture start
    pub fn snapshot(&self) -> Option<&DragSnapshot> {
        match self {
            Gesture::Idle => None,
            Gesture::Moving { snapshot, .. } | Gesture::Resizing { snapshot, .. } => Some(snapshot),
        }
    }

    /// Edge mask of an active resize
    pub fn resize_mask(&self) -> Option<Vec2Int> {
        match self {
            Gesture::Resizing { mask, .. } => Some(*mask),
            _ => None,
        }
    }

    /// Anchor island of an active resize
    pub fn island(&self) -> Option<&AnchorIsland> {
        match self {
            Gesture::Resizing { island, .. } => Some(island),
            _ => None,
        }
    }

    pub(crate) fn island_mut(&mut self) -> Option<&mut AnchorIsland> {
        match self {
            Gesture::Resizing { island, .. } => Some(island),
            _ => None,
        }
    }

    /// Check if this gesture holds the document pointer capture
    pub fn has_capture(&self) -> bool {
        match self {
            Gesture::Idle => false,
            Gesture::Moving { .. } => true,
            Gesture::Resizing { capture, .. } => capture.is_some(),
        }
    }
}
