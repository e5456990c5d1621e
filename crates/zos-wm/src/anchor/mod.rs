//! Anchors: controls that follow a resizing window's edge
//!
//! When a window edge is dragged, neighbouring controls that share that edge
//! and children pinned to the window body's far edges move with it. Each such
//! control is recorded as an [`AnchorEntry`] carrying its own edge mask and the
//! per-axis sign applied to the pointer offset. The set built for one gesture is an
//! [`AnchorIsland`].

mod gather;

pub use gather::gather_anchors;

use crate::control::ControlId;
use crate::math::Vec2Int;

/// How an anchored control responds to the driving resize
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    /// A window: resized recursively with the entry's mask and scale
    Window,
    /// A plain control: tracked for snapping exclusion only
    Control,
}

/// A control moving in lockstep with the driving window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorEntry {
    /// Anchored control (owned by the control tree)
    pub control: ControlId,
    /// Edges of the anchored control that move
    pub mask: Vec2Int,
    /// Sign applied to the raw pointer offset on each axis, `1` or `-1`
    pub scale: Vec2Int,
    /// Whether the control resizes recursively
    pub kind: AnchorKind,
}

impl AnchorEntry {
    /// Create a new entry
    #[inline]
    pub const fn new(control: ControlId, mask: Vec2Int, scale: Vec2Int, kind: AnchorKind) -> Self {
        Self { control, mask, scale, kind }
    }

    /// Check if the anchored control resizes recursively
    #[inline]
    pub fn is_window(&self) -> bool {
        self.kind == AnchorKind::Window
    }
}

/// Anchors gathered for one resize gesture
///
/// Never holds the same control twice: a control found again on another axis
/// is folded into its existing entry. Insertion order is kept and is the
/// order anchored windows are updated in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorIsland {
    entries: Vec<AnchorEntry>,
}

impl AnchorIsland {
    /// Create an empty island
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add an entry, or extend the control's existing entry
    ///
    /// An existing entry takes over the axes it does not move yet, with their
    /// mask and scale; axes it already moves are left alone. Returns `true`
    /// if the island changed.
    pub fn push(&mut self, entry: AnchorEntry) -> bool {
        let existing = match self.entries.iter().position(|e| e.control == entry.control) {
            Some(index) => &mut self.entries[index],
            None => {
                self.entries.push(entry);
                return true;
            }
        };

        let mut changed = false;
        if existing.mask.x == 0 && entry.mask.x != 0 {
            existing.mask.x = entry.mask.x;
            existing.scale.x = entry.scale.x;
            changed = true;
        }
        if existing.mask.y == 0 && entry.mask.y != 0 {
            existing.mask.y = entry.mask.y;
            existing.scale.y = entry.scale.y;
            changed = true;
        }
        changed
    }

    /// Check if a control is in the island
    pub fn contains(&self, control: ControlId) -> bool {
        self.entries.iter().any(|e| e.control == control)
    }

    /// Number of anchors
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the island has no anchors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every anchor
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop the anchor for `control`, if present
    pub fn remove_control(&mut self, control: ControlId) {
        self.entries.retain(|e| e.control != control);
    }

    /// Iterate over anchors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &AnchorEntry> {
        self.entries.iter()
    }

    /// Anchored control IDs in insertion order
    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.entries.iter().map(|e| e.control)
    }

    /// Anchors that resize recursively, copied out so the caller can mutate
    /// the tree while walking them
    pub fn windows(&self) -> Vec<AnchorEntry> {
        self.entries.iter().filter(|e| e.is_window()).copied().collect()
    }

    pub(crate) fn into_entries(self) -> Vec<AnchorEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(control: ControlId, kind: AnchorKind) -> AnchorEntry {
        AnchorEntry::new(control, Vec2Int::new(-1, 0), Vec2Int::ONE, kind)
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let mut island = AnchorIsland::new();

        assert!(island.push(entry(1, AnchorKind::Window)));
        assert!(!island.push(AnchorEntry::new(1, Vec2Int::new(1, 0), Vec2Int::splat(-1), AnchorKind::Window)));
        assert_eq!(island.len(), 1);
        assert_eq!(island.iter().next().map(|e| e.scale), Some(Vec2Int::ONE));
    }

    #[test]
    fn test_push_extends_entry_on_new_axis() {
        let mut island = AnchorIsland::new();
        island.push(AnchorEntry::new(1, Vec2Int::new(1, 0), Vec2Int::ONE, AnchorKind::Window));

        assert!(island.push(AnchorEntry::new(1, Vec2Int::new(0, 1), Vec2Int::splat(-1), AnchorKind::Window)));
        assert_eq!(island.len(), 1);
        assert_eq!(
            island.iter().next().copied(),
            Some(AnchorEntry::new(1, Vec2Int::ONE, Vec2Int::new(1, -1), AnchorKind::Window))
        );
    }

    #[test]
    fn test_windows_filters_plain_controls() {
        let mut island = AnchorIsland::new();
        island.push(entry(1, AnchorKind::Window));
        island.push(entry(2, AnchorKind::Control));
        island.push(entry(3, AnchorKind::Window));

        let windows: Vec<ControlId> = island.windows().iter().map(|e| e.control).collect();
        assert_eq!(windows, vec![1, 3]);
        assert_eq!(island.controls().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut island = AnchorIsland::new();
        island.push(entry(1, AnchorKind::Window));
        island.push(entry(2, AnchorKind::Window));

        island.remove_control(1);
        assert!(!island.contains(1));
        assert!(island.contains(2));

        island.clear();
        assert!(island.is_empty());
    }
}
