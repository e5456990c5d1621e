//! Control tree owning every control, its container and z-order

use std::collections::HashMap;
use tracing::debug;
use crate::error::WmError;
use crate::math::{FrameStyle, Rect, Vec2Int, FRAME_STYLE};
use super::region::hit_test_window;
use super::{Control, ControlConfig, ControlId, ControlKind, Parent, Window, WindowConfig, WindowRegion};

/// Arena of controls grouped by container
///
/// Controls reference each other by [`ControlId`] only; anchors and gesture
/// state never own the controls they point at.
pub struct ControlTree {
    /// All controls by ID
    controls: HashMap<ControlId, Control>,
    /// Children of each container, back to front
    children: HashMap<Parent, Vec<ControlId>>,
    /// Frame style, read once at construction
    style: FrameStyle,
    /// Desktop bounds used as snap edges (None = unbounded)
    desktop_size: Option<Vec2Int>,
    /// Containers whose layout changed since the last drain
    pub(crate) dirty_layouts: Vec<Parent>,
    /// Next control ID
    next_id: ControlId,
}

impl Default for ControlTree {
    fn default() -> Self {
        Self::new(FRAME_STYLE)
    }
}

impl ControlTree {
    /// Create an empty tree
    pub fn new(style: FrameStyle) -> Self {
        Self {
            controls: HashMap::new(),
            children: HashMap::new(),
            style,
            desktop_size: None,
            dirty_layouts: Vec::new(),
            next_id: 1,
        }
    }

    /// Frame style in effect
    #[inline]
    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    /// Bound the desktop so its edges act as snap targets
    pub fn set_desktop_size(&mut self, size: Vec2Int) {
        self.desktop_size = Some(size);
    }

    /// Create a new window
    pub fn create_window(&mut self, config: WindowConfig) -> Result<ControlId, WmError> {
        let rect = Rect::new(config.position, config.size);
        let id = self.insert(config.parent, rect, ControlKind::Window(Window::new(config.title)))?;
        debug!(id, parent = ?config.parent, "window created");
        Ok(id)
    }

    /// Create a new plain control
    pub fn create_control(&mut self, config: ControlConfig) -> Result<ControlId, WmError> {
        let rect = Rect::new(config.position, config.size);
        self.insert(config.parent, rect, ControlKind::Plain)
    }

    fn insert(&mut self, parent: Parent, rect: Rect, kind: ControlKind) -> Result<ControlId, WmError> {
        if let Parent::Window(parent_id) = parent {
            match self.controls.get(&parent_id) {
                None => return Err(WmError::UnknownControl(parent_id)),
                Some(control) if !control.is_window() => {
                    return Err(WmError::InvalidParent(parent_id))
                }
                Some(_) => {}
            }
        }

        let id = self.next_id;
        self.next_id += 1;

        self.controls.insert(id, Control { id, parent, rect, kind });
        self.children.entry(parent).or_default().push(id);

        Ok(id)
    }

    /// Remove a control and everything inside it
    ///
    /// Returns the removed IDs. Removed controls are purged from every anchor
    /// island still alive so no gesture keeps a dangling reference.
    pub fn remove(&mut self, id: ControlId) -> Result<Vec<ControlId>, WmError> {
        let parent = match self.controls.get(&id) {
            Some(control) => control.parent,
            None => return Err(WmError::UnknownControl(id)),
        };

        let mut removed = vec![id];
        let mut next = 0;
        while next < removed.len() {
            if let Some(children) = self.children.remove(&Parent::Window(removed[next])) {
                removed.extend(children);
            }
            next += 1;
        }

        for removed_id in &removed {
            self.controls.remove(removed_id);
        }
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|&sid| sid != id);
        }

        for control in self.controls.values_mut() {
            if let Some(island) = control.window_mut().and_then(|w| w.gesture.island_mut()) {
                for removed_id in &removed {
                    island.remove_control(*removed_id);
                }
            }
        }

        debug!(id, count = removed.len(), "controls removed");
        Ok(removed)
    }

    /// Get a control by ID
    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    /// Get a mutable control by ID
    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(&id)
    }

    /// Get window data by ID (None for plain controls)
    pub fn window(&self, id: ControlId) -> Option<&Window> {
        self.controls.get(&id).and_then(Control::window)
    }

    pub(crate) fn window_mut(&mut self, id: ControlId) -> Option<&mut Window> {
        self.controls.get_mut(&id).and_then(Control::window_mut)
    }

    /// Change a window's title
    pub fn set_title(&mut self, id: ControlId, title: impl Into<String>) -> Result<(), WmError> {
        let control = self.controls.get_mut(&id).ok_or(WmError::UnknownControl(id))?;
        let window = control.window_mut().ok_or(WmError::NotAWindow(id))?;
        window.title = title.into();
        Ok(())
    }

    /// Replace a control's geometry
    pub fn set_rect(&mut self, id: ControlId, rect: Rect) -> Result<(), WmError> {
        let control = self.controls.get_mut(&id).ok_or(WmError::UnknownControl(id))?;
        control.set_rect(rect);
        Ok(())
    }

    /// Children of a container, back to front
    pub fn children(&self, parent: Parent) -> &[ControlId] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bring a control to the front of its container
    pub fn focus(&mut self, id: ControlId) {
        let parent = match self.controls.get(&id) {
            Some(control) => control.parent,
            None => return,
        };
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|&sid| sid != id);
            siblings.push(id);
        }
    }

    /// Check if `id` is `ancestor` or lives somewhere inside its body
    pub fn is_within(&self, id: ControlId, ancestor: ControlId) -> bool {
        let mut current = id;
        loop {
            if current == ancestor {
                return true;
            }
            match self.controls.get(&current).map(|c| c.parent) {
                Some(Parent::Window(parent)) => current = parent,
                _ => return false,
            }
        }
    }

    /// Origin of a container in document coordinates
    pub fn absolute_origin(&self, parent: Parent) -> Vec2Int {
        match parent {
            Parent::Detached | Parent::Desktop => Vec2Int::ZERO,
            Parent::Window(id) => match self.controls.get(&id) {
                Some(control) => {
                    self.absolute_origin(control.parent)
                        + control.position()
                        + Vec2Int::new(0, self.style.title_bar_height)
                }
                None => Vec2Int::ZERO,
            },
        }
    }

    /// Size of a window's body (below the title bar)
    pub fn body_size(&self, id: ControlId) -> Option<Vec2Int> {
        let control = self.controls.get(&id)?;
        control.window()?;
        let size = control.size() - Vec2Int::new(0, self.style.title_bar_height);
        Some(size.max(Vec2Int::ZERO))
    }

    /// Extent of a container, if bounded
    pub fn container_size(&self, parent: Parent) -> Option<Vec2Int> {
        match parent {
            Parent::Detached => None,
            Parent::Desktop => self.desktop_size,
            Parent::Window(id) => self.body_size(id),
        }
    }

    /// Find the topmost window and region under a document position
    ///
    /// Child windows inside a body are tested before the window owning it.
    pub fn region_at(&self, pointer: Vec2Int) -> Option<(ControlId, WindowRegion)> {
        self.region_in(Parent::Desktop, pointer)
    }

    fn region_in(&self, parent: Parent, pointer: Vec2Int) -> Option<(ControlId, WindowRegion)> {
        let local = pointer - self.absolute_origin(parent);

        for &id in self.children(parent).iter().rev() {
            let control = match self.controls.get(&id) {
                Some(c) if c.is_window() && c.rect.contains(local) => c,
                _ => continue,
            };

            if let Some(hit) = self.region_in(Parent::Window(id), pointer) {
                return Some(hit);
            }
            return Some((id, hit_test_window(&control.rect, local, &self.style)));
        }
        None
    }

    /// All controls, unordered
    pub fn all_controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    /// Number of controls
    pub fn count(&self) -> usize {
        self.controls.len()
    }
}
