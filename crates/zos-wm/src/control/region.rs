//! Window region for hit testing

use crate::input::{compute_edge_mask, mask_to_cursor, NEUTRAL_CURSOR};
use crate::math::{FrameStyle, Rect, Vec2Int};

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Resize hot zone with the edges it drives
    Resize(Vec2Int),
    /// Title bar area (for moving)
    TitleBar,
    /// Body area (forwarded to content)
    Body,
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::Resize(mask) => mask_to_cursor(*mask),
            WindowRegion::TitleBar => "move",
            WindowRegion::Body => NEUTRAL_CURSOR,
        }
    }
}

/// Classify a point inside a window
///
/// `rect` and `pointer` share the window's container coordinates. Resize hot
/// zones take priority over the title bar so corners stay grabbable.
pub fn hit_test_window(rect: &Rect, pointer: Vec2Int, style: &FrameStyle) -> WindowRegion {
    let mask = compute_edge_mask(pointer, rect, style.resize_handle_size);
    if !mask.is_zero() {
        return WindowRegion::Resize(mask);
    }

    if pointer.y < rect.position.y + style.title_bar_height {
        WindowRegion::TitleBar
    } else {
        WindowRegion::Body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAME_STYLE;

    fn rect() -> Rect {
        Rect::new(Vec2Int::new(100, 100), Vec2Int::new(400, 300))
    }

    #[test]
    fn test_hit_title_bar() {
        let region = hit_test_window(&rect(), Vec2Int::new(300, 110), &FRAME_STYLE);
        assert_eq!(region, WindowRegion::TitleBar);
        assert_eq!(region.cursor(), "move");
    }

    #[test]
    fn test_hit_body() {
        let region = hit_test_window(&rect(), Vec2Int::new(300, 250), &FRAME_STYLE);
        assert_eq!(region, WindowRegion::Body);
        assert_eq!(region.cursor(), "auto");
    }

    #[test]
    fn test_hit_edges_before_title_bar() {
        let region = hit_test_window(&rect(), Vec2Int::new(300, 102), &FRAME_STYLE);
        assert_eq!(region, WindowRegion::Resize(Vec2Int::new(0, -1)));
        assert_eq!(region.cursor(), "n-resize");

        let region = hit_test_window(&rect(), Vec2Int::new(102, 110), &FRAME_STYLE);
        assert_eq!(region, WindowRegion::Resize(Vec2Int::new(-1, 0)));
        assert!(region.is_resize());
    }

    #[test]
    fn test_hit_corner() {
        let region = hit_test_window(&rect(), Vec2Int::new(497, 397), &FRAME_STYLE);
        assert_eq!(region, WindowRegion::Resize(Vec2Int::new(1, 1)));
        assert_eq!(region.cursor(), "se-resize");
    }
}
