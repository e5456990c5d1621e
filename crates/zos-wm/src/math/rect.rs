//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Aabb, Vec2Int};

/// Axis-aligned rectangle stored as position and size
///
/// `top_left`, `bottom_right`, `position` and `size` are kept consistent:
/// `bottom_right == position + size` at all times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Vec2Int,
    pub size: Vec2Int,
}

impl Rect {
    /// Create from position and size
    #[inline]
    pub const fn new(position: Vec2Int, size: Vec2Int) -> Self {
        Self { position, size }
    }

    /// Create from two corners
    #[inline]
    pub fn from_corners(top_left: Vec2Int, bottom_right: Vec2Int) -> Self {
        Self::new(top_left, bottom_right - top_left)
    }

    /// Top-left corner (same as position)
    #[inline]
    pub fn top_left(&self) -> Vec2Int {
        self.position
    }

    /// Bottom-right corner
    #[inline]
    pub fn bottom_right(&self) -> Vec2Int {
        self.position + self.size
    }

    /// Move the rectangle, keeping its size
    #[inline]
    pub fn set_position(&mut self, position: Vec2Int) {
        self.position = position;
    }

    /// Resize the rectangle, keeping its position
    #[inline]
    pub fn set_size(&mut self, size: Vec2Int) {
        self.size = size;
    }

    /// Move the top-left corner, keeping the bottom-right corner fixed
    #[inline]
    pub fn set_top_left(&mut self, top_left: Vec2Int) {
        let bottom_right = self.bottom_right();
        self.position = top_left;
        self.size = bottom_right - top_left;
    }

    /// Move the bottom-right corner, keeping the top-left corner fixed
    #[inline]
    pub fn set_bottom_right(&mut self, bottom_right: Vec2Int) {
        self.size = bottom_right - self.position;
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2Int) -> bool {
        let br = self.bottom_right();
        p.x >= self.position.x && p.x < br.x && p.y >= self.position.y && p.y < br.y
    }

    /// Bounding box of the rectangle
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.top_left(), self.bottom_right())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_derive_from_position_and_size() {
        let r = Rect::new(Vec2Int::new(10, 20), Vec2Int::new(100, 50));
        assert_eq!(r.top_left(), Vec2Int::new(10, 20));
        assert_eq!(r.bottom_right(), Vec2Int::new(110, 70));
    }

    #[test]
    fn test_set_top_left_keeps_bottom_right() {
        let mut r = Rect::new(Vec2Int::new(10, 20), Vec2Int::new(100, 50));
        r.set_top_left(Vec2Int::new(0, 0));
        assert_eq!(r.position, Vec2Int::new(0, 0));
        assert_eq!(r.size, Vec2Int::new(110, 70));
        assert_eq!(r.bottom_right(), Vec2Int::new(110, 70));
    }

    #[test]
    fn test_set_bottom_right_keeps_position() {
        let mut r = Rect::new(Vec2Int::new(10, 20), Vec2Int::new(100, 50));
        r.set_bottom_right(Vec2Int::new(150, 100));
        assert_eq!(r.position, Vec2Int::new(10, 20));
        assert_eq!(r.size, Vec2Int::new(140, 80));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(Vec2Int::new(10, 20), Vec2Int::new(100, 50));

        assert!(rect.contains(Vec2Int::new(50, 40)));
        assert!(rect.contains(Vec2Int::new(10, 20)));
        assert!(!rect.contains(Vec2Int::new(110, 40)));
        assert!(!rect.contains(Vec2Int::new(5, 40)));
        assert!(!rect.contains(Vec2Int::new(50, 100)));
    }

    #[test]
    fn test_from_corners() {
        let r = Rect::from_corners(Vec2Int::new(-5, 5), Vec2Int::new(15, 25));
        assert_eq!(r.position, Vec2Int::new(-5, 5));
        assert_eq!(r.size, Vec2Int::new(20, 20));
    }
}
