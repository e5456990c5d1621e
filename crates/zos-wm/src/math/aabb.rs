//! Min/max bounding box used for adjacency tests

use super::Vec2Int;

/// Axis-aligned bounding box stored as min and max corners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub min: Vec2Int,
    pub max: Vec2Int,
}

impl Aabb {
    /// Create from corners
    #[inline]
    pub const fn new(min: Vec2Int, max: Vec2Int) -> Self {
        Self { min, max }
    }

    /// Grow by `margin` on all sides
    #[inline]
    pub fn expand(self, margin: i32) -> Aabb {
        Aabb::new(self.min - Vec2Int::splat(margin), self.max + Vec2Int::splat(margin))
    }

    /// Inclusive overlap test: touching boxes intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
