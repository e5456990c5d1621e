//! Integer 2D vector for positions, sizes and edge masks

use serde::{Deserialize, Serialize};

/// Integer 2D vector
///
/// Used for positions, sizes, pointer positions and edge masks. A mask is a
/// vector whose components are each one of `-1`, `0` or `1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2Int {
    pub x: i32,
    pub y: i32,
}

impl Vec2Int {
    /// Zero vector
    pub const ZERO: Vec2Int = Vec2Int { x: 0, y: 0 };

    /// Unit vector on both axes
    pub const ONE: Vec2Int = Vec2Int { x: 1, y: 1 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same value on both axes
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2Int) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec2Int) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Negative components kept, positive ones zeroed
    #[inline]
    pub fn min0(self) -> Self {
        self.min(Self::ZERO)
    }

    /// Positive components kept, negative ones zeroed
    #[inline]
    pub fn max0(self) -> Self {
        self.max(Self::ZERO)
    }

    /// Both components are zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Exactly one component is nonzero
    #[inline]
    pub fn is_single_axis(self) -> bool {
        (self.x != 0) != (self.y != 0)
    }

    /// At least one component is positive
    #[inline]
    pub fn any_positive(self) -> bool {
        self.x > 0 || self.y > 0
    }

    /// At least one component is negative
    #[inline]
    pub fn any_negative(self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl std::ops::Add for Vec2Int {
    type Output = Vec2Int;
    #[inline]
    fn add(self, other: Vec2Int) -> Vec2Int {
        Vec2Int::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2Int {
    type Output = Vec2Int;
    #[inline]
    fn sub(self, other: Vec2Int) -> Vec2Int {
        Vec2Int::new(self.x - other.x, self.y - other.y)
    }
}

/// Component-wise product, used to apply masks
impl std::ops::Mul for Vec2Int {
    type Output = Vec2Int;
    #[inline]
    fn mul(self, other: Vec2Int) -> Vec2Int {
        Vec2Int::new(self.x * other.x, self.y * other.y)
    }
}

impl std::ops::Mul<i32> for Vec2Int {
    type Output = Vec2Int;
    #[inline]
    fn mul(self, s: i32) -> Vec2Int {
        Vec2Int::new(self.x * s, self.y * s)
    }
}

impl std::ops::Neg for Vec2Int {
    type Output = Vec2Int;
    #[inline]
    fn neg(self) -> Vec2Int {
        Vec2Int::new(-self.x, -self.y)
    }
}
