//! Edge mask classification for resize hot zones

use crate::math::{Rect, Vec2Int};

/// Work out which edges of `rect` the pointer is over
///
/// `pointer` must already be in the coordinate space of `rect` (its parent
/// container). Each axis is classified independently: `1` when the pointer is
/// within `hot_width` inside the bottom/right edge, `-1` when within
/// `hot_width` inside the top/left edge, `0` otherwise. When both zones
/// overlap on a small rectangle the top/left edge wins.
pub fn compute_edge_mask(pointer: Vec2Int, rect: &Rect, hot_width: i32) -> Vec2Int {
    let near = pointer - rect.top_left();
    let far = rect.bottom_right() - pointer;

    Vec2Int::new(
        classify_axis(near.x, far.x, hot_width),
        classify_axis(near.y, far.y, hot_width),
    )
}

fn classify_axis(near: i32, far: i32, hot_width: i32) -> i32 {
    let in_zone = |d: i32| d >= 0 && d < hot_width;

    let mut mask = 0;
    if in_zone(far) {
        mask = 1;
    }
    if in_zone(near) {
        mask = -1;
    }
    mask
}
