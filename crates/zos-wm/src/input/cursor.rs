//! Resize cursor selection

use crate::math::Vec2Int;

/// Cursor shown when no edge is active
pub const NEUTRAL_CURSOR: &str = "auto";

/// Map an edge mask to a CSS cursor
///
/// Vertical direction comes first, then horizontal: `(1, 1)` is `se-resize`.
pub fn mask_to_cursor(mask: Vec2Int) -> &'static str {
    match (mask.y.signum(), mask.x.signum()) {
        (-1, -1) => "nw-resize",
        (-1, 0) => "n-resize",
        (-1, 1) => "ne-resize",
        (0, -1) => "w-resize",
        (0, 1) => "e-resize",
        (1, -1) => "sw-resize",
        (1, 0) => "s-resize",
        (1, 1) => "se-resize",
        _ => NEUTRAL_CURSOR,
    }
}
