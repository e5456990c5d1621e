//! Anchor discovery at the start of a resize

use crate::control::{ControlId, ControlTree, Parent};
use crate::math::{Aabb, Vec2Int};
use super::{AnchorEntry, AnchorIsland};

/// Gather the controls that must follow `driving` while it resizes with `mask`
///
/// With `include_siblings`, side handles seed candidates from siblings sharing
/// the dragged edge, and only those transitively touching the driving control
/// are kept. Children pinned to the body's bottom/right edges are always
/// gathered: with scale `1` on axes whose far edge is dragged, and with `-1`
/// on axes whose near edge is dragged so they hold their place against the
/// moving body origin. A child pinned on both axes of a mixed corner gets one
/// entry with a different sign per axis.
pub fn gather_anchors(
    tree: &ControlTree,
    driving: ControlId,
    mask: Vec2Int,
    include_siblings: bool,
) -> AnchorIsland {
    let mut island = AnchorIsland::new();
    let control = match tree.get(driving) {
        Some(control) => control,
        None => return island,
    };

    if include_siblings && control.parent.is_container() {
        let mut candidates = AnchorIsland::new();

        // Corner handles have no single shared edge to follow
        if mask.is_single_axis() {
            if mask.any_positive() {
                tree.snap_controls(control.parent, control.bottom_right(), mask, Some(driving), 1, &mut candidates);
            }
            if mask.any_negative() {
                tree.snap_controls(control.parent, control.top_left(), mask, Some(driving), 1, &mut candidates);
            }
        }

        for entry in connected_island(tree, driving, candidates.into_entries()) {
            island.push(entry);
        }
    }

    if let Some(body_bottom_right) = tree.body_size(driving) {
        let body = Parent::Window(driving);
        if mask.any_positive() {
            tree.snap_controls(body, body_bottom_right, mask.max0(), None, 1, &mut island);
        }
        if mask.any_negative() {
            tree.snap_controls(body, body_bottom_right, mask.min0(), None, -1, &mut island);
        }
    }

    island
}

/// Expanded bounding box used for adjacency
fn snap_aabb(tree: &ControlTree, id: ControlId) -> Option<Aabb> {
    let margin = tree.style().snap_border_size;
    tree.get(id).map(|c| c.rect().aabb().expand(margin))
}

/// Keep the candidates reachable from `driving` through touching boxes
///
/// Breadth-first over an implicit graph whose edges are overlapping expanded
/// boxes. Claimed candidates are swap-removed, so candidate order is not kept
/// but the resulting set does not depend on it.
fn connected_island(
    tree: &ControlTree,
    driving: ControlId,
    mut candidates: Vec<AnchorEntry>,
) -> Vec<AnchorEntry> {
    let mut island = Vec::new();
    let start = match snap_aabb(tree, driving) {
        Some(aabb) => aabb,
        None => return island,
    };

    take_connected(tree, &start, &mut candidates, &mut island);

    let mut next = 0;
    while next < island.len() && !candidates.is_empty() {
        if let Some(aabb) = snap_aabb(tree, island[next].control) {
            take_connected(tree, &aabb, &mut candidates, &mut island);
        }
        next += 1;
    }

    island
}

fn take_connected(
    tree: &ControlTree,
    aabb: &Aabb,
    candidates: &mut Vec<AnchorEntry>,
    island: &mut Vec<AnchorEntry>,
) {
    let mut i = 0;
    while i < candidates.len() {
        let touching = snap_aabb(tree, candidates[i].control).is_some_and(|other| aabb.intersects(&other));
        if touching {
            // Re-test index i: it now holds the former last candidate
            island.push(candidates.swap_remove(i));
        } else {
            i += 1;
        }
    }
}
