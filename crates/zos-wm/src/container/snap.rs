//! Edge snapping and neighbour discovery within a container

use crate::anchor::{AnchorEntry, AnchorIsland};
use crate::control::{ControlId, ControlTree, Parent};
use crate::math::Vec2Int;

/// Best candidate found so far on one axis: (distance, coordinate)
type Candidate = Option<(i32, i32)>;

fn consider(best: &mut Candidate, from: i32, to: i32, margin: i32) {
    let distance = (to - from).abs();
    if distance > margin {
        return;
    }
    match best {
        Some((d, _)) if *d <= distance => {}
        _ => *best = Some((distance, to)),
    }
}

impl ControlTree {
    /// Snap `point` to nearby edges inside a container
    ///
    /// Only axes where `mask` is nonzero are considered. A `-1` axis snaps to
    /// the far edges of other controls and the container's near boundary; a
    /// `1` axis snaps to near edges and the container's far boundary (when the
    /// container is bounded). Controls in `exclude` are ignored. Returns the
    /// point with snapped axes replaced, or `None` if nothing was in range.
    pub fn snap_edge(
        &self,
        parent: Parent,
        point: Vec2Int,
        mask: Vec2Int,
        exclude: &[ControlId],
    ) -> Option<Vec2Int> {
        if !parent.is_container() || mask.is_zero() {
            return None;
        }

        let margin = self.style().snap_border_size;
        let mut best_x: Candidate = None;
        let mut best_y: Candidate = None;

        let bounds = self.container_size(parent);
        if mask.x < 0 {
            consider(&mut best_x, point.x, 0, margin);
        }
        if mask.y < 0 {
            consider(&mut best_y, point.y, 0, margin);
        }
        if let Some(size) = bounds {
            if mask.x > 0 {
                consider(&mut best_x, point.x, size.x, margin);
            }
            if mask.y > 0 {
                consider(&mut best_y, point.y, size.y, margin);
            }
        }

        for &id in self.children(parent) {
            if exclude.contains(&id) {
                continue;
            }
            let rect = match self.get(id) {
                Some(control) => control.rect(),
                None => continue,
            };
            let (tl, br) = (rect.top_left(), rect.bottom_right());

            match mask.x.signum() {
                -1 => consider(&mut best_x, point.x, br.x, margin),
                1 => consider(&mut best_x, point.x, tl.x, margin),
                _ => {}
            }
            match mask.y.signum() {
                -1 => consider(&mut best_y, point.y, br.y, margin),
                1 => consider(&mut best_y, point.y, tl.y, margin),
                _ => {}
            }
        }

        if best_x.is_none() && best_y.is_none() {
            return None;
        }
        Some(Vec2Int::new(
            best_x.map_or(point.x, |(_, x)| x),
            best_y.map_or(point.y, |(_, y)| y),
        ))
    }

    /// Collect controls with an edge on the line through `point`
    ///
    /// For each axis where `mask` is nonzero, a control whose near edge lies
    /// within the snap border of `point` is anchored with mask `-1` on that
    /// axis; otherwise one whose far edge does is anchored with `1`. Entries
    /// carry `scale` on every axis and are merged into `out`.
    pub fn snap_controls(
        &self,
        parent: Parent,
        point: Vec2Int,
        mask: Vec2Int,
        exclude: Option<ControlId>,
        scale: i32,
        out: &mut AnchorIsland,
    ) {
        if !parent.is_container() || mask.is_zero() {
            return;
        }

        let margin = self.style().snap_border_size;
        let edge_mask = |near: i32, far: i32, at: i32| {
            if (near - at).abs() <= margin {
                -1
            } else if (far - at).abs() <= margin {
                1
            } else {
                0
            }
        };

        for &id in self.children(parent) {
            if exclude == Some(id) {
                continue;
            }
            let control = match self.get(id) {
                Some(control) => control,
                None => continue,
            };
            let (tl, br) = (control.top_left(), control.bottom_right());

            let mut anchor_mask = Vec2Int::ZERO;
            if mask.x != 0 {
                anchor_mask.x = edge_mask(tl.x, br.x, point.x);
            }
            if mask.y != 0 {
                anchor_mask.y = edge_mask(tl.y, br.y, point.y);
            }

            if !anchor_mask.is_zero() {
                out.push(AnchorEntry::new(id, anchor_mask, Vec2Int::splat(scale), control.anchor_kind()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorKind;
    use crate::control::{ControlConfig, WindowConfig};

    fn window(tree: &mut ControlTree, x: i32, y: i32, w: i32, h: i32) -> ControlId {
        tree.create_window(WindowConfig::new("W", Vec2Int::new(x, y), Vec2Int::new(w, h)))
            .unwrap()
    }

    #[test]
    fn test_snap_to_neighbour_near_edge() {
        let mut tree = ControlTree::default();
        let a = window(&mut tree, 0, 100, 100, 100);
        window(&mut tree, 210, 100, 100, 100);

        // Dragging a's right edge towards the neighbour's left edge
        let snapped = tree.snap_edge(Parent::Desktop, Vec2Int::new(200, 200), Vec2Int::new(1, 0), &[a]);
        assert_eq!(snapped, Some(Vec2Int::new(210, 200)));
    }

    #[test]
    fn test_snap_picks_nearest() {
        let mut tree = ControlTree::default();
        window(&mut tree, 300, 300, 100, 100);
        window(&mut tree, 305, 500, 100, 100);

        let snapped = tree.snap_edge(Parent::Desktop, Vec2Int::new(303, 0), Vec2Int::new(1, 0), &[]);
        assert_eq!(snapped, Some(Vec2Int::new(305, 0)));
    }

    #[test]
    fn test_snap_out_of_range() {
        let mut tree = ControlTree::default();
        let a = window(&mut tree, 100, 100, 100, 100);
        window(&mut tree, 300, 100, 100, 100);

        let snapped = tree.snap_edge(Parent::Desktop, Vec2Int::new(200, 200), Vec2Int::new(1, 0), &[a]);
        assert_eq!(snapped, None);
    }

    #[test]
    fn test_snap_negative_axis_uses_far_edges_and_origin() {
        let mut tree = ControlTree::default();
        window(&mut tree, 100, 100, 100, 100);

        // Left edge near the neighbour's right edge
        let snapped = tree.snap_edge(Parent::Desktop, Vec2Int::new(208, 500), Vec2Int::new(-1, 0), &[]);
        assert_eq!(snapped, Some(Vec2Int::new(200, 500)));

        // Top edge near the desktop origin
        let snapped = tree.snap_edge(Parent::Desktop, Vec2Int::new(500, 12), Vec2Int::new(0, -1), &[]);
        assert_eq!(snapped, Some(Vec2Int::new(500, 0)));
    }

    #[test]
    fn test_snap_to_desktop_far_edge_when_bounded() {
        let mut tree = ControlTree::default();
        let at = Vec2Int::new(1910, 1075);

        assert_eq!(tree.snap_edge(Parent::Desktop, at, Vec2Int::ONE, &[]), None);
        tree.set_desktop_size(Vec2Int::new(1920, 1080));
        assert_eq!(tree.snap_edge(Parent::Desktop, at, Vec2Int::ONE, &[]), Some(Vec2Int::new(1920, 1080)));
    }

    #[test]
    fn test_detached_never_snaps() {
        let tree = ControlTree::default();
        assert_eq!(tree.snap_edge(Parent::Detached, Vec2Int::new(3, 3), Vec2Int::new(-1, -1), &[]), None);
    }

    #[test]
    fn test_excluded_controls_ignored() {
        let mut tree = ControlTree::default();
        let b = window(&mut tree, 205, 100, 100, 100);

        let snapped = tree.snap_edge(Parent::Desktop, Vec2Int::new(200, 200), Vec2Int::new(1, 0), &[b]);
        assert_eq!(snapped, None);
    }

    #[test]
    fn test_snap_controls_classifies_edges() {
        let mut tree = ControlTree::default();
        let a = window(&mut tree, 0, 0, 100, 100);
        let right = window(&mut tree, 100, 0, 100, 100);
        let aligned = window(&mut tree, 0, 200, 105, 100);
        let plain = tree
            .create_control(ControlConfig {
                position: Vec2Int::new(98, 400),
                size: Vec2Int::new(20, 20),
                parent: Parent::Desktop,
            })
            .unwrap();
        window(&mut tree, 400, 0, 100, 100);

        let mut out = AnchorIsland::new();
        tree.snap_controls(Parent::Desktop, Vec2Int::new(100, 100), Vec2Int::new(1, 0), Some(a), 1, &mut out);

        let entries: Vec<AnchorEntry> = out.iter().copied().collect();
        assert_eq!(
            entries,
            vec![
                AnchorEntry::new(right, Vec2Int::new(-1, 0), Vec2Int::ONE, AnchorKind::Window),
                AnchorEntry::new(aligned, Vec2Int::new(1, 0), Vec2Int::ONE, AnchorKind::Window),
                AnchorEntry::new(plain, Vec2Int::new(-1, 0), Vec2Int::ONE, AnchorKind::Control),
            ]
        );
    }
}
