//! Axis-aligned collision predicate
//!
//! The player, both members of every obstacle pair, and the scoring gate all
//! share one rectangle convention: top-left corner plus extent. The predicate
//! is stateless and is evaluated twice per slot per Playing frame.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Overlap test with half-open extents: two rectangles overlap iff they are
/// separated along neither axis, and an exact edge touch is not an overlap.
/// Degenerate (zero-extent) rectangles are valid inputs; the scoring gate
/// relies on that.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(a, b));
        assert!(overlaps(b, a));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(a, b));
        // Shares the y=10 edge exactly
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(a, c));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_entity_meets_obstacle_column() {
        // Entity at y=100 with a 24-high hitbox, upper obstacle covering
        // y in [0, 150]: vertical ranges intersect, so the pair overlaps
        // exactly when the x ranges do.
        let upper = Rect::new(200.0, 0.0, 52.0, 150.0);

        let entity_far = Rect::new(100.0, 100.0, 34.0, 24.0);
        assert!(!overlaps(entity_far, upper));

        let entity_at = Rect::new(180.0, 100.0, 34.0, 24.0);
        assert!(overlaps(entity_at, upper));
    }

    #[test]
    fn test_zero_width_gate_inside_span() {
        let span = Rect::new(0.0, 0.0, 50.0, 50.0);
        let gate = Rect::new(25.0, 10.0, 0.0, 10.0);
        assert!(overlaps(span, gate));

        // Gate sitting exactly on the leading edge does not count
        let edge_gate = Rect::new(0.0, 10.0, 0.0, 10.0);
        assert!(!overlaps(span, edge_gate));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_disjoint_x_never_overlaps(
            ax in -500.0f32..500.0, aw in 0.0f32..200.0,
            gap in 0.0f32..300.0, bw in 0.0f32..200.0,
            ay in -500.0f32..500.0, ah in 0.0f32..200.0,
            by in -500.0f32..500.0, bh in 0.0f32..200.0,
        ) {
            // b starts at or past a's right edge: disjoint x ranges
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(ax + aw + gap, by, bw, bh);
            prop_assert!(!overlaps(a, b));
        }
    }
}
