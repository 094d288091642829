//! Axis-aligned bounding-box collision test
//!
//! Everything in the arena is an axis-aligned square, so the whole collision
//! story is one overlap predicate. Strict inequalities: boxes that merely
//! share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left origin plus extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box helper
    pub fn square(min: Vec2, edge: f32) -> Self {
        Self::new(min, Vec2::splat(edge))
    }

    /// Grow the box by `margin` on every side
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Standard AABB overlap test
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::square(Vec2::new(30.0, 30.0), 60.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_boxes() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::square(Vec2::new(100.0, 0.0), 40.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_shared_edge_does_not_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::square(Vec2::new(40.0, 0.0), 40.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_single_pixel_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::square(Vec2::new(39.0, 39.0), 60.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Aabb::square(Vec2::new(0.0, 0.0), 100.0);
        let inner = Aabb::square(Vec2::new(30.0, 30.0), 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_inflate() {
        let a = Aabb::square(Vec2::new(180.0, 180.0), 40.0).inflate(50.0);
        assert_eq!(a.min, Vec2::new(130.0, 130.0));
        assert_eq!(a.max(), Vec2::new(270.0, 270.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 1.0f32..200.0,
        ) {
            let a = Aabb::square(Vec2::new(ax, ay), aw);
            let b = Aabb::square(Vec2::new(bx, by), bw);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_box_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0, w in 1.0f32..200.0,
        ) {
            let a = Aabb::square(Vec2::new(x, y), w);
            prop_assert!(a.overlaps(&a));
        }
    }
}
