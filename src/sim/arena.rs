//! Arena geometry
//!
//! The play field is a rectangle with a solid border band on every side.
//! Everything that moves (player and enemies) is a square box whose origin
//! must stay within `[border_width, extent - border_width - size]` per axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MIN_ARENA_EXTENT;

/// Immutable per-round play field bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub border_width: f32,
}

impl Arena {
    /// Build an arena, clamping degenerate or non-finite geometry to a
    /// minimum viable play field instead of letting NaN boxes through.
    pub fn new(width: f32, height: f32, border_width: f32) -> Self {
        let width = sanitize_extent(width, "width");
        let height = sanitize_extent(height, "height");

        let max_border = width.min(height) / 4.0;
        let border_width = if !border_width.is_finite() || border_width < 0.0 {
            log::warn!("arena border_width {border_width} invalid, using 0");
            0.0
        } else if border_width > max_border {
            log::warn!("arena border_width {border_width} too thick, clamping to {max_border}");
            max_border
        } else {
            border_width
        };

        Self {
            width,
            height,
            border_width,
        }
    }

    /// Square arena helper (the reference field is square)
    pub fn square(extent: f32, border_width: f32) -> Self {
        Self::new(extent, extent, border_width)
    }

    /// Origin of the playable interior (same on both axes)
    #[inline]
    pub fn interior_min(&self) -> f32 {
        self.border_width
    }

    /// Largest origin a box of `size` may have, per axis
    #[inline]
    pub fn interior_max_for(&self, size: f32) -> Vec2 {
        Vec2::new(
            self.width - self.border_width - size,
            self.height - self.border_width - size,
        )
    }

    /// Clamp a box origin into the playable interior. A box too big for the
    /// interior pins to the near border instead of panicking on an inverted
    /// clamp range.
    pub fn clamp_box(&self, pos: Vec2, size: f32) -> Vec2 {
        let min = self.interior_min();
        let max = self.interior_max_for(size).max(Vec2::splat(min));
        Vec2::new(pos.x.clamp(min, max.x), pos.y.clamp(min, max.y))
    }

    /// Whether a box of `size` at `pos` lies fully inside the interior
    pub fn contains_box(&self, pos: Vec2, size: f32) -> bool {
        let min = self.interior_min();
        let max = self.interior_max_for(size);
        pos.x >= min && pos.y >= min && pos.x <= max.x && pos.y <= max.y
    }

    /// Centered origin for a box of `size`
    pub fn center_for(&self, size: f32) -> Vec2 {
        Vec2::new((self.width - size) / 2.0, (self.height - size) / 2.0)
    }
}

fn sanitize_extent(extent: f32, axis: &str) -> f32 {
    if !extent.is_finite() || extent < MIN_ARENA_EXTENT {
        log::warn!("arena {axis} {extent} below minimum, clamping to {MIN_ARENA_EXTENT}");
        MIN_ARENA_EXTENT
    } else {
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_box_inside_is_identity() {
        let arena = Arena::square(400.0, 40.0);
        let pos = Vec2::new(180.0, 180.0);
        assert_eq!(arena.clamp_box(pos, 40.0), pos);
    }

    #[test]
    fn test_clamp_box_pushes_back_inside() {
        let arena = Arena::square(400.0, 40.0);

        let clamped = arena.clamp_box(Vec2::new(-10.0, 500.0), 40.0);
        assert_eq!(clamped, Vec2::new(40.0, 320.0));
        assert!(arena.contains_box(clamped, 40.0));
    }

    #[test]
    fn test_clamp_box_tolerates_oversized_box() {
        // A 400px box leaves no interior at all; the clamp must pin it to
        // the near border rather than panic on an inverted range
        let arena = Arena::square(400.0, 40.0);
        assert_eq!(arena.clamp_box(Vec2::new(100.0, 100.0), 400.0), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_center_for() {
        let arena = Arena::square(400.0, 40.0);
        assert_eq!(arena.center_for(40.0), Vec2::new(180.0, 180.0));
    }

    #[test]
    fn test_degenerate_geometry_is_sanitized() {
        let arena = Arena::new(-100.0, f32::NAN, 40.0);
        assert!(arena.width >= 200.0);
        assert!(arena.height >= 200.0);
        assert!(arena.border_width.is_finite());

        // Interior must still be able to hold a reference-sized box
        let pos = arena.clamp_box(Vec2::new(0.0, 0.0), 40.0);
        assert!(arena.contains_box(pos, 40.0));
    }

    #[test]
    fn test_oversized_border_is_clamped() {
        let arena = Arena::square(400.0, 10_000.0);
        assert!(arena.border_width <= 100.0);
        assert!(arena.interior_max_for(60.0).x > arena.interior_min());
    }
}
