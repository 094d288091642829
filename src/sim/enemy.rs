//! Enemy entities and bounce integration
//!
//! Enemies are squares that drift in a straight line and reflect off the
//! arena border. Integration is discrete: one position step per tick, clamp
//! to the border on contact, flip the offending axis's velocity sign. Axes
//! are handled independently, so a corner hit flips both in the same tick.
//! There is no sub-tick time-of-impact correction; configuration keeps
//! per-tick speed below the border thickness so enemies cannot tunnel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::Aabb;

/// A bouncing enemy square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the square hitbox
    pub size: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Hitbox at the current position
    #[inline]
    pub fn hitbox(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    /// Advance one tick inside the arena, reflecting off the border.
    ///
    /// An enemy that somehow starts inside the border band is snapped back
    /// onto it (with the same velocity flip), so a single `advance` always
    /// leaves the hitbox within bounds.
    pub fn advance(&mut self, arena: &Arena) {
        let min = arena.interior_min();
        let max = arena.interior_max_for(self.size);

        let (x, vx) = bounce_axis(self.pos.x, self.vel.x, min, max.x);
        let (y, vy) = bounce_axis(self.pos.y, self.vel.y, min, max.y);
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::new(vx, vy);
    }
}

/// One axis of the bounce step: clamp to the nearest bound and invert the
/// velocity sign on contact, otherwise take the free-flight candidate.
#[inline]
fn bounce_axis(current: f32, vel: f32, min: f32, max: f32) -> (f32, f32) {
    let candidate = current + vel;
    if candidate < min || current < min {
        (min, -vel)
    } else if candidate > max || current > max {
        (max, -vel)
    } else {
        (candidate, vel)
    }
}
