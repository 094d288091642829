//! Enemy placement for a fresh round
//!
//! Positions are rejection-sampled away from an exclusion zone around the
//! player's starting box. The retry loop is bounded: a cramped arena gets
//! the least-bad candidate (farthest from the player) instead of spinning
//! forever on an unsatisfiable constraint.

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use super::collision::Aabb;
use super::enemy::Enemy;
use crate::config::GameConfig;
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Generate the round's enemy set.
///
/// Each enemy gets a uniform-random position in the arena interior (inset so
/// its footprint fits) and a per-axis speed drawn from
/// `[enemy_speed_min, enemy_speed_max)`, both components positive at spawn.
pub fn spawn_enemies<R: Rng>(
    rng: &mut R,
    arena: &Arena,
    config: &GameConfig,
    player_box: &Aabb,
) -> Vec<Enemy> {
    let exclusion = player_box.inflate(config.spawn_margin);

    (0..config.enemy_count)
        .map(|_| {
            let pos = sample_position(rng, arena, config.enemy_size, &exclusion);
            let vel = Vec2::new(
                rng.random_range(config.enemy_speed_min..config.enemy_speed_max),
                rng.random_range(config.enemy_speed_min..config.enemy_speed_max),
            );
            Enemy::new(pos, vel, config.enemy_size)
        })
        .collect()
}

/// Bounded rejection sampling against the exclusion zone.
fn sample_position<R: Rng>(
    rng: &mut R,
    arena: &Arena,
    enemy_size: f32,
    exclusion: &Aabb,
) -> Vec2 {
    let min = arena.interior_min();
    let max = arena.interior_max_for(enemy_size);

    let mut best: Option<(f32, Vec2)> = None;
    for attempt in 0..MAX_SPAWN_ATTEMPTS {
        let pos = Vec2::new(
            sample_coord(rng, min, max.x),
            sample_coord(rng, min, max.y),
        );
        let footprint = Aabb::square(pos, enemy_size);

        if !footprint.overlaps(exclusion) {
            return pos;
        }

        let dist = footprint.center().distance_squared(exclusion.center());
        if best.is_none_or(|(d, _)| dist > d) {
            best = Some((dist, pos));
        }

        if attempt == MAX_SPAWN_ATTEMPTS - 1 {
            log::warn!(
                "no clear spawn found in {MAX_SPAWN_ATTEMPTS} attempts, \
                 accepting least-bad candidate"
            );
        }
    }

    // Unreachable only if the loop above never ran
    best.map(|(_, pos)| pos).unwrap_or(Vec2::splat(min))
}

/// Uniform coordinate in `[min, max)`, degrading to `min` when the interior
/// has no room on that axis.
#[inline]
fn sample_coord<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
