//! Game tuning knobs
//!
//! Defaults mirror the reference build. Values coming in from a config file
//! pass through `sanitized` so a bad knob degrades to something playable
//! instead of producing NaN boxes or a tick that tunnels through the border.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Arena;

/// Tunable game parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player square edge length
    pub player_size: f32,
    /// Enemy square edge length
    pub enemy_size: f32,
    /// Enemies spawned per round
    pub enemy_count: usize,
    /// Clearance kept around the player when placing enemies
    pub spawn_margin: f32,
    /// Per-axis spawn speed range, units per tick: [min, max)
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Simulation tick interval in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            enemy_size: ENEMY_SIZE,
            enemy_count: ENEMY_COUNT,
            spawn_margin: SPAWN_MARGIN,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Clamp nonsense values back to the defaults and warn about speeds
    /// that could carry an enemy through the border in a single tick.
    pub fn sanitized(mut self, arena: &Arena) -> Self {
        let defaults = Self::default();

        if !self.player_size.is_finite() || self.player_size <= 0.0 {
            log::warn!("player_size {} invalid, using default", self.player_size);
            self.player_size = defaults.player_size;
        }
        if !self.enemy_size.is_finite() || self.enemy_size <= 0.0 {
            log::warn!("enemy_size {} invalid, using default", self.enemy_size);
            self.enemy_size = defaults.enemy_size;
        }

        // A box wider than the interior would invert the per-axis clamp range
        let interior = (arena.width.min(arena.height) - 2.0 * arena.border_width).max(1.0);
        if self.player_size > interior {
            log::warn!(
                "player_size {} does not fit the {interior} interior, clamping",
                self.player_size
            );
            self.player_size = interior;
        }
        if self.enemy_size > interior {
            log::warn!(
                "enemy_size {} does not fit the {interior} interior, clamping",
                self.enemy_size
            );
            self.enemy_size = interior;
        }
        if self.enemy_count == 0 {
            log::warn!("enemy_count 0, using default");
            self.enemy_count = defaults.enemy_count;
        }
        if !self.spawn_margin.is_finite() || self.spawn_margin < 0.0 {
            log::warn!("spawn_margin {} invalid, using default", self.spawn_margin);
            self.spawn_margin = defaults.spawn_margin;
        }

        if !self.enemy_speed_min.is_finite() || self.enemy_speed_min <= 0.0 {
            self.enemy_speed_min = defaults.enemy_speed_min;
        }
        if !self.enemy_speed_max.is_finite() || self.enemy_speed_max <= self.enemy_speed_min {
            log::warn!(
                "enemy speed range [{}, {}) inverted, using defaults",
                self.enemy_speed_min,
                self.enemy_speed_max
            );
            self.enemy_speed_min = defaults.enemy_speed_min;
            self.enemy_speed_max = defaults.enemy_speed_max;
        }

        // Discrete bounce integration: a per-tick step larger than the
        // border thickness can tunnel straight through it
        if arena.border_width > 0.0 && self.enemy_speed_max > arena.border_width {
            log::warn!(
                "enemy_speed_max {} exceeds border width {}, enemies may tunnel",
                self.enemy_speed_max,
                arena.border_width
            );
        }

        if self.tick_interval_ms == 0 {
            log::warn!("tick_interval_ms 0, using default");
            self.tick_interval_ms = defaults.tick_interval_ms;
        }

        self
    }

    /// Parse a config from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("bad config JSON ({err}), using defaults");
                Self::default()
            }
        }
    }
}
