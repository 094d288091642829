//! Box Dodge - a drag-to-dodge reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arena, enemies, collisions, round state)
//! - `config`: Data-driven game tuning
//! - `store`: Key-value persistence for the best-time record
//! - `best_time`: Best survival time tracking

pub mod best_time;
pub mod config;
pub mod sim;
pub mod store;

pub use best_time::BestTime;
pub use config::GameConfig;

/// Game configuration constants (reference values; see [`GameConfig`] for
/// the data-driven equivalents)
pub mod consts {
    /// Nominal simulation tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 30;

    /// Player square edge length
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Enemy square edge length
    pub const ENEMY_SIZE: f32 = 60.0;
    /// Arena border thickness
    pub const BORDER_WIDTH: f32 = 40.0;

    /// Enemies spawned per round
    pub const ENEMY_COUNT: usize = 4;
    /// Clearance kept around the player when placing enemies
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// Per-axis spawn speed range, units per tick: [min, max)
    pub const ENEMY_SPEED_MIN: f32 = 10.0;
    pub const ENEMY_SPEED_MAX: f32 = 15.0;

    /// Placement attempts before the spawn sampler settles for the
    /// least-bad candidate
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    /// Smallest arena edge the sanitizer will accept
    pub const MIN_ARENA_EXTENT: f32 = 200.0;
}

/// Milliseconds to whole seconds as displayed to the player
#[inline]
pub fn ms_to_secs(ms: u64) -> f32 {
    ms as f32 / 1000.0
}
