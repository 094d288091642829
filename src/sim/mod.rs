//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick interval only
//! - Seeded RNG only
//! - Caller-supplied timestamps (no system clock reads)
//! - No rendering or platform dependencies

pub mod arena;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod round;
pub mod spawn;

pub use arena::Arena;
pub use clock::SimulationClock;
pub use collision::Aabb;
pub use enemy::Enemy;
pub use round::{Player, Round, RoundOutcome, RoundPhase};
pub use spawn::spawn_enemies;
