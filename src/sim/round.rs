//! Round state machine
//!
//! One `Round` owns everything a single game round mutates: the player, the
//! enemy collection, the phase, the timing, and the simulation clock. All
//! mutation goes through `&mut self` methods on one value, so drag events
//! and ticks are serialized by construction.
//!
//! Transitions:
//! - Idle -> Running on drag start
//! - Running -> GameOver on drag end or player/enemy contact
//! - GameOver -> Idle on reset (fresh player + enemy set)
//!
//! Timestamps are supplied by the caller in milliseconds; the round never
//! reads a system clock.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::clock::SimulationClock;
use super::collision::Aabb;
use super::enemy::Enemy;
use super::spawn::spawn_enemies;
use crate::config::GameConfig;
use crate::ms_to_secs;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the player to start dragging
    Idle,
    /// Clock running, enemies moving
    Running,
    /// Round ended; awaiting reset
    GameOver,
}

/// The player's square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
}

impl Player {
    #[inline]
    pub fn hitbox(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }
}

/// Report handed back when a round ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    /// Time survived this round, in seconds
    pub survived_secs: f32,
    /// Whether this round set a new best time (caller should persist)
    pub new_best: bool,
}

/// A single game round and its state machine
#[derive(Debug, Clone)]
pub struct Round {
    arena: Arena,
    config: GameConfig,
    phase: RoundPhase,
    player: Player,
    enemies: Vec<Enemy>,
    rng: Pcg32,
    /// Wall-clock timestamp of the drag start, valid while Running/GameOver
    start_ms: u64,
    /// Elapsed time since the drag start, frozen on GameOver
    elapsed_ms: u64,
    /// Best survival time seen so far, in seconds
    best_secs: f32,
    /// Present exactly while Running
    clock: Option<SimulationClock>,
}

impl Round {
    /// New round in the Idle phase: player centered, enemies spawned.
    pub fn new(arena: Arena, config: GameConfig, seed: u64, best_secs: f32) -> Self {
        let config = config.sanitized(&arena);
        let player = Player {
            pos: arena.center_for(config.player_size),
            size: config.player_size,
        };

        let mut round = Self {
            arena,
            config,
            phase: RoundPhase::Idle,
            player,
            enemies: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            start_ms: 0,
            elapsed_ms: 0,
            best_secs: best_secs.max(0.0),
            clock: None,
        };
        round.respawn();
        round
    }

    /// Start the clock. Only meaningful from Idle.
    pub fn drag_start(&mut self, now_ms: u64) {
        if self.phase != RoundPhase::Idle {
            return;
        }
        self.start_ms = now_ms;
        self.elapsed_ms = 0;
        self.clock = Some(SimulationClock::new(now_ms, self.config.tick_interval_ms));
        self.phase = RoundPhase::Running;
        log::debug!("round started at {now_ms}ms");
    }

    /// Apply a drag delta to the player, clamped to the arena interior.
    /// Synchronous with input, independent of the tick clock; ignored
    /// entirely once the round is over.
    pub fn drag_move(&mut self, dx: f32, dy: f32) {
        if self.phase == RoundPhase::GameOver {
            return;
        }
        let candidate = self.player.pos + Vec2::new(dx, dy);
        self.player.pos = self.arena.clamp_box(candidate, self.player.size);
    }

    /// End the round because the player let go. Stops the clock regardless
    /// of collision state.
    pub fn drag_end(&mut self, now_ms: u64) -> Option<RoundOutcome> {
        if self.phase != RoundPhase::Running {
            return None;
        }
        Some(self.finish(now_ms))
    }

    /// Run every simulation tick that has come due. Each tick advances the
    /// enemies and checks them against the player; contact ends the round at
    /// that tick's scheduled timestamp. No-op outside Running.
    pub fn pump(&mut self, now_ms: u64) -> Option<RoundOutcome> {
        while self.phase == RoundPhase::Running {
            let due = self.clock.as_mut()?.take_due(now_ms)?;
            self.elapsed_ms = due.saturating_sub(self.start_ms);

            for enemy in &mut self.enemies {
                enemy.advance(&self.arena);
            }

            let player_box = self.player.hitbox();
            let hit = self
                .enemies
                .iter()
                .any(|enemy| enemy.hitbox().overlaps(&player_box));
            if hit {
                return Some(self.finish(due));
            }
        }
        None
    }

    /// Back to Idle with a fresh player position and enemy set.
    pub fn reset(&mut self) {
        self.phase = RoundPhase::Idle;
        self.elapsed_ms = 0;
        self.start_ms = 0;
        self.clock = None;
        self.player.pos = self.arena.center_for(self.player.size);
        self.respawn();
        log::debug!("round reset, {} enemies spawned", self.enemies.len());
    }

    /// GameOver entry point shared by drag-end and collision: freeze the
    /// elapsed time, drop the clock, fold the result into the best time.
    fn finish(&mut self, end_ms: u64) -> RoundOutcome {
        self.elapsed_ms = end_ms.saturating_sub(self.start_ms);
        self.phase = RoundPhase::GameOver;
        self.clock = None;

        let survived_secs = ms_to_secs(self.elapsed_ms);
        let new_best = survived_secs > self.best_secs;
        if new_best {
            self.best_secs = survived_secs;
            log::info!("new best time: {survived_secs:.2}s");
        }
        RoundOutcome {
            survived_secs,
            new_best,
        }
    }

    fn respawn(&mut self) {
        self.enemies = spawn_enemies(
            &mut self.rng,
            &self.arena,
            &self.config,
            &self.player.hitbox(),
        );
    }

    // --- read-only surface for the renderer / notification layer ---

    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    #[inline]
    pub fn player_box(&self) -> Aabb {
        self.player.hitbox()
    }

    #[inline]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Elapsed time of the current (or just-ended) round, in seconds
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        ms_to_secs(self.elapsed_ms)
    }

    /// Best survival time seen so far, in seconds
    #[inline]
    pub fn best_secs(&self) -> f32 {
        self.best_secs
    }
}
