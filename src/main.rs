//! Box Dodge entry point
//!
//! Headless native demo: one autopiloted round in a 400x400 arena. The
//! "player" drifts away from the nearest enemy each frame, which is usually
//! good for a few seconds of survival. Rendering is out of scope; the round
//! result and best time go to the log.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use box_dodge::consts::BORDER_WIDTH;
use box_dodge::sim::{Arena, Round, RoundPhase};
use box_dodge::store::JsonFileStore;
use box_dodge::{BestTime, GameConfig};

/// Hard cap so the demo terminates even if the autopilot never gets caught
const MAX_ROUND: Duration = Duration::from_secs(30);

fn main() {
    env_logger::init();

    let mut store = JsonFileStore::open("box_dodge_save.json");
    let mut best = BestTime::load(&store);
    log::info!("best time on record: {:.2}s", best.seconds());

    let config = GameConfig::default();
    let arena = Arena::square(400.0, BORDER_WIDTH);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut round = Round::new(arena, config, seed, best.seconds());

    let origin = Instant::now();
    let now_ms = move || origin.elapsed().as_millis() as u64;

    round.drag_start(now_ms());
    log::info!("round started (seed {seed})");

    let outcome = loop {
        // Drift away from the nearest enemy, like a cautious player would
        let player = round.player_box();
        let away: Vec2 = round
            .enemies()
            .iter()
            .min_by(|a, b| {
                let da = a.hitbox().center().distance_squared(player.center());
                let db = b.hitbox().center().distance_squared(player.center());
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|enemy| (player.center() - enemy.hitbox().center()).normalize_or_zero() * 6.0)
            .unwrap_or(Vec2::ZERO);
        round.drag_move(away.x, away.y);

        if let Some(outcome) = round.pump(now_ms()) {
            break outcome;
        }
        if round.phase() == RoundPhase::Running && origin.elapsed() >= MAX_ROUND {
            if let Some(outcome) = round.drag_end(now_ms()) {
                break outcome;
            }
        }
        std::thread::sleep(Duration::from_millis(5));
    };

    println!("survived for {:.2} seconds", outcome.survived_secs);
    if outcome.new_best {
        best.record(outcome.survived_secs);
        best.save(&mut store);
        println!("new best time: {:.2}s", best.seconds());
    } else {
        println!("best time: {:.2}s", best.seconds());
    }
}
