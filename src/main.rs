//! Headless demo driver
//!
//! Exercises the simulation without a window: a scripted autopilot stands in
//! for the player, events are logged as the audio cues they would trigger,
//! and the final score is printed when the run ends.
//!
//! Usage: `gap-glider [seed] [max-frames] [config.json]`

use std::env;
use std::error::Error;
use std::fs;

use gap_glider::Config;
use gap_glider::input::{InputCollector, KEY_SPACE, RawEvent};
use gap_glider::sim::{GameEvent, GamePhase, World, tick};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(7);
    let max_frames: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(36_000);
    let config = match args.next() {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    log::info!("headless run: seed {seed}, up to {max_frames} frames");

    let mut world = World::new(config, seed);
    let mut inputs = InputCollector::new();

    // Press space once to leave the intro screen
    inputs.push(RawEvent::KeyDown(KEY_SPACE));

    for _ in 0..max_frames {
        if world.phase == GamePhase::Playing && wants_flap(&world) {
            inputs.push(RawEvent::KeyDown(KEY_SPACE));
        }

        let frame = inputs.drain();
        tick(&mut world, &frame);

        for event in world.take_events() {
            match event {
                GameEvent::Scored => log::info!("scored, total {}", world.score),
                GameEvent::GameOver => {
                    log::info!("game over after {} frames", world.ticks);
                }
            }
        }

        if world.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "final score: {} over {} playing frames",
        world.score, world.ticks
    );
    Ok(())
}

/// Autopilot heuristic: flap whenever the player's center has sunk below the
/// center of the nearest gap still ahead, and no flap is in flight
fn wants_flap(world: &World) -> bool {
    let cfg = &world.config;
    let player = &world.player;
    let center_y = player.pos.y + player.size.y / 2.0;

    let target = world
        .slots
        .iter()
        .filter(|s| s.x + cfg.obstacle_width >= player.pos.x)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|s| s.upper_height + cfg.obstacle_gap / 2.0)
        .unwrap_or(cfg.world_height / 2.0);

    center_y > target && player.flap_frames == 0
}
