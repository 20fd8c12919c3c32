//! Per-frame simulation step
//!
//! One [`tick`] call advances the world by exactly one frame. Intro and
//! GameOver are frozen phases: the world mutates only through their single
//! transition each, so the renderer can keep drawing the last snapshot.

use super::collision::overlaps;
use super::obstacles;
use super::score;
use super::state::{GameEvent, GamePhase, World};
use crate::config::FloorRule;
use crate::consts::{ANIM_FRAMES, ANIM_RATE};

/// Input commands for a single frame, already normalized and folded by the
/// input layer
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap requested (space / primary pointer); honored while Playing
    pub flap: bool,
    /// Start requested (same inputs); honored only on the intro screen
    pub start: bool,
    /// Restart requested ("r"); honored only on the game-over screen
    pub restart: bool,
    /// Rightward nudges requested this frame
    pub nudge: u32,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) {
    match world.phase {
        GamePhase::Intro => {
            if input.start {
                world.begin_run();
                // The starting press doubles as the first flap
                world.player.flap(world.config.flap_frames);
                log::debug!("run started (seed {})", world.seed);
            }
        }
        GamePhase::Playing => step(world, input),
        GamePhase::GameOver => {
            if input.restart {
                world.phase = GamePhase::Intro;
                log::debug!("back to intro after {} points", world.score);
            }
        }
    }
}

/// One Playing frame: physics, obstacle scroll, collision, scoring, then the
/// resulting transition
fn step(world: &mut World, input: &TickInput) {
    world.ticks += 1;

    if input.flap {
        world.player.flap(world.config.flap_frames);
    }
    if input.nudge > 0 {
        let max_x = world.config.world_width - world.config.player_size.x;
        let shift = input.nudge as f32 * world.config.nudge_step;
        world.player.pos.x = (world.player.pos.x + shift).min(max_x);
    }

    let on_floor = world.player.integrate(&world.config);
    if world.ticks.is_multiple_of(ANIM_RATE) {
        world.player.anim_frame = (world.player.anim_frame + 1) % ANIM_FRAMES;
    }

    obstacles::advance(&mut world.slots, &world.config, &mut world.rng);

    // Collision against both members of every slot
    let hitbox = world.player.hitbox();
    let mut fatal = on_floor && world.config.floor_rule == FloorRule::Lethal;
    for slot in &world.slots {
        if overlaps(hitbox, slot.upper_rect(&world.config))
            || overlaps(hitbox, slot.lower_rect(&world.config))
        {
            fatal = true;
            break;
        }
    }

    // Scoring gates are evaluated after collision, before the transition
    for slot in world.slots.iter_mut() {
        if score::check_score(&world.player, slot, &world.config) {
            world.score += 1;
            world.events.push(GameEvent::Scored);
            log::debug!("scored, total {}", world.score);
        }
    }

    if fatal {
        world.phase = GamePhase::GameOver;
        world.player.alive = false;
        world.events.push(GameEvent::GameOver);
        log::info!(
            "game over after {} frames with score {}",
            world.ticks,
            world.score
        );
    }
}
