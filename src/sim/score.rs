//! Pass-through scoring
//!
//! Each slot carries a zero-width vertical gate at its horizontal midpoint,
//! spanning exactly the gap. Crossing it with the player's center-line is
//! what counts as passing the obstacle.

use super::collision::{Rect, overlaps};
use super::state::{ObstacleSlot, Player};
use crate::config::Config;

/// The gate segment for a slot: zero width, centered on the pair, spanning
/// the gap between the two members
pub fn gate(slot: &ObstacleSlot, cfg: &Config) -> Rect {
    Rect::new(
        slot.x + cfg.obstacle_width / 2.0,
        slot.upper_height,
        0.0,
        cfg.obstacle_gap,
    )
}

/// Pure geometric crossing test: player center-line vs gate segment
pub fn crossing_gate(player: &Player, slot: &ObstacleSlot, cfg: &Config) -> bool {
    overlaps(player.center_line(), gate(slot, cfg))
}

/// Scoring trigger for one slot. With `latched_scoring` (default) a slot
/// fires at most once until it recycles; unlatched keeps the reference's
/// per-frame re-test, which fires on every frame the gate stays inside the
/// player's span.
pub fn check_score(player: &Player, slot: &mut ObstacleSlot, cfg: &Config) -> bool {
    if cfg.latched_scoring && slot.scored {
        return false;
    }
    if !crossing_gate(player, slot, cfg) {
        return false;
    }
    slot.scored = true;
    true
}
