//! Obstacle ring: seeding, scroll and recycle
//!
//! Slots are never created or destroyed after seeding. A slot that scrolls
//! fully off the left edge is reset in place - position back past the right
//! edge, a fresh gap height - so the ring produces an endless stream of
//! obstacles without allocation.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::ObstacleSlot;
use crate::config::Config;

/// x where a fresh or recycled obstacle enters: fully past the right edge
#[inline]
fn entry_x(cfg: &Config) -> f32 {
    cfg.world_width + cfg.obstacle_width
}

/// Draw an upper-member height in whole world units. The configured range is
/// clamped so the derived lower member can never go negative, whatever tuning
/// was supplied.
fn draw_upper_height(cfg: &Config, rng: &mut Pcg32) -> f32 {
    let cap = (cfg.world_height - cfg.obstacle_gap).max(0.0);
    let lo = cfg.upper_height_min.clamp(0.0, cap);
    let hi = cfg.upper_height_max.clamp(lo, cap);
    if hi <= lo {
        return lo;
    }
    rng.random_range(lo..=hi).round().clamp(lo, hi)
}

/// Populate the whole ring at staggered positions so obstacles arrive at a
/// constant cadence once scrolling starts
pub fn seed_slots(cfg: &Config, rng: &mut Pcg32) -> Vec<ObstacleSlot> {
    (0..cfg.obstacle_count)
        .map(|i| {
            let x = entry_x(cfg) + i as f32 * (cfg.obstacle_width + cfg.obstacle_spacing);
            ObstacleSlot::new(x, draw_upper_height(cfg, rng))
        })
        .collect()
}

/// Scroll every slot left by the configured speed and recycle the ones that
/// have fully left the world. A slot recycles at most once per call, slots
/// never reorder, and recycling re-arms the slot's scoring latch.
pub fn advance(slots: &mut [ObstacleSlot], cfg: &Config, rng: &mut Pcg32) {
    for slot in slots.iter_mut() {
        slot.x -= cfg.scroll_speed;

        if slot.off_left_edge(cfg) {
            slot.x = entry_x(cfg);
            slot.upper_height = draw_upper_height(cfg, rng);
            slot.scored = false;
            debug_assert!(slot.upper_height >= 0.0 && slot.lower_height(cfg) >= 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0xfeed)
    }

    #[test]
    fn test_seeding_is_staggered() {
        let cfg = Config::default();
        let slots = seed_slots(&cfg, &mut rng());

        assert_eq!(slots.len(), cfg.obstacle_count);
        let pitch = cfg.obstacle_width + cfg.obstacle_spacing;
        for pair in slots.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, pitch);
        }
    }

    #[test]
    fn test_slot_recycles_at_left_edge() {
        // Slot at x=5 with width 52 advancing at speed 1 crosses the -52
        // threshold on frame 57 and must re-enter on the right, not sit
        // off-screen or stay put.
        let cfg = Config {
            obstacle_width: 52.0,
            scroll_speed: 1.0,
            ..Default::default()
        };
        let mut rng = rng();
        let mut slots = vec![ObstacleSlot::new(5.0, 150.0)];
        slots[0].scored = true;

        for _ in 0..56 {
            advance(&mut slots, &cfg, &mut rng);
        }
        // Still scrolling out: -51 is not yet fully off-screen
        assert_eq!(slots[0].x, 5.0 - 56.0);
        assert!(slots[0].scored);

        advance(&mut slots, &cfg, &mut rng);
        assert_eq!(slots[0].x, cfg.world_width + cfg.obstacle_width);
        assert!(!slots[0].scored, "recycle must re-arm the scoring latch");
    }

    #[test]
    fn test_recycle_preserves_order_and_count() {
        let cfg = Config::default();
        let mut rng = rng();
        let mut slots = seed_slots(&cfg, &mut rng);
        slots[0].x = -cfg.obstacle_width + 0.5;

        advance(&mut slots, &cfg, &mut rng);

        assert_eq!(slots.len(), cfg.obstacle_count);
        // Slot 0 recycled to the entry point; slot 1 just kept scrolling
        assert_eq!(slots[0].x, cfg.world_width + cfg.obstacle_width);
        assert!(slots[1].x > cfg.world_width);
    }

    #[test]
    fn test_heights_stay_in_range_across_recycles() {
        let cfg = Config::default();
        let mut rng = rng();
        let mut slots = seed_slots(&cfg, &mut rng);

        for _ in 0..10_000 {
            advance(&mut slots, &cfg, &mut rng);
            for slot in &slots {
                assert!(slot.upper_height >= cfg.upper_height_min);
                assert!(slot.upper_height <= cfg.upper_height_max);
                assert_eq!(
                    slot.upper_height + cfg.obstacle_gap + slot.lower_height(&cfg),
                    cfg.world_height
                );
            }
        }
    }

    #[test]
    fn test_degenerate_range_is_clamped() {
        // Range wider than the world: draws must still leave the lower
        // member non-negative.
        let cfg = Config {
            upper_height_min: 0.0,
            upper_height_max: 10_000.0,
            ..Default::default()
        };
        let mut rng = rng();
        for _ in 0..1_000 {
            let h = draw_upper_height(&cfg, &mut rng);
            assert!(h + cfg.obstacle_gap <= cfg.world_height);
        }
    }
}
