//! Per-session game configuration
//!
//! Everything the simulation treats as a fixed constant: world dimensions,
//! player geometry, physics tuning, obstacle layout, and the two behavior
//! policies the reference variants disagree on. Supplied once at
//! construction and owned by the `World` for the rest of the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens when the player settles onto the floor clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FloorRule {
    /// Touching the floor ends the run (majority behavior)
    #[default]
    Lethal,
    /// The clamp is cosmetic; only obstacle collisions kill
    Cosmetic,
}

impl FloorRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloorRule::Lethal => "Lethal",
            FloorRule::Cosmetic => "Cosmetic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lethal" => Some(FloorRule::Lethal),
            "cosmetic" => Some(FloorRule::Cosmetic),
            _ => None,
        }
    }
}

/// Fixed tuning for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Player ===
    /// Hitbox extent (width, height)
    pub player_size: Vec2,
    /// Pose restored on every retry
    pub player_spawn: Vec2,

    // === Physics ===
    /// Downward displacement per frame while not flapping
    pub gravity: f32,
    /// Upward displacement per frame while a flap is active
    pub flap_lift: f32,
    /// Frames a single flap stays active
    pub flap_frames: u32,
    /// Horizontal shift per nudge input
    pub nudge_step: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Extra spacing between consecutive slots at seed time
    pub obstacle_spacing: f32,
    /// Vertical gap between the upper and lower member
    pub obstacle_gap: f32,
    /// Number of recycled slots in flight
    pub obstacle_count: usize,
    /// Range the upper member's height is drawn from
    pub upper_height_min: f32,
    pub upper_height_max: f32,
    /// Leftward scroll per frame
    pub scroll_speed: f32,

    // === Policies ===
    /// Floor-contact death policy
    pub floor_rule: FloorRule,
    /// Latch scoring per slot until recycle. Off reproduces the reference's
    /// per-frame re-test, which can double-count when the crossing zone is
    /// wider than per-frame scroll travel.
    pub latched_scoring: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_spawn: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),

            gravity: GRAVITY,
            flap_lift: FLAP_LIFT,
            flap_frames: FLAP_FRAMES,
            nudge_step: NUDGE_STEP,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_count: OBSTACLE_COUNT,
            upper_height_min: UPPER_HEIGHT_MIN,
            upper_height_max: UPPER_HEIGHT_MAX,
            scroll_speed: SCROLL_SPEED,

            floor_rule: FloorRule::default(),
            latched_scoring: true,
        }
    }
}

impl Config {
    /// Clamp the tunable ranges so every derived quantity stays meaningful:
    /// the upper-height range must leave room for the gap and a non-negative
    /// lower member. Out-of-range values are pulled in rather than rejected.
    pub fn validated(mut self) -> Self {
        self.obstacle_gap = self.obstacle_gap.clamp(0.0, self.world_height);
        let upper_cap = self.world_height - self.obstacle_gap;
        self.upper_height_min = self.upper_height_min.clamp(0.0, upper_cap);
        self.upper_height_max = self.upper_height_max.clamp(self.upper_height_min, upper_cap);
        self.obstacle_count = self.obstacle_count.max(1);
        self
    }

    /// Parse a config from JSON, then clamp it with [`Config::validated`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Floor line: highest y the player's top edge can reach at the bottom
    pub fn floor_y(&self) -> f32 {
        self.world_height - self.player_size.y
    }
}
