//! Gap Glider - a side-scrolling gap-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `config`: Per-session tuning supplied at construction
//! - `input`: Raw platform event normalization
//!
//! The crate never draws or plays sound. A frontend drives [`sim::tick`] once
//! per rendered frame, reads the [`sim::World`] fields as its render
//! snapshot, and drains [`sim::World::take_events`] into its audio layer.

pub mod config;
pub mod input;
pub mod sim;

pub use config::{Config, FloorRule};

/// Game tuning defaults (mirrored by [`Config::default`])
pub mod consts {
    /// World width; obstacles respawn just past the right edge
    pub const WORLD_WIDTH: f32 = 800.0;
    /// World height; the floor is the bottom edge
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Spawn pose, restored on every retry
    pub const PLAYER_SPAWN_X: f32 = 370.0;
    pub const PLAYER_SPAWN_Y: f32 = 100.0;

    /// Downward displacement per frame while not flapping
    pub const GRAVITY: f32 = 1.0;
    /// Upward displacement per frame while a flap is active
    pub const FLAP_LIFT: f32 = 5.0;
    /// Frames a single flap stays active (~80 ms at 60 fps)
    pub const FLAP_FRAMES: u32 = 5;
    /// Horizontal shift per nudge input
    pub const NUDGE_STEP: f32 = 10.0;

    /// Obstacle pair geometry
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    /// Horizontal spacing between consecutive slots at seed time
    pub const OBSTACLE_SPACING: f32 = 250.0;
    /// Vertical gap between the upper and lower member of a pair
    pub const OBSTACLE_GAP: f32 = 180.0;
    /// Number of recycled slots in flight
    pub const OBSTACLE_COUNT: usize = 2;
    /// Range the upper member's height is drawn from on (re)spawn
    pub const UPPER_HEIGHT_MIN: f32 = 100.0;
    pub const UPPER_HEIGHT_MAX: f32 = 200.0;
    /// Leftward scroll per frame
    pub const SCROLL_SPEED: f32 = 1.0;

    /// Cosmetic wing-animation cycle length
    pub const ANIM_FRAMES: u8 = 3;
    /// Simulation frames per animation step
    pub const ANIM_RATE: u64 = 6;
}
