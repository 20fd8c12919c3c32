//! Game state and core simulation types
//!
//! Everything one session owns lives in [`World`]: no ambient globals. All
//! persistent state is serializable so a frontend can snapshot or save a run
//! and replay it deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::obstacles;
use crate::config::Config;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle screen; simulation paused until a start input
    Intro,
    /// Active gameplay
    Playing,
    /// Run ended; the last world state stays frozen for rendering
    GameOver,
}

/// Fire-and-forget notifications for the audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player passed through a gap
    Scored,
    /// The run just ended
    GameOver,
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Hitbox extent
    pub size: Vec2,
    /// Frames of upward motion left from the last flap
    pub flap_frames: u32,
    /// Wing-animation index (0..2, cosmetic only)
    pub anim_frame: u8,
    pub alive: bool,
}

impl Player {
    /// Player at the spawn pose, as on session start and every retry
    pub fn spawn(cfg: &Config) -> Self {
        Self {
            pos: cfg.player_spawn,
            size: cfg.player_size,
            flap_frames: 0,
            anim_frame: 0,
            alive: true,
        }
    }

    /// Begin (or restart) a flap: the counter is overridden, not stacked
    pub fn flap(&mut self, frames: u32) {
        self.flap_frames = frames;
    }

    /// Advance one frame of vertical motion and clamp at the floor.
    /// Returns whether the floor clamp engaged; the state machine decides
    /// what that means under the configured [`FloorRule`](crate::FloorRule).
    pub fn integrate(&mut self, cfg: &Config) -> bool {
        if self.flap_frames > 0 {
            self.flap_frames -= 1;
            self.pos.y -= cfg.flap_lift;
        } else {
            self.pos.y += cfg.gravity;
        }

        let floor = cfg.floor_y();
        if self.pos.y >= floor {
            self.pos.y = floor;
            return true;
        }
        false
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Horizontal center-line of the hitbox (zero height); the scoring test
    /// runs this against the gate segment
    pub fn center_line(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y + self.size.y / 2.0, self.size.x, 0.0)
    }
}

/// One upper/lower obstacle pair in the fixed recycling ring. The lower
/// member's height is always derived so that
/// `upper + gap + lower == world_height`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSlot {
    /// Horizontal position shared by both members
    pub x: f32,
    /// Height of the upper member, measured down from the ceiling
    pub upper_height: f32,
    /// Scoring latch; cleared when the slot recycles
    pub scored: bool,
}

impl ObstacleSlot {
    pub fn new(x: f32, upper_height: f32) -> Self {
        Self {
            x,
            upper_height,
            scored: false,
        }
    }

    pub fn lower_height(&self, cfg: &Config) -> f32 {
        cfg.world_height - self.upper_height - cfg.obstacle_gap
    }

    pub fn upper_rect(&self, cfg: &Config) -> Rect {
        Rect::new(self.x, 0.0, cfg.obstacle_width, self.upper_height)
    }

    pub fn lower_rect(&self, cfg: &Config) -> Rect {
        let lower = self.lower_height(cfg);
        Rect::new(self.x, cfg.world_height - lower, cfg.obstacle_width, lower)
    }

    /// Fully past the left edge, ready to recycle
    pub fn off_left_edge(&self, cfg: &Config) -> bool {
        self.x <= -cfg.obstacle_width
    }
}

/// Complete session state: the render snapshot and the simulation's only
/// mutable aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Fixed tuning supplied at construction
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG stream for gap-height draws
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Gaps passed this run
    pub score: u32,
    /// Playing frames elapsed this run; frozen phases do not count
    pub ticks: u64,
    pub player: Player,
    /// Fixed-length obstacle ring; contents mutate in place, order never
    /// changes
    pub slots: Vec<ObstacleSlot>,
    /// Audio-cue queue filled during `tick`, drained by the driver
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create a session on the intro screen with all slots seeded
    pub fn new(config: Config, seed: u64) -> Self {
        let config = config.validated();
        let mut rng = Pcg32::seed_from_u64(seed);
        let slots = obstacles::seed_slots(&config, &mut rng);
        let player = Player::spawn(&config);

        Self {
            config,
            seed,
            rng,
            phase: GamePhase::Intro,
            score: 0,
            ticks: 0,
            player,
            slots,
            events: Vec::new(),
        }
    }

    /// Intro -> Playing reset: score, player pose and the obstacle ring are
    /// fully re-initialized; nothing survives from the previous run
    pub(crate) fn begin_run(&mut self) {
        self.score = 0;
        self.ticks = 0;
        self.player = Player::spawn(&self.config);
        self.slots = obstacles::seed_slots(&self.config, &mut self.rng);
        self.events.clear();
        self.phase = GamePhase::Playing;
    }

    /// Drain the audio-cue queue in emission order
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
