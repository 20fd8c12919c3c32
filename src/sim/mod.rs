//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per rendered frame
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//!
//! The frame driver calls [`tick`] once per frame; everything else is state
//! the renderer may read.

pub mod collision;
pub mod obstacles;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use state::{GameEvent, GamePhase, ObstacleSlot, Player, World};
pub use tick::{TickInput, tick};
