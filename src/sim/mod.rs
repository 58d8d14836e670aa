//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped, effects expire on the simulation clock
//! - Seeded (or scripted) randomness only
//! - Stable iteration order (balls and items by spawn order, bricks column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod level;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{
    Circle, Rect, circle_in_rect, circle_in_rect_band, circle_rect_overlap, circles_overlap,
};
pub use effects::{Effect, EffectId, EffectKind, EffectScheduler};
pub use level::{BrickGrid, LevelManager, LossOutcome, RunState, grid_dimensions};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use snapshot::{BallView, BrickView, ItemView, PaddleView, RenderSnapshot};
pub use state::{
    Ball, BallStatus, Brick, BrickStatus, GameEvent, GamePhase, GameState, Item, ItemKind,
    ItemStatus, Paddle,
};
pub use tick::{TickInput, tick};
