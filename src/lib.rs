//! Block Breaker - simulation core for a ball-and-paddle brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, effects, levels)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input capture and the frame driver live outside this crate.
//! A driver feeds [`sim::TickInput`] into [`sim::tick`] once per refresh and
//! draws from [`sim::RenderSnapshot`].

pub mod sim;
pub mod tuning;

pub use tuning::{BrickHitTest, EffectPolicy, Tuning};

/// Game configuration constants
///
/// Speeds are in pixels per frame, durations in seconds of simulation clock.
pub mod consts {
    /// Default frame step (60 Hz display refresh)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 2.0;
    pub const BALL_SPEED_PER_LEVEL: f32 = 0.2;
    /// Spawn height above the field bottom
    pub const BALL_START_OFFSET: f32 = 50.0;
    pub const MAX_ACTIVE_BALLS: usize = 5;

    /// Paddle defaults
    pub const PADDLE_BASE_WIDTH: f32 = 75.0;
    pub const PADDLE_MAX_WIDTH: f32 = 180.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_KEY_SPEED: f32 = 7.0;
    /// Horizontal velocity per pixel of offset from paddle center
    pub const PADDLE_DEFLECTION: f32 = 0.1;

    /// Brick layout
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    pub const BASE_ROWS: u32 = 3;
    pub const BASE_COLUMNS: u32 = 5;
    pub const MAX_ROWS: u32 = 8;
    pub const MAX_COLUMNS: u32 = 10;

    /// Falling items
    pub const ITEM_RADIUS: f32 = 8.0;
    pub const ITEM_FALL_SPEED: f32 = 2.0;
    pub const ITEM_DROP_CHANCE: f32 = 0.25;

    /// Timed effects
    pub const WIDEN_AMOUNT: f32 = 35.0;
    pub const WIDEN_DURATION: f32 = 10.0;
    pub const SLOW_FACTOR: f32 = 0.6;
    pub const SLOW_DURATION: f32 = 8.0;
    /// Horizontal speed range for an extra ball
    pub const EXTRA_BALL_SPREAD: f32 = 2.0;

    /// Run
    pub const STARTING_LIVES: u32 = 3;
}
