//! Data-driven game balance
//!
//! Balance values (speeds, sizes, durations, odds) come from [`Tuning`], so a
//! driver can load a JSON file to change difficulty without a rebuild. The
//! brick layout stays fixed in [`crate::consts`]; the field never shrinks
//! below it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::level::largest_grid_extent;

/// How timed effects schedule and apply their reverts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EffectPolicy {
    /// A revert only ever undoes what its own pickup applied
    #[default]
    Tracked,
    /// Blind increment/decrement as the arcade original did it
    Legacy,
}

impl EffectPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectPolicy::Tracked => "Tracked",
            EffectPolicy::Legacy => "Legacy",
        }
    }
}

/// Which test decides that a ball hit a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BrickHitTest {
    /// Ball center strictly inside the brick (original feel)
    #[default]
    CenterInside,
    /// Exact circle/rectangle overlap (harder to miss, hits earlier)
    Overlap,
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_base_speed: f32,
    pub ball_speed_per_level: f32,
    pub max_active_balls: usize,

    // === Paddle ===
    pub paddle_base_width: f32,
    pub paddle_max_width: f32,
    pub paddle_height: f32,
    pub paddle_key_speed: f32,
    pub paddle_deflection: f32,

    // === Items ===
    pub item_radius: f32,
    pub item_fall_speed: f32,
    /// Probability (0-1) that a destroyed brick drops an item
    pub item_drop_chance: f32,

    // === Effects ===
    pub widen_amount: f32,
    /// Seconds
    pub widen_duration: f32,
    pub slow_factor: f32,
    /// Seconds
    pub slow_duration: f32,
    pub effect_policy: EffectPolicy,

    // === Collision ===
    pub brick_hit_test: BrickHitTest,

    // === Run ===
    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,
            ball_speed_per_level: BALL_SPEED_PER_LEVEL,
            max_active_balls: MAX_ACTIVE_BALLS,

            paddle_base_width: PADDLE_BASE_WIDTH,
            paddle_max_width: PADDLE_MAX_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_key_speed: PADDLE_KEY_SPEED,
            paddle_deflection: PADDLE_DEFLECTION,

            item_radius: ITEM_RADIUS,
            item_fall_speed: ITEM_FALL_SPEED,
            item_drop_chance: ITEM_DROP_CHANCE,

            widen_amount: WIDEN_AMOUNT,
            widen_duration: WIDEN_DURATION,
            slow_factor: SLOW_FACTOR,
            slow_duration: SLOW_DURATION,
            effect_policy: EffectPolicy::Tracked,

            brick_hit_test: BrickHitTest::CenterInside,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Original arcade behavior, including the naive effect reverts
    pub fn legacy() -> Self {
        Self {
            effect_policy: EffectPolicy::Legacy,
            ..Self::default()
        }
    }

    /// Ball launch speed for a level
    pub fn ball_speed(&self, level: u32) -> f32 {
        self.ball_base_speed + level as f32 * self.ball_speed_per_level
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json).context("invalid tuning JSON")?;
        Ok(tuning.sanitized())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading {}", path.display()))
    }

    /// Load a file, falling back to defaults and returning the reason
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(path) {
            Ok(tuning) => (tuning, None),
            Err(e) => {
                log::warn!("Using default tuning: {e:#}");
                (Self::default(), Some(format!("{e:#}")))
            }
        }
    }

    /// Clamp values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.field_width > 0.0) {
            self.field_width = defaults.field_width;
        }
        if !(self.field_height > 0.0) {
            self.field_height = defaults.field_height;
        }
        if !(self.ball_radius > 0.0) {
            self.ball_radius = defaults.ball_radius;
        }
        // Every brick of the largest grid must be reachable, with room for
        // the respawned ball below it
        let grid = largest_grid_extent();
        self.field_width = self.field_width.max(grid.x + BRICK_OFFSET_LEFT);
        self.field_height = self
            .field_height
            .max(grid.y + BALL_START_OFFSET + 2.0 * self.ball_radius);
        if !(self.paddle_base_width > 0.0) {
            self.paddle_base_width = defaults.paddle_base_width;
        }
        self.paddle_base_width = self.paddle_base_width.min(self.field_width);
        self.paddle_max_width = self
            .paddle_max_width
            .clamp(self.paddle_base_width, self.field_width);
        self.widen_amount = self.widen_amount.max(0.0);
        self.item_drop_chance = self.item_drop_chance.clamp(0.0, 1.0);
        if !(self.slow_factor > 0.0 && self.slow_factor <= 1.0) {
            self.slow_factor = defaults.slow_factor;
        }
        if !(self.widen_duration > 0.0) {
            self.widen_duration = defaults.widen_duration;
        }
        if !(self.slow_duration > 0.0) {
            self.slow_duration = defaults.slow_duration;
        }
        self.max_active_balls = self.max_active_balls.max(1);
        self.starting_lives = self.starting_lives.max(1);
        self
    }
}
