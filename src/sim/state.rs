//! Game state and core simulation types
//!
//! [`GameState`] is the run context: every piece of mutable game data lives
//! here and is only touched by [`super::tick`] and the methods it calls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Rect};
use super::effects::{EffectId, EffectScheduler};
use super::level::LevelManager;
use super::rng::{RandomSource, SeededRng};
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for an explicit restart
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallStatus {
    Active,
    Dead,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    pub status: BallStatus,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            status: BallStatus::Active,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BallStatus::Active
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Intact,
    Destroyed,
}

/// A brick in the level grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub column: u32,
    pub row: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_intact(&self) -> bool {
        self.status == BrickStatus::Intact
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    PaddleLong,
    BallSlow,
    ExtraBall,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::PaddleLong, ItemKind::BallSlow, ItemKind::ExtraBall];

    pub fn color(&self) -> &'static str {
        match self {
            ItemKind::PaddleLong => "#f4e842",
            ItemKind::BallSlow => "#42f4a1",
            ItemKind::ExtraBall => "#f44242",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            ItemKind::PaddleLong => 'L',
            ItemKind::BallSlow => 'S',
            ItemKind::ExtraBall => '+',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Falling,
    Consumed,
}

/// A falling power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per frame, downward
    pub fall_speed: f32,
    pub status: ItemStatus,
}

impl Item {
    #[inline]
    pub fn is_falling(&self) -> bool {
        self.status == ItemStatus::Falling
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }
}

/// The player's paddle, pinned to the bottom of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Base-width paddle centered at the field bottom
    pub fn new(tuning: &Tuning) -> Self {
        let mut paddle = Self {
            x: 0.0,
            y: tuning.field_height - tuning.paddle_height,
            width: tuning.paddle_base_width,
            height: tuning.paddle_height,
        };
        paddle.center_in(tuning.field_width);
        paddle
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_in(&mut self, field_width: f32) {
        self.x = (field_width - self.width) / 2.0;
    }

    /// Keep the paddle fully inside the field
    pub fn clamp_x(&mut self, field_width: f32) {
        self.x = self.x.clamp(0.0, (field_width - self.width).max(0.0));
    }

    /// Set width, clamped to [min, max]
    pub fn set_width(&mut self, width: f32, min: f32, max: f32) {
        self.width = width.clamp(min, max);
    }
}

/// Something that happened during a step, in the order it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { column: u32, row: u32 },
    ItemSpawned { kind: ItemKind },
    ItemCollected { kind: ItemKind },
    ItemMissed { kind: ItemKind },
    EffectExpired { id: EffectId },
    BallLost,
    LifeLost { lives_left: u32 },
    LevelCleared { level: u32 },
    /// The run ended; the driver decides whether to restart
    RunOver { final_score: u64 },
}

/// Complete run state
#[derive(Debug)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation clock in seconds (advances only while playing)
    pub clock: f64,
    /// Frames simulated this run
    pub frame: u64,
    pub paddle: Paddle,
    /// Live balls (dead ones are dropped at the end of each step)
    pub balls: Vec<Ball>,
    /// Live items (consumed ones are dropped at the end of each step)
    pub items: Vec<Item>,
    /// Brick grid and score/lives/level
    pub levels: LevelManager,
    pub effects: EffectScheduler,
    pub(crate) rng: Box<dyn RandomSource>,
    next_id: u32,
}

impl GameState {
    /// Create a new run with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(Tuning::default(), seed)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, Box::new(SeededRng::new(seed)))
    }

    /// Create a run with a caller-supplied random source
    pub fn with_rng(tuning: Tuning, rng: Box<dyn RandomSource>) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            phase: GamePhase::Playing,
            clock: 0.0,
            frame: 0,
            paddle: Paddle::new(&tuning),
            balls: Vec::new(),
            items: Vec::new(),
            levels: LevelManager::new(tuning.starting_lives),
            effects: EffectScheduler::default(),
            rng,
            next_id: 1,
            tuning,
        };
        state.init_level(1);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn score(&self) -> u64 {
        self.levels.run.score
    }

    pub fn lives(&self) -> u32 {
        self.levels.run.lives
    }

    pub fn level(&self) -> u32 {
        self.levels.run.level
    }

    pub fn active_ball_count(&self) -> usize {
        self.balls.iter().filter(|b| b.is_active()).count()
    }

    /// Add an active ball and return its ID
    pub fn spawn_ball(&mut self, pos: Vec2, vel: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.balls.push(Ball::new(id, pos, vel, self.tuning.ball_radius));
        id
    }

    /// Replace all balls with one fresh ball and re-center the paddle.
    ///
    /// Paddle width is left alone so running widen effects stay consistent.
    pub fn reset_ball_and_paddle(&mut self) {
        let speed = self.tuning.ball_speed(self.level());
        let start = Vec2::new(
            self.tuning.field_width / 2.0,
            self.tuning.field_height - crate::consts::BALL_START_OFFSET,
        );
        self.balls.clear();
        self.spawn_ball(start, Vec2::new(speed, -speed));
        self.paddle.center_in(self.tuning.field_width);
    }

    /// Start over at level 1 after a run ended
    pub fn restart(&mut self) {
        self.effects.cancel_all();
        self.levels = LevelManager::new(self.tuning.starting_lives);
        self.paddle = Paddle::new(&self.tuning);
        self.frame = 0;
        self.phase = GamePhase::Playing;
        self.init_level(1);
        log::info!("Run restarted");
    }
}
