//! Level progression, brick grid and the lives/score state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Brick, BrickStatus, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Grid size for a level as (columns, rows); grows by one each way per level
pub fn grid_dimensions(level: u32) -> (u32, u32) {
    let step = level.saturating_sub(1);
    let columns = (BASE_COLUMNS + step).min(MAX_COLUMNS);
    let rows = (BASE_ROWS + step).min(MAX_ROWS);
    (columns, rows)
}

/// Top-left pixel position of a grid cell
pub fn brick_position(column: u32, row: u32) -> Vec2 {
    Vec2::new(
        column as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
        row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
    )
}

/// Bottom-right corner of the biggest grid any level builds
pub fn largest_grid_extent() -> Vec2 {
    brick_position(MAX_COLUMNS - 1, MAX_ROWS - 1) + Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)
}

/// Bricks stored column-major, indexed by (column, row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub columns: u32,
    pub rows: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Fully intact grid
    pub fn new(columns: u32, rows: u32) -> Self {
        let mut bricks = Vec::with_capacity((columns * rows) as usize);
        for column in 0..columns {
            for row in 0..rows {
                bricks.push(Brick {
                    column,
                    row,
                    pos: brick_position(column, row),
                    size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
                    status: BrickStatus::Intact,
                });
            }
        }
        Self {
            columns,
            rows,
            bricks,
        }
    }

    pub fn for_level(level: u32) -> Self {
        let (columns, rows) = grid_dimensions(level);
        Self::new(columns, rows)
    }

    fn index(&self, column: u32, row: u32) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| (column * self.rows + row) as usize)
    }

    pub fn get(&self, column: u32, row: u32) -> Option<&Brick> {
        self.index(column, row).map(|i| &self.bricks[i])
    }

    pub fn get_mut(&mut self, column: u32, row: u32) -> Option<&mut Brick> {
        self.index(column, row).map(|i| &mut self.bricks[i])
    }

    /// Column-major iteration (the order bricks are tested in)
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn intact_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_intact()).count()
    }

    /// Display hue in degrees for a brick, as the arcade palette spreads it
    pub fn hue(&self, column: u32, row: u32) -> f32 {
        column as f32 * 360.0 / self.columns.max(1) as f32 + row as f32 * 20.0
    }
}

/// Score, lives and level number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

/// What losing the last ball led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossOutcome {
    Respawn { lives_left: u32 },
    RunOver { final_score: u64 },
}

/// Owns the brick grid and the run counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelManager {
    pub bricks: BrickGrid,
    pub run: RunState,
}

impl LevelManager {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            bricks: BrickGrid::for_level(1),
            run: RunState {
                score: 0,
                lives: starting_lives,
                level: 1,
            },
        }
    }

    /// Rebuild an intact grid for `level`
    pub fn init(&mut self, level: u32) {
        self.run.level = level.max(1);
        self.bricks = BrickGrid::for_level(self.run.level);
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.intact_count() == 0
    }

    /// Next level plus a bonus life; returns the new level
    pub fn advance(&mut self) -> u32 {
        self.run.lives += 1;
        self.init(self.run.level + 1);
        self.run.level
    }

    /// The only path that takes a life; never goes below zero
    pub fn lose_life(&mut self) -> LossOutcome {
        self.run.lives = self.run.lives.saturating_sub(1);
        if self.run.lives == 0 {
            LossOutcome::RunOver {
                final_score: self.run.score,
            }
        } else {
            LossOutcome::Respawn {
                lives_left: self.run.lives,
            }
        }
    }
}

impl GameState {
    /// Fresh grid for `level`, items cleared, ball and paddle back to start.
    ///
    /// Score and running paddle-width effects carry over.
    pub fn init_level(&mut self, level: u32) {
        self.levels.init(level);
        self.items.clear();
        self.reset_ball_and_paddle();
        let (columns, rows) = grid_dimensions(self.level());
        log::info!(
            "Level {}: {}x{} bricks, ball speed {:.1}",
            self.level(),
            columns,
            rows,
            self.tuning.ball_speed(self.level())
        );
    }

    /// Level-clear first, then ball loss
    pub(crate) fn resolve_level_transitions(&mut self, events: &mut Vec<GameEvent>) {
        if self.levels.is_cleared() {
            let level = self.levels.advance();
            log::info!("Level cleared! Starting level {} with {} lives", level, self.lives());
            events.push(GameEvent::LevelCleared { level });
            self.init_level(level);
            return;
        }

        if self.active_ball_count() > 0 {
            return;
        }

        match self.levels.lose_life() {
            LossOutcome::Respawn { lives_left } => {
                log::info!("Life lost, {} remaining", lives_left);
                events.push(GameEvent::LifeLost { lives_left });
                self.reset_ball_and_paddle();
            }
            LossOutcome::RunOver { final_score } => {
                let cancelled = self.effects.cancel_all();
                log::info!(
                    "Game over at level {} - final score {} ({} pending effects cancelled)",
                    self.level(),
                    final_score,
                    cancelled
                );
                events.push(GameEvent::LifeLost { lives_left: 0 });
                events.push(GameEvent::RunOver { final_score });
                self.phase = GamePhase::GameOver;
            }
        }
    }
}
