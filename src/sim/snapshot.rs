//! Read-only view of a frame for the external renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub column: u32,
    pub row: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub intact: bool,
    /// Degrees
    pub hue: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: String,
    pub symbol: char,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub field: Vec2,
    pub balls: Vec<BallView>,
    pub bricks: Vec<BrickView>,
    pub items: Vec<ItemView>,
    pub paddle: PaddleView,
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let grid = &state.levels.bricks;
        Self {
            frame: state.frame,
            phase: state.phase,
            field: Vec2::new(state.tuning.field_width, state.tuning.field_height),
            balls: state
                .balls
                .iter()
                .filter(|b| b.is_active())
                .map(|b| BallView {
                    pos: b.pos,
                    radius: b.radius,
                    active: true,
                })
                .collect(),
            bricks: grid
                .iter()
                .map(|b| BrickView {
                    column: b.column,
                    row: b.row,
                    pos: b.pos,
                    size: b.size,
                    intact: b.is_intact(),
                    hue: grid.hue(b.column, b.row),
                })
                .collect(),
            items: state
                .items
                .iter()
                .filter(|i| i.is_falling())
                .map(|i| ItemView {
                    pos: i.pos,
                    radius: i.radius,
                    color: i.kind.color().to_string(),
                    symbol: i.kind.symbol(),
                    active: true,
                })
                .collect(),
            paddle: PaddleView {
                pos: Vec2::new(state.paddle.x, state.paddle.y),
                width: state.paddle.width,
                height: state.paddle.height,
            },
            score: state.score(),
            lives: state.lives(),
            level: state.level(),
        }
    }

    pub fn intact_bricks(&self) -> impl Iterator<Item = &BrickView> {
        self.bricks.iter().filter(|b| b.intact)
    }
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
