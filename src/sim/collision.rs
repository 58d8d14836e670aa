//! Collision primitives for circles against axis-aligned rectangles
//!
//! Balls and items are circles, bricks and the paddle are rectangles. The
//! brick test is deliberately loose: it only asks whether the ball's center is
//! inside the brick, which is how the arcade game has always felt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle in field space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Closed horizontal span test
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}

/// Ball-brick test: circle center strictly inside the rectangle.
///
/// The radius is ignored on purpose. A ball can register a hit before its
/// edge visually touches the brick, and an edge-only graze never counts.
#[inline]
pub fn circle_in_rect(circle: &Circle, rect: &Rect) -> bool {
    let c = circle.center;
    c.x > rect.left() && c.x < rect.right() && c.y > rect.top() && c.y < rect.bottom()
}

/// Paddle/item band test: center within the rect's horizontal span and the
/// circle's bottom edge below the rect's top.
#[inline]
pub fn circle_in_rect_band(circle: &Circle, rect: &Rect) -> bool {
    rect.spans_x(circle.center.x) && circle.center.y + circle.radius > rect.top()
}

/// Exact circle/rectangle overlap via closest point
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let closest = circle.center.clamp(rect.pos, rect.pos + rect.size);
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}

/// Circle/circle overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) < reach * reach
}
