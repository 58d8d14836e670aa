//! Timed power-up effects
//!
//! Each pickup that needs undoing later becomes an [`Effect`] record with an
//! expiry time on the simulation clock. The step drains expired records once
//! per frame, so reverts never interleave with the rest of the update.
//!
//! Under [`EffectPolicy::Tracked`] a record remembers exactly what its pickup
//! changed and the revert undoes only that. [`EffectPolicy::Legacy`] keeps the
//! arcade behavior: a widen pickup at the cap still schedules a shrink, and a
//! slow revert speeds up every ball alive at expiry. Slow compounds and
//! unwinds correctly under Legacy as long as the same balls are alive, since
//! scaling by a factor and later dividing by it commute across overlapping
//! pickups. The additive widen has no such property, hence the cap bug.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, ItemKind};
use crate::tuning::EffectPolicy;

pub type EffectId = u32;

/// What a scheduled revert will undo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Shrink the paddle by `delta`
    PaddleWiden { delta: f32 },
    /// Divide ball velocity by `factor`; `balls` lists the damped ball IDs,
    /// `None` means every ball alive at expiry
    BallSlow { factor: f32, balls: Option<Vec<u32>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: EffectId,
    pub kind: EffectKind,
    /// Simulation clock seconds
    pub expires_at: f64,
}

/// Pending reverts, keyed by effect ID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectScheduler {
    effects: Vec<Effect>,
    next_id: EffectId,
}

impl EffectScheduler {
    pub fn schedule(&mut self, kind: EffectKind, now: f64, duration: f32) -> EffectId {
        self.next_id += 1;
        let id = self.next_id;
        self.effects.push(Effect {
            id,
            kind,
            expires_at: now + duration as f64,
        });
        id
    }

    /// Drop a pending revert; false if it already fired or never existed
    pub fn cancel(&mut self, id: EffectId) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.id != id);
        self.effects.len() != before
    }

    /// Drop every pending revert, returning how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let n = self.effects.len();
        self.effects.clear();
        n
    }

    /// Remove and return everything due at `now`, oldest expiry first
    pub fn drain_expired(&mut self, now: f64) -> Vec<Effect> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.effects.drain(..).partition(|e| e.expires_at <= now);
        self.effects = pending;
        due.sort_by(|a, b| a.expires_at.total_cmp(&b.expires_at).then(a.id.cmp(&b.id)));
        due
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl GameState {
    /// Apply a collected item; returns the scheduled revert, if any
    pub fn apply_item_effect(&mut self, kind: ItemKind) -> Option<EffectId> {
        match kind {
            ItemKind::PaddleLong => self.widen_paddle(),
            ItemKind::BallSlow => Some(self.slow_balls()),
            ItemKind::ExtraBall => {
                self.spawn_extra_ball();
                None
            }
        }
    }

    fn widen_paddle(&mut self) -> Option<EffectId> {
        let t = &self.tuning;
        let (amount, base, max) = (t.widen_amount, t.paddle_base_width, t.paddle_max_width);
        let before = self.paddle.width;
        let applied = before < max;
        if applied {
            self.paddle.set_width(before + amount, base, max);
            self.paddle.clamp_x(self.tuning.field_width);
            log::debug!("Paddle widened to {}", self.paddle.width);
        } else {
            log::debug!("Paddle already at {} - widen skipped", before);
        }

        // Tracked reverts undo only the growth the clamp let through
        let delta = match (applied, self.tuning.effect_policy) {
            (false, EffectPolicy::Tracked) => return None,
            (true, EffectPolicy::Tracked) => self.paddle.width - before,
            (_, EffectPolicy::Legacy) => amount,
        };
        Some(self.effects.schedule(
            EffectKind::PaddleWiden { delta },
            self.clock,
            self.tuning.widen_duration,
        ))
    }

    fn slow_balls(&mut self) -> EffectId {
        let factor = self.tuning.slow_factor;
        let mut damped = Vec::new();
        for ball in self.balls.iter_mut().filter(|b| b.is_active()) {
            ball.vel *= factor;
            damped.push(ball.id);
        }
        log::debug!("Slowed {} balls by {}", damped.len(), factor);

        let balls = match self.tuning.effect_policy {
            EffectPolicy::Tracked => Some(damped),
            EffectPolicy::Legacy => None,
        };
        self.effects.schedule(
            EffectKind::BallSlow { factor, balls },
            self.clock,
            self.tuning.slow_duration,
        )
    }

    fn spawn_extra_ball(&mut self) {
        if self.active_ball_count() >= self.tuning.max_active_balls {
            log::debug!("Extra ball skipped - {} already in play", self.active_ball_count());
            return;
        }
        let spread = crate::consts::EXTRA_BALL_SPREAD;
        let dx = self.rng.range(-spread, spread);
        let speed = self.tuning.ball_speed(self.level());
        let pos = Vec2::new(
            self.paddle.center_x(),
            self.tuning.field_height - self.tuning.paddle_height - self.tuning.ball_radius,
        );
        self.spawn_ball(pos, Vec2::new(dx, -speed));
    }

    /// Revert every effect due on the current clock
    pub(crate) fn expire_effects(&mut self, events: &mut Vec<GameEvent>) {
        for effect in self.effects.drain_expired(self.clock) {
            log::debug!("Effect {} expired: {:?}", effect.id, effect.kind);
            events.push(GameEvent::EffectExpired { id: effect.id });
            self.revert_effect(effect.kind);
        }
    }

    fn revert_effect(&mut self, kind: EffectKind) {
        match kind {
            EffectKind::PaddleWiden { delta } => {
                let (base, max) = (self.tuning.paddle_base_width, self.tuning.paddle_max_width);
                self.paddle.set_width(self.paddle.width - delta, base, max);
            }
            EffectKind::BallSlow { factor, balls } => {
                for ball in self.balls.iter_mut().filter(|b| b.is_active()) {
                    let damped = balls.as_ref().is_none_or(|ids| ids.contains(&ball.id));
                    if damped {
                        ball.vel /= factor;
                    }
                }
            }
        }
    }
}
