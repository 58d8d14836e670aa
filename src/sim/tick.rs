//! Per-frame simulation step
//!
//! One call to [`tick`] advances the run by exactly one display frame. The
//! order of the phases below is part of the game's behavior: items resolve
//! before balls move, balls move before bricks are tested, and level
//! transitions are only evaluated once everything else has settled.

use glam::Vec2;

use super::collision::{Circle, Rect, circle_in_rect, circle_in_rect_band, circle_rect_overlap};
use super::state::{
    Ball, BallStatus, BrickStatus, GameEvent, GamePhase, GameState, Item, ItemKind, ItemStatus,
};
use crate::tuning::BrickHitTest;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Absolute pointer x in field space; wins over held keys
    pub pointer_x: Option<f32>,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot steers with the keys
    pub idle_mode: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return events;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Nothing moves while paused or after the run ended
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.frame += 1;
    state.clock += dt as f64;

    let mut input = input.clone();
    if input.idle_mode {
        steer_autopilot(state, &mut input);
    }

    move_paddle(state, &input);
    update_items(state, &mut events);
    move_balls(state, &mut events);
    resolve_brick_hits(state, &mut events);

    state.items.retain(Item::is_falling);
    state.balls.retain(Ball::is_active);

    state.expire_effects(&mut events);
    state.resolve_level_transitions(&mut events);

    events
}

fn move_paddle(state: &mut GameState, input: &TickInput) {
    let speed = state.tuning.paddle_key_speed;
    let paddle = &mut state.paddle;
    if let Some(x) = input.pointer_x {
        paddle.x = x - paddle.width / 2.0;
    } else if input.right {
        paddle.x += speed;
    } else if input.left {
        paddle.x -= speed;
    }
    paddle.clamp_x(state.tuning.field_width);
}

/// Fall, then pick up or fall off the bottom
fn update_items(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let paddle_rect = state.paddle.rect();
    let field_height = state.tuning.field_height;

    let mut collected: Vec<ItemKind> = Vec::new();
    for item in state.items.iter_mut().filter(|i| i.is_falling()) {
        item.pos.y += item.fall_speed;
        if circle_in_rect_band(&item.circle(), &paddle_rect) && item.pos.y < field_height {
            item.status = ItemStatus::Consumed;
            collected.push(item.kind);
        } else if item.pos.y > field_height {
            item.status = ItemStatus::Consumed;
            events.push(GameEvent::ItemMissed { kind: item.kind });
        }
    }

    for kind in collected {
        log::debug!("Collected {:?}", kind);
        events.push(GameEvent::ItemCollected { kind });
        state.apply_item_effect(kind);
    }
}

/// Wall and paddle response, then integration
fn move_balls(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let (width, height) = (state.tuning.field_width, state.tuning.field_height);
    let deflection = state.tuning.paddle_deflection;
    let paddle_rect = state.paddle.rect();
    let paddle_center = state.paddle.center_x();

    for ball in state.balls.iter_mut().filter(|b| b.is_active()) {
        let r = ball.radius;
        let next = ball.pos + ball.vel;

        if next.x > width - r || next.x < r {
            ball.vel.x = -ball.vel.x;
        }

        if next.y < r {
            ball.vel.y = -ball.vel.y;
        } else if next.y > height - r {
            let contact = Circle::new(Vec2::new(ball.pos.x, next.y), r);
            if circle_in_rect_band(&contact, &paddle_rect) {
                ball.vel.y = -ball.vel.y;
                ball.vel.x = (ball.pos.x - paddle_center) * deflection;
            } else {
                ball.status = BallStatus::Dead;
                events.push(GameEvent::BallLost);
                continue;
            }
        }

        ball.pos += ball.vel;
    }
}

fn ball_hits_brick(test: BrickHitTest, ball: &Circle, brick: &Rect) -> bool {
    match test {
        BrickHitTest::CenterInside => circle_in_rect(ball, brick),
        BrickHitTest::Overlap => circle_rect_overlap(ball, brick),
    }
}

/// Each intact brick is taken by the first active ball (in ball order) that
/// hits it. Only that ball bounces, so a brick is scored once per frame no
/// matter how many balls reach it together. A ball bounces at most once per
/// frame even when it takes two bricks.
fn resolve_brick_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let test = state.tuning.brick_hit_test;
    let drop_chance = state.tuning.item_drop_chance;

    let mut bounced: Vec<u32> = Vec::new();
    let mut drops: Vec<(ItemKind, Vec2)> = Vec::new();
    for brick in state.levels.bricks.iter_mut().filter(|b| b.is_intact()) {
        let rect = brick.rect();
        let Some(ball) = state
            .balls
            .iter_mut()
            .filter(|b| b.is_active())
            .find(|b| ball_hits_brick(test, &b.circle(), &rect))
        else {
            continue;
        };

        if !bounced.contains(&ball.id) {
            ball.vel.y = -ball.vel.y;
            bounced.push(ball.id);
        }
        brick.status = BrickStatus::Destroyed;
        state.levels.run.score += 1;
        events.push(GameEvent::BrickDestroyed {
            column: brick.column,
            row: brick.row,
        });

        if state.rng.chance(drop_chance) {
            let kind = ItemKind::ALL[state.rng.pick(ItemKind::ALL.len())];
            drops.push((kind, rect.center()));
        }
    }

    for (kind, pos) in drops {
        let id = state.next_entity_id();
        log::debug!("Item {:?} dropped at ({:.0}, {:.0})", kind, pos.x, pos.y);
        state.items.push(Item {
            id,
            kind,
            pos,
            radius: state.tuning.item_radius,
            fall_speed: state.tuning.item_fall_speed,
            status: ItemStatus::Falling,
        });
        events.push(GameEvent::ItemSpawned { kind });
    }
}

/// Chase the lowest descending ball, else the lowest item, else the center
fn steer_autopilot(state: &GameState, input: &mut TickInput) {
    let lowest_ball = state
        .balls
        .iter()
        .filter(|b| b.is_active() && b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    let lowest_item = state
        .items
        .iter()
        .filter(|i| i.is_falling())
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let target = if let Some(ball) = lowest_ball {
        // Wander off-center so returns are not all vertical
        let time_factor = state.frame as f32 * 0.01;
        let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15)
            * state.paddle.width
            / 2.0;
        ball.pos.x + offset
    } else if let Some(item) = lowest_item {
        item.pos.x
    } else {
        state.tuning.field_width / 2.0
    };

    let delta = target - state.paddle.center_x();
    let dead_zone = state.tuning.paddle_key_speed / 2.0;
    input.pointer_x = None;
    input.right = delta > dead_zone;
    input.left = delta < -dead_zone;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::grid_dimensions;
    use crate::sim::rng::ScriptedRng;
    use crate::tuning::{EffectPolicy, Tuning};
    use proptest::prelude::*;

    /// Default tuning, no random drops
    fn quiet_state() -> GameState {
        GameState::with_rng(Tuning::default(), Box::new(ScriptedRng::never()))
    }

    fn destroy_all_but(state: &mut GameState, column: u32, row: u32) {
        for brick in state.levels.bricks.iter_mut() {
            if (brick.column, brick.row) != (column, row) {
                brick.status = BrickStatus::Destroyed;
            }
        }
    }

    fn place_ball(state: &mut GameState, pos: Vec2, vel: Vec2) {
        state.balls[0].pos = pos;
        state.balls[0].vel = vel;
    }

    #[test]
    fn test_tick_pause() {
        let mut state = quiet_state();
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Paused);

        let before = state.snapshot();
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.clock, 0.0);

        tick(&mut state, &pause, FRAME_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..3000 {
            let e1 = tick(&mut state1, &input, FRAME_DT);
            let e2 = tick(&mut state2, &input, FRAME_DT);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1.snapshot(), state2.snapshot());
    }

    #[test]
    fn test_keys_move_and_clamp() {
        let mut state = quiet_state();
        let x0 = state.paddle.x;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, FRAME_DT);
        assert_eq!(state.paddle.x, x0 + PADDLE_KEY_SPEED);

        state.paddle.x = 2.0;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        tick(&mut state, &left, FRAME_DT);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_pointer_centers_paddle_and_wins_over_keys() {
        let mut state = quiet_state();
        let input = TickInput {
            pointer_x: Some(300.0),
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.paddle.center_x(), 300.0);

        let input = TickInput {
            pointer_x: Some(FIELD_WIDTH + 100.0),
            ..Default::default()
        };
        tick(&mut state, &input, FRAME_DT);
        assert_eq!(state.paddle.x, FIELD_WIDTH - state.paddle.width);
    }

    #[test]
    fn test_side_and_top_walls_reflect() {
        let mut state = quiet_state();
        place_ball(&mut state, Vec2::new(11.0, 11.0), Vec2::new(-3.0, -3.0));
        let mut events = Vec::new();
        move_balls(&mut state, &mut events);
        let ball = &state.balls[0];
        assert_eq!(ball.vel, Vec2::new(3.0, 3.0));
        assert_eq!(ball.pos, Vec2::new(14.0, 14.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_paddle_deflects_by_offset() {
        let mut state = quiet_state();
        let center = state.paddle.center_x();
        let y = FIELD_HEIGHT - BALL_RADIUS - 1.0;
        place_ball(&mut state, Vec2::new(center + 20.0, y), Vec2::new(0.0, 3.0));
        let mut events = Vec::new();
        move_balls(&mut state, &mut events);
        let ball = &state.balls[0];
        assert!(ball.is_active());
        assert_eq!(ball.vel.y, -3.0);
        assert!((ball.vel.x - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_dead_ball_does_not_move() {
        let mut state = quiet_state();
        let y = FIELD_HEIGHT - BALL_RADIUS - 1.0;
        place_ball(&mut state, Vec2::new(20.0, y), Vec2::new(0.0, 3.0));
        let mut events = Vec::new();
        move_balls(&mut state, &mut events);
        assert_eq!(state.balls[0].status, BallStatus::Dead);
        assert_eq!(state.balls[0].pos, Vec2::new(20.0, y));
        assert_eq!(events, vec![GameEvent::BallLost]);
    }

    #[test]
    fn test_dead_ball_never_hits_bricks() {
        let mut state = quiet_state();
        place_ball(&mut state, Vec2::new(60.0, 40.0), Vec2::new(0.0, -2.0));
        state.balls[0].status = BallStatus::Dead;
        let mut events = Vec::new();
        resolve_brick_hits(&mut state, &mut events);
        assert!(events.is_empty());
        assert_eq!(state.levels.bricks.intact_count(), 15);
    }

    #[test]
    fn test_brick_tie_break_first_ball_wins() {
        let mut state = quiet_state();
        place_ball(&mut state, Vec2::new(60.0, 45.0), Vec2::new(0.0, -2.0));
        let second = state.spawn_ball(Vec2::new(70.0, 45.0), Vec2::new(0.0, -2.0));

        let events = tick(&mut state, &TickInput::default(), FRAME_DT);

        let destroyed: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .collect();
        assert_eq!(destroyed, vec![&GameEvent::BrickDestroyed { column: 0, row: 0 }]);
        assert_eq!(state.score(), 1);
        assert_eq!(state.balls[0].vel.y, 2.0);
        let other = state.balls.iter().find(|b| b.id == second).unwrap();
        assert_eq!(other.vel.y, -2.0);
    }

    #[test]
    fn test_overlap_hit_test_catches_grazes() {
        let tuning = Tuning {
            brick_hit_test: BrickHitTest::Overlap,
            ..Tuning::default()
        };
        let mut state = GameState::with_rng(tuning, Box::new(ScriptedRng::never()));
        // Center ends 5px below the bottom-row brick (0, 2), edge inside it
        place_ball(&mut state, Vec2::new(60.0, 117.0), Vec2::new(0.0, -2.0));
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.score(), 1);

        let mut state = quiet_state();
        place_ball(&mut state, Vec2::new(60.0, 117.0), Vec2::new(0.0, -2.0));
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_ball_bounces_once_when_taking_two_bricks() {
        let tuning = Tuning {
            brick_hit_test: BrickHitTest::Overlap,
            ..Tuning::default()
        };
        let mut state = GameState::with_rng(tuning, Box::new(ScriptedRng::never()));
        // Ends at y=55, reaching into both (0, 0) and (0, 1) across the padding
        place_ball(&mut state, Vec2::new(60.0, 57.0), Vec2::new(0.0, -2.0));

        let events = tick(&mut state, &TickInput::default(), FRAME_DT);

        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
            .count();
        assert_eq!(destroyed, 2);
        assert_eq!(state.score(), 2);
        assert_eq!(state.balls[0].vel.y, 2.0);
    }

    #[test]
    fn test_destroyed_brick_can_drop_item() {
        // Drop roll 0.1 passes, kind roll 0.4 picks the second kind
        let mut state =
            GameState::with_rng(Tuning::default(), Box::new(ScriptedRng::new(vec![0.1, 0.4])));
        place_ball(&mut state, Vec2::new(60.0, 45.0), Vec2::new(0.0, -2.0));
        let events = tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(events.contains(&GameEvent::ItemSpawned {
            kind: ItemKind::BallSlow
        }));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].pos, Vec2::new(30.0 + 37.5, 30.0 + 10.0));
    }

    #[test]
    fn test_item_pickup_applies_effect() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            kind: ItemKind::PaddleLong,
            pos: Vec2::new(state.paddle.center_x(), state.paddle.y - ITEM_RADIUS - 1.0),
            radius: ITEM_RADIUS,
            fall_speed: ITEM_FALL_SPEED,
            status: ItemStatus::Falling,
        });
        let events = tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(events.contains(&GameEvent::ItemCollected {
            kind: ItemKind::PaddleLong
        }));
        assert!(state.items.is_empty());
        assert_eq!(state.paddle.width, PADDLE_BASE_WIDTH + WIDEN_AMOUNT);
        assert_eq!(state.effects.len(), 1);
    }

    #[test]
    fn test_item_falls_off_bottom() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.items.push(Item {
            id,
            kind: ItemKind::ExtraBall,
            pos: Vec2::new(20.0, FIELD_HEIGHT - 1.0),
            radius: ITEM_RADIUS,
            fall_speed: ITEM_FALL_SPEED,
            status: ItemStatus::Falling,
        });
        let events = tick(&mut state, &TickInput::default(), FRAME_DT);
        assert!(events.contains(&GameEvent::ItemMissed {
            kind: ItemKind::ExtraBall
        }));
        assert!(state.items.is_empty());
        assert_eq!(state.balls.len(), 1);
    }

    #[test]
    fn test_last_brick_clears_level_in_same_frame() {
        let mut state = quiet_state();
        destroy_all_but(&mut state, 0, 0);
        place_ball(&mut state, Vec2::new(60.0, 45.0), Vec2::new(0.0, -2.0));
        let lives = state.lives();

        let events = tick(&mut state, &TickInput::default(), FRAME_DT);

        assert!(events.contains(&GameEvent::LevelCleared { level: 2 }));
        let levels_cleared = events
            .iter()
            .filter(|e| matches!(e, GameEvent::LevelCleared { .. }))
            .count();
        assert_eq!(levels_cleared, 1);
        assert_eq!(state.level(), 2);
        assert_eq!(state.lives(), lives + 1);
        assert_eq!(state.score(), 1);

        let (columns, rows) = grid_dimensions(2);
        assert_eq!((state.levels.bricks.columns, state.levels.bricks.rows), (columns, rows));
        assert_eq!(state.levels.bricks.intact_count(), (columns * rows) as usize);
        assert_eq!(state.balls.len(), 1);
        assert!((state.balls[0].vel.y + state.tuning.ball_speed(2)).abs() < 1e-6);
    }

    #[test]
    fn test_level_clear_keeps_widen_running() {
        let mut state = quiet_state();
        state.apply_item_effect(ItemKind::PaddleLong);
        destroy_all_but(&mut state, 0, 0);
        place_ball(&mut state, Vec2::new(60.0, 45.0), Vec2::new(0.0, -2.0));
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.level(), 2);
        assert_eq!(state.paddle.width, PADDLE_BASE_WIDTH + WIDEN_AMOUNT);
        assert_eq!(state.effects.len(), 1);
    }

    #[test]
    fn test_life_lost_respawns_and_keeps_progress() {
        let mut state = quiet_state();
        state.levels.run.score = 9;
        if let Some(b) = state.levels.bricks.get_mut(1, 1) {
            b.status = BrickStatus::Destroyed;
        }
        state.paddle.x = 0.0;
        let y = FIELD_HEIGHT - BALL_RADIUS - 1.0;
        place_ball(&mut state, Vec2::new(600.0, y), Vec2::new(0.0, 3.0));

        let events = tick(&mut state, &TickInput::default(), FRAME_DT);

        assert!(events.contains(&GameEvent::LifeLost { lives_left: 2 }));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives(), 2);
        assert_eq!(state.score(), 9);
        assert_eq!(state.level(), 1);
        assert_eq!(state.levels.bricks.intact_count(), 14);
        assert_eq!(state.balls.len(), 1);
        assert!((state.paddle.center_x() - FIELD_WIDTH / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_last_life_ends_run_and_freezes() {
        let mut state = quiet_state();
        state.levels.run.lives = 1;
        state.levels.run.score = 5;
        let y = FIELD_HEIGHT - BALL_RADIUS - 1.0;
        place_ball(&mut state, Vec2::new(100.0, y), Vec2::new(0.0, 3.0));

        let events = tick(&mut state, &TickInput::default(), FRAME_DT);

        assert!(events.contains(&GameEvent::RunOver { final_score: 5 }));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives(), 0);

        let frozen = state.snapshot();
        let clock = state.clock;
        let busy = TickInput {
            right: true,
            pause: true,
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..10 {
            assert!(tick(&mut state, &busy, FRAME_DT).is_empty());
        }
        assert_eq!(state.snapshot(), frozen);
        assert_eq!(state.clock, clock);
    }

    #[test]
    fn test_run_over_cancels_pending_reverts() {
        let mut state = quiet_state();
        state.apply_item_effect(ItemKind::PaddleLong);
        state.levels.run.lives = 1;
        let y = FIELD_HEIGHT - BALL_RADIUS - 1.0;
        let x = if state.paddle.x > 200.0 { 100.0 } else { 800.0 };
        place_ball(&mut state, Vec2::new(x, y), Vec2::new(0.0, 3.0));
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.effects.is_empty());

        state.restart();
        assert_eq!(state.paddle.width, PADDLE_BASE_WIDTH);
        assert_eq!(state.lives(), STARTING_LIVES);
        assert_eq!(state.score(), 0);

        // Widen again; the old revert (due at t=10) must not cut it short
        state.clock = 5.0;
        state.apply_item_effect(ItemKind::PaddleLong);
        state.clock = 12.0;
        tick(&mut state, &TickInput::default(), FRAME_DT);
        assert_eq!(state.paddle.width, PADDLE_BASE_WIDTH + WIDEN_AMOUNT);
    }

    #[test]
    fn test_legacy_policy_runs_end_to_end() {
        let mut state = GameState::with_tuning(Tuning::legacy(), 7);
        assert_eq!(state.tuning.effect_policy, EffectPolicy::Legacy);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            tick(&mut state, &input, FRAME_DT);
            assert!(state.paddle.width >= PADDLE_BASE_WIDTH);
            assert!(state.paddle.width <= PADDLE_MAX_WIDTH);
        }
    }

    #[test]
    fn test_autopilot_steers_toward_ball() {
        let mut state = quiet_state();
        state.paddle.x = 0.0;
        place_ball(&mut state, Vec2::new(800.0, 300.0), Vec2::new(0.0, 2.0));
        let mut input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        steer_autopilot(&state, &mut input);
        assert!(input.right);
        assert!(!input.left);
    }

    proptest! {
        #[test]
        fn ball_stays_within_one_step_of_field(
            x in BALL_RADIUS..(FIELD_WIDTH - BALL_RADIUS),
            y in BALL_RADIUS..(FIELD_HEIGHT - BALL_RADIUS),
            dx in -6.0f32..6.0,
            dy in -6.0f32..6.0,
        ) {
            let mut state = quiet_state();
            place_ball(&mut state, Vec2::new(x, y), Vec2::new(dx, dy));
            let mut events = Vec::new();
            move_balls(&mut state, &mut events);
            let ball = &state.balls[0];
            if ball.is_active() {
                let reach = ball.vel.x.abs().max(ball.vel.y.abs());
                prop_assert!(ball.pos.x >= -reach && ball.pos.x <= FIELD_WIDTH + reach);
                prop_assert!(ball.pos.y >= -reach && ball.pos.y <= FIELD_HEIGHT + reach);
            }
        }

        #[test]
        fn ball_over_paddle_survives(offset in 0.0f32..=1.0, dy in 1.5f32..6.0) {
            let mut state = quiet_state();
            let x = state.paddle.x + offset * state.paddle.width;
            place_ball(&mut state, Vec2::new(x, FIELD_HEIGHT - BALL_RADIUS - 1.0), Vec2::new(0.5, dy));
            let mut events = Vec::new();
            move_balls(&mut state, &mut events);
            prop_assert!(state.balls[0].is_active());
            prop_assert!(state.balls[0].vel.y < 0.0);
        }

        #[test]
        fn ball_beside_paddle_dies(x in 20.0f32..400.0, dy in 1.5f32..6.0) {
            let mut state = quiet_state();
            // Paddle spans 412.5..487.5
            place_ball(&mut state, Vec2::new(x, FIELD_HEIGHT - BALL_RADIUS - 1.0), Vec2::new(0.5, dy));
            let mut events = Vec::new();
            move_balls(&mut state, &mut events);
            prop_assert_eq!(state.balls[0].status, BallStatus::Dead);
        }
    }
}
