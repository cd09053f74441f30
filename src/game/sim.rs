use std::time::Duration;

use super::state::{clamp_span, Ball, Paddle, SimulationState, FIELD_HEIGHT, FIELD_WIDTH};

/// Vertical distance a paddle covers per tick while a directional key is held.
pub const PADDLE_STEP: f32 = 1.0;

/// Advances the simulation by one tick: paddle motion from the held control
/// flags, then ball motion and collision resolution. Pure - the input state
/// is left untouched and a new state is returned.
///
/// `tick_hint` is the nominal tick interval. Motion is per tick and does not
/// scale with it; the exact-touch collision test below depends on that.
pub fn advance(state: &SimulationState, _tick_hint: Duration) -> SimulationState {
    let left_paddle = step_paddle(
        &state.left_paddle,
        state.controls.left_up,
        state.controls.left_down,
    );
    let right_paddle = step_paddle(
        &state.right_paddle,
        state.controls.right_up,
        state.controls.right_down,
    );
    let ball = step_ball(&state.ball, &state.left_paddle, &state.right_paddle);

    SimulationState {
        left_paddle,
        right_paddle,
        ball,
        controls: state.controls,
    }
}

fn step_paddle(paddle: &Paddle, up: bool, down: bool) -> Paddle {
    // Up wins when both directional keys are held.
    let delta = if up {
        -PADDLE_STEP
    } else if down {
        PADDLE_STEP
    } else {
        0.0
    };

    Paddle {
        y: clamp_span(paddle.y + delta, paddle.height, FIELD_HEIGHT),
        ..*paddle
    }
}

fn step_ball(ball: &Ball, left: &Paddle, right: &Paddle) -> Ball {
    let tentative_x = clamp_span(ball.x + ball.vx, ball.width, FIELD_WIDTH);
    let tentative_y = clamp_span(ball.y + ball.vy, ball.height, FIELD_HEIGHT);

    // Paddle reflection is decided from the pre-move position and requires
    // the ball edge to land exactly on the paddle face. That only holds when
    // the per-tick displacement divides the coordinate granularity; a faster
    // or fractional-speed ball can step over the face and sail through to
    // the wall.
    // TODO: switch to an edge-crossing test (old x before the face,
    // tentative x at or past it) so non-unit speeds collide too. Changes
    // observable behavior at boundary ticks, so it needs its own pass.
    let vx = if ball.x == left.x + left.width && spans_overlap(ball, left) {
        ball.vx.abs()
    } else if ball.x + ball.width == right.x && spans_overlap(ball, right) {
        -ball.vx.abs()
    } else if tentative_x <= 0.0 || tentative_x >= FIELD_WIDTH - ball.width {
        -ball.vx
    } else {
        ball.vx
    };

    let vy = if tentative_y <= 0.0 || tentative_y >= FIELD_HEIGHT - ball.height {
        -ball.vy
    } else {
        ball.vy
    };

    Ball {
        x: tentative_x,
        y: tentative_y,
        vx,
        vy,
        ..*ball
    }
}

// Strict on both ends: a ball resting exactly at the paddle's top or bottom
// edge does not count as overlapping.
fn spans_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.y - ball.height < ball.y && ball.y < paddle.y + paddle.height
}
