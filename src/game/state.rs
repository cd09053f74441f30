use crate::config::SimulationConfig;

// Field coordinate system - the fixed space the simulation runs in.
// The renderer scales these units to terminal cells on its own; nothing in
// the core ever sees pixels.
pub const FIELD_WIDTH: f32 = 100.0;
pub const FIELD_HEIGHT: f32 = 100.0;

/// Clamps an entity's near edge so the span `[pos, pos + size]` stays inside
/// `[0, limit]`.
pub fn clamp_span(pos: f32, size: f32, limit: f32) -> f32 {
    pos.min(limit - size).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    // Velocity in field units per tick, not per second.
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
}

/// Currently held directional keys, one flag per control per side. Key
/// transitions flip individual flags; the simulation step only reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

/// An axis-aligned rectangle in field units, as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only view of the field for drawing. The renderer never sees the
/// mutable state itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub controls: Controls,
}

impl SimulationState {
    /// Builds the opening state: both paddles centered at their fixed x
    /// positions, ball at field center serving towards the configured side.
    pub fn new(sim: &SimulationConfig) -> Self {
        let paddle_y = clamp_span(
            FIELD_HEIGHT / 2.0 - sim.paddle_height / 2.0,
            sim.paddle_height,
            FIELD_HEIGHT,
        );

        let left_paddle = Paddle {
            x: sim.paddle_margin,
            y: paddle_y,
            width: sim.paddle_width,
            height: sim.paddle_height,
        };
        let right_paddle = Paddle {
            x: FIELD_WIDTH - sim.paddle_margin - sim.paddle_width,
            y: paddle_y,
            width: sim.paddle_width,
            height: sim.paddle_height,
        };

        let serve_vx = if sim.ball_serve_left {
            -sim.ball_speed
        } else {
            sim.ball_speed
        };

        let ball = Ball {
            x: clamp_span(
                FIELD_WIDTH / 2.0 - sim.ball_size / 2.0,
                sim.ball_size,
                FIELD_WIDTH,
            ),
            y: clamp_span(
                FIELD_HEIGHT / 2.0 - sim.ball_size / 2.0,
                sim.ball_size,
                FIELD_HEIGHT,
            ),
            vx: serve_vx,
            vy: sim.ball_speed,
            width: sim.ball_size,
            height: sim.ball_size,
        };

        Self {
            left_paddle,
            right_paddle,
            ball,
            controls: Controls::default(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle: paddle_rect(&self.left_paddle),
            right_paddle: paddle_rect(&self.right_paddle),
            ball: Rect {
                x: self.ball.x,
                y: self.ball.y,
                width: self.ball.width,
                height: self.ball.height,
            },
        }
    }
}

fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect {
        x: paddle.x,
        y: paddle.y,
        width: paddle.width,
        height: paddle.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_span_bounds() {
        assert_eq!(clamp_span(50.0, 10.0, 100.0), 50.0);
        assert_eq!(clamp_span(-3.0, 10.0, 100.0), 0.0);
        assert_eq!(clamp_span(95.0, 10.0, 100.0), 90.0);
    }

    #[test]
    fn test_initial_state_within_field() {
        let state = SimulationState::new(&SimulationConfig::default());

        assert_eq!(state.left_paddle.x, 5.0);
        assert_eq!(state.right_paddle.x, FIELD_WIDTH - 5.0 - 2.0);
        assert!(state.left_paddle.y >= 0.0);
        assert!(state.left_paddle.y <= FIELD_HEIGHT - state.left_paddle.height);
        assert!(state.ball.x >= 0.0 && state.ball.x <= FIELD_WIDTH - state.ball.width);
        assert_eq!(state.controls, Controls::default());
    }

    #[test]
    fn test_serve_direction_follows_config() {
        let mut sim = SimulationConfig::default();

        sim.ball_serve_left = true;
        assert_eq!(SimulationState::new(&sim).ball.vx, -sim.ball_speed);

        sim.ball_serve_left = false;
        assert_eq!(SimulationState::new(&sim).ball.vx, sim.ball_speed);
    }

    #[test]
    fn test_snapshot_mirrors_entities() {
        let state = SimulationState::new(&SimulationConfig::default());
        let snap = state.snapshot();

        assert_eq!(snap.left_paddle.x, state.left_paddle.x);
        assert_eq!(snap.left_paddle.height, state.left_paddle.height);
        assert_eq!(snap.ball.x, state.ball.x);
        assert_eq!(snap.ball.width, state.ball.width);
        assert_eq!(snap.right_paddle.y, state.right_paddle.y);
    }
}
