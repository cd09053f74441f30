// Configuration types, all with defaults matching the reference behavior so
// a partial (or missing) config file still produces a playable game.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybindings: KeyBindings::default(),
            simulation: SimulationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle
    pub left_up: String,
    pub left_down: String,

    // Right paddle
    pub right_up: String,
    pub right_down: String,

    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "W".to_string(),
            left_down: "S".to_string(),
            right_up: "Up".to_string(),
            right_down: "Down".to_string(),
            quit: "Q".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    // Paddle geometry in field units (the field itself is a fixed 100x100)
    pub paddle_width: f32,
    pub paddle_height: f32,

    // Distance from the side walls to each paddle's near edge
    pub paddle_margin: f32,

    // Ball edge length in field units
    pub ball_size: f32,

    // Ball displacement per axis per tick. Values other than 1.0 can step
    // over a paddle face without ever touching it, so the ball passes
    // straight through - see the collision note in game/sim.rs.
    pub ball_speed: f32,

    // Opening serve direction: towards the left player when true
    pub ball_serve_left: bool,

    // Simulation tick interval; fixed, never derived from frame time
    pub tick_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paddle_width: 2.0,
            paddle_height: 10.0,
            paddle_margin: 5.0,
            ball_size: 2.0,
            ball_speed: 1.0,
            ball_serve_left: true,
            tick_interval_ms: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Paddle color (RGB values 0-255)
    pub paddle_color: [u8; 3],

    // Ball color
    pub ball_color: [u8; 3],

    // Field border and center line color
    pub border_color: [u8; 3],

    // Controls hint line color
    pub hint_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            paddle_color: [255, 255, 255], // White
            ball_color: [255, 255, 255],   // White
            border_color: [255, 255, 255], // White
            hint_color: [100, 100, 100],   // Gray
        }
    }
}
