// Configuration module
// Handles loading and managing game configuration from a TOML file

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{Config, DisplayConfig, KeyBindings, SimulationConfig};
