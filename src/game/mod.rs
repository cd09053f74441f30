pub mod input;
pub mod sim;
pub mod state;

pub use input::KeyMap;
pub use sim::advance;
pub use state::{SimulationState, Snapshot};
