pub mod config;
pub mod simulator;

// Re-export commonly used types
pub use config::SimulationConfig;
pub use simulator::{RunSummary, Simulator};
