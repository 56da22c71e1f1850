pub mod core;

// Re-export commonly used types
pub use crate::core::errors::{SimError, SimResult};
pub use crate::core::execution::config::{DayParameters, EmployeeRotation, SimulationConfig};
pub use crate::core::execution::simulator::{RunSummary, Simulator};
pub use crate::core::menu::Menu;
pub use crate::core::output::write_dataset;
pub use crate::core::records::Dataset;
pub use crate::core::sampling::{SampleSource, ScriptedSource, StdRngSource};
pub use crate::core::types::Money;
