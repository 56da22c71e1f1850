pub mod errors;
pub mod execution;
pub mod menu;
pub mod output;
pub mod records;
pub mod sampling;
pub mod types;
