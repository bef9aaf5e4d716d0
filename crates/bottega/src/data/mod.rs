//! Scenario files and the data directory that holds them

pub mod scenario_data;
pub mod storage;

pub use scenario_data::ScenarioData;
pub use storage::{DataDirectory, StorageError};
