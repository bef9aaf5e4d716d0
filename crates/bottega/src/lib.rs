//! Command-line front end for the bottega P&L engine
//!
//! Loads scenarios from YAML, runs the engine in `bottega_core` and renders
//! the results as text tables, YAML, or JSON.

pub mod commands;
pub mod data;
pub mod logging;
pub mod report;
pub mod util;

pub use commands::{Command, Outcome, run};
pub use data::{DataDirectory, ScenarioData, StorageError};
pub use logging::{LogTarget, init_logging};
