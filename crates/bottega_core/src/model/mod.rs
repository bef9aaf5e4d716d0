//! Core data types: the parameter set fed to the engine and the P&L it produces.

mod fields;
mod params;
mod results;

pub use fields::*;
pub use params::*;
pub use results::*;
