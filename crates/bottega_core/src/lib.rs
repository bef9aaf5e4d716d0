//! Monthly P&L engine for a small food-service business
//!
//! This crate turns a fully-specified set of operating assumptions into a
//! monthly profit-and-loss projection. It supports:
//! - Three revenue lines (set menus, café/bakery tickets, shop tickets)
//! - Unit-cost and percentage-of-sales food cost models
//! - Labor cost with an employer-cost multiplier on gross salaries
//! - Break-even sales and margin of safety, undefined where no finite
//!   break-even point exists
//! - N-dimensional sensitivity sweeps over any numeric input
//!
//! Everything here is a pure function of its inputs. There is no I/O and no
//! shared state, so sweep cells are evaluated in parallel when the `parallel`
//! feature is enabled.
//!
//! # Example
//!
//! ```
//! use bottega_core::{ParameterSet, compute_pnl};
//! use bottega_core::analysis::{SweepConfig, sweep};
//!
//! let params = ParameterSet::reference();
//! let result = compute_pnl(&params);
//! assert!(result.total_revenue > 0.0);
//!
//! let grid = sweep(&params, &SweepConfig::reference()).unwrap();
//! assert_eq!(grid.total_points(), 9);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::ParameterSetBuilder;
pub use error::{ParamError, SweepError};
pub use evaluate::compute_pnl;
pub use model::{ParamField, ParameterSet, PnlResult};
