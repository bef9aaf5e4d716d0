//! Sensitivity analysis over perturbed parameter sets.
//!
//! A sweep takes a base parameter set and one or more dimensions, each a
//! field plus a finite set of additive deltas. Every point of the Cartesian
//! product becomes a new parameter set, floored at zero on the swept fields,
//! and is evaluated independently with [`compute_pnl`](crate::compute_pnl).
//!
//! ```
//! use bottega_core::ParameterSet;
//! use bottega_core::analysis::{AnalysisMetric, SweepConfig, SweepParameter, sweep};
//! use bottega_core::model::ParamField;
//!
//! let config = SweepConfig::new(vec![
//!     SweepParameter::new(ParamField::MenusPerDay, vec![-2.0, 0.0, 2.0]),
//!     SweepParameter::new(ParamField::ShopTicketsPerDay, vec![-2.0, 0.0, 2.0]),
//! ]);
//! let results = sweep(&ParameterSet::reference(), &config).unwrap();
//!
//! let cell = results.get(&[0, 0]).unwrap();
//! assert_eq!(cell.params.menus_per_day, 16.0);
//! assert_eq!(cell.params.shop_tickets_per_day, 3.0);
//!
//! let ebitda = results.metric_grid(AnalysisMetric::Ebitda);
//! assert_eq!(ebitda.shape(), &[3, 3]);
//! ```
//!
//! # N-Dimensional Grid
//!
//! Results are stored in a `SweepGrid<T>` with stride-based indexing in
//! row-major order (the last dimension varies fastest). The grid supports
//! 1D/2D slicing for tables.

mod config;
mod evaluator;
mod metrics;

pub use config::*;
pub use evaluator::*;
pub use metrics::*;
