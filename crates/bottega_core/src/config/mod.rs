//! Parameter set construction
//!
//! A `ParameterSet` can be written as a struct literal, deserialized from a
//! scenario file, or assembled with the fluent builder:
//!
//! ```
//! use bottega_core::ParameterSetBuilder;
//!
//! let params = ParameterSetBuilder::new()
//!     .cadence(5, 4.3)
//!     .volumes(18.0, 20.0, 5.0)
//!     .prices(13.0, 5.0, 15.0)
//!     .food_costs(3.0, 0.30, 0.35)
//!     .salaries(1300.0, 1300.0, 1.32)
//!     .labor_extras(400.0, 100.0)
//!     .fixed_costs(920.0, 450.0, 60.0, 120.0, 80.0, 700.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(params, bottega_core::ParameterSet::reference());
//! ```
//!
//! The builder never fills in a value on its own: `build` fails with
//! [`ParamError::MissingField`](crate::ParamError::MissingField) if anything
//! was left out.

pub mod builder;
pub mod presets;

pub use builder::ParameterSetBuilder;
