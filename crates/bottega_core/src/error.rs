use std::fmt;

use crate::model::ParamField;

/// A single out-of-domain parameter value
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: ParamField,
    pub value: f64,
    pub reason: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.field, self.value, self.reason)
    }
}

/// Errors related to building or validating a parameter set
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// The builder was asked to build before every field was supplied
    MissingField(ParamField),
    /// No field with this name exists
    UnknownField(String),
    /// One or more values are outside their admissible range
    OutOfDomain(Vec<Violation>),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::MissingField(field) => write!(f, "missing parameter {field}"),
            ParamError::UnknownField(name) => write!(f, "unknown parameter {name:?}"),
            ParamError::OutOfDomain(violations) => {
                write!(f, "{} parameter(s) out of range", violations.len())?;
                for v in violations {
                    write!(f, "; {v}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Errors related to sweep configuration
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// At least one dimension is required
    NoParameters,
    /// A dimension has an empty delta set
    EmptyDeltas(ParamField),
    /// The same field appears in two dimensions
    DuplicateField(ParamField),
    /// A delta is NaN or infinite
    NonFiniteDelta { field: ParamField, delta: f64 },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::NoParameters => write!(f, "at least one sweep parameter required"),
            SweepError::EmptyDeltas(field) => write!(f, "no deltas given for {field}"),
            SweepError::DuplicateField(field) => {
                write!(f, "{field} is swept in more than one dimension")
            }
            SweepError::NonFiniteDelta { field, delta } => {
                write!(f, "delta {delta} for {field} is not finite")
            }
        }
    }
}

impl std::error::Error for SweepError {}
