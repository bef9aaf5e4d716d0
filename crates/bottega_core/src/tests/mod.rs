//! Engine tests
//!
//! Tests are organized by topic:
//! - `scenarios` - Worked examples with hand-computed figures
//! - `edge_cases` - Undefined ratios and degenerate inputs
//! - `properties` - Additivity, monotonicity, break-even consistency, determinism
//! - `sweep` - Sensitivity grid construction and zero flooring

mod scenarios;
mod sweep;

/// Assert two floats agree to within `1e-9` relative (or absolute near zero)
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
