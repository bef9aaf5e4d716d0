//! Sweep evaluator - runs the P&L engine over perturbed parameter sets.
//!
//! Cells share nothing but the base parameter set, which is only read, so the
//! parallel and sequential paths produce identical grids.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::evaluate::compute_pnl;
use crate::model::{ParamField, ParameterSet, PnlResult};

use super::{SweepConfig, SweepGrid, grid_indices};

/// One evaluated point of a sweep grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepCell {
    /// Delta applied on each dimension, in dimension order
    pub deltas: Vec<f64>,
    /// The perturbed parameter set that was evaluated
    pub params: ParameterSet,
    pub result: PnlResult,
}

/// Evaluated sweep: one cell per point of the Cartesian product of deltas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    /// Swept field for each dimension
    pub fields: Vec<ParamField>,
    /// Delta values for each dimension
    pub deltas: Vec<Vec<f64>>,
    /// Labels for each dimension
    pub labels: Vec<String>,
    /// N-dimensional grid of evaluated cells
    pub cells: SweepGrid<SweepCell>,
}

impl SweepResults {
    /// Get the number of dimensions
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.fields.len()
    }

    /// Get the grid shape
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.cells.shape()
    }

    /// Get the total number of points
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at the given indices
    #[must_use]
    pub fn get(&self, indices: &[usize]) -> Option<&SweepCell> {
        self.cells.get(indices)
    }

    /// Cells in row-major order (first dimension slowest)
    pub fn iter(&self) -> impl Iterator<Item = &SweepCell> {
        self.cells.data().iter()
    }

    /// Find the cell whose deltas match exactly
    #[must_use]
    pub fn find(&self, deltas: &[f64]) -> Option<&SweepCell> {
        self.iter().find(|cell| cell.deltas == deltas)
    }
}

/// Apply additive deltas to a copy of `base`, flooring each swept field at zero.
///
/// The floor reflects that swept quantities (volumes, prices, costs) cannot go
/// negative. A NaN sum also floors to zero.
#[must_use]
pub fn perturb(base: &ParameterSet, deltas: &[(ParamField, f64)]) -> ParameterSet {
    deltas.iter().fold(*base, |params, &(field, delta)| {
        params.with(field, (base.get(field) + delta).max(0.0))
    })
}

fn evaluate_cell(base: &ParameterSet, config: &SweepConfig, indices: &[usize]) -> SweepCell {
    let applied: Vec<(ParamField, f64)> = config
        .parameters
        .iter()
        .zip(indices)
        .map(|(param, &idx)| (param.field, param.deltas[idx]))
        .collect();
    let params = perturb(base, &applied);
    SweepCell {
        deltas: applied.iter().map(|&(_, delta)| delta).collect(),
        params,
        result: compute_pnl(&params),
    }
}

/// Run a sensitivity sweep.
///
/// Evaluates the engine once per point of the Cartesian product of the
/// configured delta sets. The base parameter set is never modified.
pub fn sweep(base: &ParameterSet, config: &SweepConfig) -> Result<SweepResults, SweepError> {
    config.validate()?;

    let shape = config.grid_shape();
    let points: Vec<Vec<usize>> = grid_indices(&shape).collect();

    tracing::debug!(
        fields = ?config.fields(),
        ?shape,
        cells = points.len(),
        parallel = config.parallel,
        "running sensitivity sweep"
    );

    #[cfg(feature = "parallel")]
    let cells: Vec<SweepCell> = if config.parallel {
        points
            .par_iter()
            .map(|indices| evaluate_cell(base, config, indices))
            .collect()
    } else {
        points
            .iter()
            .map(|indices| evaluate_cell(base, config, indices))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let cells: Vec<SweepCell> = points
        .iter()
        .map(|indices| evaluate_cell(base, config, indices))
        .collect();

    let cells = SweepGrid::from_row_major(shape, cells);

    Ok(SweepResults {
        fields: config.fields(),
        deltas: config.parameters.iter().map(|p| p.deltas.clone()).collect(),
        labels: config.labels(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SweepParameter;

    #[test]
    fn test_perturb_floors_at_zero() {
        let base = ParameterSet {
            shop_tickets_per_day: 1.0,
            ..ParameterSet::reference()
        };
        let params = perturb(
            &base,
            &[
                (ParamField::MenusPerDay, -2.0),
                (ParamField::ShopTicketsPerDay, -2.0),
            ],
        );
        assert_eq!(params.menus_per_day, 16.0);
        assert_eq!(params.shop_tickets_per_day, 0.0);
        assert_eq!(base.shop_tickets_per_day, 1.0);
    }

    #[test]
    fn test_perturb_leaves_unswept_fields() {
        let base = ParameterSet::reference();
        let params = perturb(&base, &[(ParamField::Rent, 80.0)]);
        assert_eq!(params.rent, 1_000.0);
        assert_eq!(params.with(ParamField::Rent, base.rent), base);
    }

    #[test]
    fn test_sweep_rejects_invalid_config() {
        let err = sweep(&ParameterSet::reference(), &SweepConfig::new(vec![])).unwrap_err();
        assert_eq!(err, SweepError::NoParameters);
    }

    #[test]
    fn test_find_by_deltas() {
        let results = sweep(&ParameterSet::reference(), &SweepConfig::reference()).unwrap();
        let cell = results.find(&[2.0, -2.0]).unwrap();
        assert_eq!(cell.params.menus_per_day, 20.0);
        assert_eq!(cell.params.shop_tickets_per_day, 3.0);
        assert!(results.find(&[1.0, 0.0]).is_none());
    }

    #[test]
    fn test_one_dimensional_sweep() {
        let config = SweepConfig::new(vec![SweepParameter::new(
            ParamField::DaysOpenPerWeek,
            vec![-1.0, 0.0, 1.0, 2.0, 3.0],
        )]);
        let results = sweep(&ParameterSet::reference(), &config).unwrap();
        let days: Vec<u8> = results.iter().map(|c| c.params.days_open_per_week).collect();
        assert_eq!(days, vec![4, 5, 6, 7, 8]);
    }
}
