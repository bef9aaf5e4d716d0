//! Metrics that can be read off a sweep cell.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::PnlResult;

use super::{SweepGrid, SweepResults};

/// A P&L figure tracked across a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMetric {
    TotalRevenue,
    GrossProfit,
    GrossMarginPct,
    Ebitda,
    /// Undefined where the gross margin is not positive
    BreakEvenSales,
    /// Undefined where break-even is undefined or not positive
    SafetyRatio,
}

impl AnalysisMetric {
    pub const ALL: [AnalysisMetric; 6] = [
        AnalysisMetric::TotalRevenue,
        AnalysisMetric::GrossProfit,
        AnalysisMetric::GrossMarginPct,
        AnalysisMetric::Ebitda,
        AnalysisMetric::BreakEvenSales,
        AnalysisMetric::SafetyRatio,
    ];

    /// Snake-case name, as used in scenario files and on the command line
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TotalRevenue => "total_revenue",
            Self::GrossProfit => "gross_profit",
            Self::GrossMarginPct => "gross_margin_pct",
            Self::Ebitda => "ebitda",
            Self::BreakEvenSales => "break_even_sales",
            Self::SafetyRatio => "safety_ratio",
        }
    }

    /// Get a display label for the metric
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalRevenue => "Revenue",
            Self::GrossProfit => "Gross profit",
            Self::GrossMarginPct => "Gross margin",
            Self::Ebitda => "EBITDA",
            Self::BreakEvenSales => "Break-even sales",
            Self::SafetyRatio => "Safety ratio",
        }
    }

    /// Whether the metric is a ratio rather than a currency amount
    #[must_use]
    pub fn is_ratio(self) -> bool {
        matches!(self, Self::GrossMarginPct | Self::SafetyRatio)
    }

    /// Read the metric from a result
    #[must_use]
    pub fn value(self, result: &PnlResult) -> Option<f64> {
        match self {
            Self::TotalRevenue => Some(result.total_revenue),
            Self::GrossProfit => Some(result.gross_profit),
            Self::GrossMarginPct => Some(result.gross_margin_pct),
            Self::Ebitda => Some(result.ebitda),
            Self::BreakEvenSales => result.break_even_sales,
            Self::SafetyRatio => result.safety_ratio,
        }
    }
}

impl FromStr for AnalysisMetric {
    type Err = String;

    /// Accepts the snake-case name in any case, with `-` for `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| format!("unknown metric {s:?}"))
    }
}

impl SweepResults {
    /// Compute a single metric for all points, returning a grid of values.
    #[must_use]
    pub fn metric_grid(&self, metric: AnalysisMetric) -> SweepGrid<Option<f64>> {
        self.cells.map(|cell| metric.value(&cell.result))
    }

    /// Two-dimensional table of a metric, rows along `row_dim` and columns
    /// along `col_dim`; remaining dimensions are held at `fixed`.
    #[must_use]
    pub fn metric_table(
        &self,
        metric: AnalysisMetric,
        row_dim: usize,
        col_dim: usize,
        fixed: &[Option<usize>],
    ) -> Option<Vec<Vec<Option<f64>>>> {
        let rows = self.cells.slice_2d(row_dim, col_dim, fixed)?;
        Some(
            rows.into_iter()
                .map(|row| row.into_iter().map(|c| metric.value(&c.result)).collect())
                .collect(),
        )
    }

    /// Indices of the cell with the largest defined value of `metric`
    #[must_use]
    pub fn best_cell(&self, metric: AnalysisMetric) -> Option<Vec<usize>> {
        self.cells
            .iter()
            .filter_map(|(indices, cell)| metric.value(&cell.result).map(|v| (indices, v)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(indices, _)| indices)
    }
}
