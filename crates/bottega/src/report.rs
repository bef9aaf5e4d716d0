//! Report rendering for the `report` and `sweep` commands

use std::fmt::Write;

use bottega_core::analysis::{AnalysisMetric, SweepResults};
use bottega_core::model::{ParameterSet, PnlResult};
use serde::Serialize;

use crate::data::ScenarioData;
use crate::util::format::{
    format_decimal, format_delta, format_eur, format_optional, format_pct, format_ratio,
};

/// Output encoding selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    Yaml,
    Json,
}

/// Error encoding a report as YAML or JSON
#[derive(Debug)]
pub struct EncodeError(String);

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to encode report: {}", self.0)
    }
}

impl std::error::Error for EncodeError {}

/// Machine-readable P&L report
#[derive(Debug, Serialize)]
pub struct PnlReport<'a> {
    pub scenario: &'a str,
    pub parameters: &'a ParameterSet,
    pub result: &'a PnlResult,
}

/// Machine-readable sweep report
#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub scenario: &'a str,
    pub sweep: &'a SweepResults,
}

fn encode<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, EncodeError> {
    match format {
        OutputFormat::Yaml => serde_saphyr::to_string(value).map_err(|e| EncodeError(e.to_string())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| EncodeError(e.to_string()))
        }
        OutputFormat::Text => Err(EncodeError("text is not a data encoding".to_string())),
    }
}

const LABEL_WIDTH: usize = 32;
const AMOUNT_WIDTH: usize = 14;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value:>AMOUNT_WIDTH$}");
}

/// Render the monthly P&L for one scenario
pub fn render_report(
    scenario: &ScenarioData,
    result: &PnlResult,
    format: OutputFormat,
) -> Result<String, EncodeError> {
    if format != OutputFormat::Text {
        let report = PnlReport {
            scenario: &scenario.name,
            parameters: &scenario.parameters,
            result,
        };
        return encode(&report, format);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", scenario.name.to_uppercase());
    if let Some(description) = &scenario.description {
        let _ = writeln!(out, "{description}");
    }
    let _ = writeln!(out);

    heading(&mut out, "Monthly snapshot");
    row(&mut out, "Revenue", &format_eur(result.total_revenue));
    row(&mut out, "EBITDA", &format_eur(result.ebitda));
    row(
        &mut out,
        "Labor + fixed costs",
        &format_eur(result.operating_costs()),
    );
    row(&mut out, "Gross margin on sales", &format_pct(result.gross_margin_pct));
    row(
        &mut out,
        "Break-even sales",
        &format_optional(result.break_even_sales, format_eur),
    );
    row(
        &mut out,
        "Revenue above break-even",
        &format_optional(result.revenue_above_break_even(), format_eur),
    );
    row(
        &mut out,
        "Safety ratio",
        &format_optional(result.safety_ratio, format_ratio),
    );
    row(
        &mut out,
        "Open days per month",
        &format_decimal(result.open_days_per_month, 1),
    );
    let _ = writeln!(out);

    heading(&mut out, "P&L statement (per month)");
    for line in result.statement() {
        let label = if line.item.is_total() {
            format!("* {}", line.item.label())
        } else {
            format!("  {}", line.item.label())
        };
        row(&mut out, &label, &format_eur(line.amount));
    }
    let _ = writeln!(out);

    heading(&mut out, "Cost breakdown");
    let costs = result.cost_breakdown();
    let total = costs.total();
    for (label, amount) in [
        ("Food cost", costs.food),
        ("Labor", costs.labor),
        ("Fixed costs", costs.fixed),
    ] {
        let share = if total > 0.0 { amount / total } else { 0.0 };
        row(
            &mut out,
            &format!("{label} ({})", format_pct(share)),
            &format_eur(amount),
        );
    }

    Ok(out)
}

/// Columns shown by `bottega sweep` when no `--metric` is given
pub const DEFAULT_SWEEP_METRICS: [AnalysisMetric; 3] = [
    AnalysisMetric::TotalRevenue,
    AnalysisMetric::Ebitda,
    AnalysisMetric::SafetyRatio,
];

fn format_metric(metric: AnalysisMetric, value: Option<f64>) -> String {
    match metric {
        AnalysisMetric::GrossMarginPct => format_optional(value, format_pct),
        m if m.is_ratio() => format_optional(value, format_ratio),
        _ => format_optional(value, format_eur),
    }
}

/// Render a sensitivity table: one row per cell, deltas then one column per
/// metric. YAML and JSON carry every cell's full result instead.
pub fn render_sweep(
    scenario: &ScenarioData,
    results: &SweepResults,
    metrics: &[AnalysisMetric],
    format: OutputFormat,
) -> Result<String, EncodeError> {
    if format != OutputFormat::Text {
        let report = SweepReport {
            scenario: &scenario.name,
            sweep: results,
        };
        return encode(&report, format);
    }

    let delta_widths: Vec<usize> = results
        .labels
        .iter()
        .map(|label| label.chars().count().max(6) + 2)
        .collect();
    let metric_widths: Vec<usize> = metrics
        .iter()
        .map(|m| (m.label().chars().count() + 2).max(AMOUNT_WIDTH))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Sensitivity: {}", scenario.name);
    let _ = writeln!(out);

    let mut header = String::new();
    for (label, width) in results.labels.iter().zip(&delta_widths) {
        let _ = write!(header, "{label:<width$}");
    }
    for (metric, width) in metrics.iter().zip(&metric_widths) {
        let _ = write!(header, "{:>width$}", metric.label());
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));

    for cell in results.iter() {
        for (delta, width) in cell.deltas.iter().zip(&delta_widths) {
            let _ = write!(out, "{:<width$}", format_delta(*delta));
        }
        for (metric, width) in metrics.iter().zip(&metric_widths) {
            let value = format_metric(*metric, metric.value(&cell.result));
            let _ = write!(out, "{value:>width$}");
        }
        let _ = writeln!(out);
    }

    Ok(out)
}
