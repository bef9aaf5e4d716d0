//! Subcommands and their execution

use std::io::Write;
use std::str::FromStr;

use bottega_core::analysis::{AnalysisMetric, SweepConfig, SweepParameter, sweep};
use bottega_core::model::ParamField;
use bottega_core::{ParameterSet, compute_pnl};
use clap::Subcommand;
use color_eyre::eyre::{WrapErr, bail};

use crate::data::{DataDirectory, ScenarioData};
use crate::report::{DEFAULT_SWEEP_METRICS, OutputFormat, render_report, render_sweep};

/// Comma-separated list of sweep deltas, e.g. `-2,0,2`
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaList(pub Vec<f64>);

impl FromStr for DeltaList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|_| format!("invalid delta {part:?}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(DeltaList)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the monthly P&L statement for a scenario
    Report {
        /// Scenario file or stored scenario name (default: the reference scenario)
        scenario: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print a sensitivity table over one or more parameters
    Sweep {
        /// Scenario file or stored scenario name (default: the reference scenario)
        scenario: Option<String>,

        /// Parameter to sweep; repeat together with --deltas for more dimensions
        #[arg(long = "field")]
        fields: Vec<ParamField>,

        /// Comma-separated deltas for the matching --field
        #[arg(long = "deltas", allow_hyphen_values = true)]
        deltas: Vec<DeltaList>,

        /// Metric column for the text table, repeatable (default: total_revenue,
        /// ebitda, safety_ratio)
        #[arg(long = "metric")]
        metrics: Vec<AnalysisMetric>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write the reference scenario into the data directory
    Init {
        /// Name of the new scenario
        #[arg(default_value = "reference")]
        name: String,

        /// Overwrite an existing scenario with the same name
        #[arg(long)]
        force: bool,
    },

    /// Check that every parameter of a scenario is within range
    Check {
        /// Scenario file or stored scenario name
        scenario: String,
    },

    /// List the scenarios stored in the data directory
    List,
}

/// How a command finished, for the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The scenario has out-of-range parameters
    Invalid,
}

fn load(data_dir: &DataDirectory, scenario: Option<&str>) -> color_eyre::Result<ScenarioData> {
    match scenario {
        Some(scenario) => data_dir
            .load_scenario(scenario)
            .wrap_err_with(|| format!("Failed to load scenario {scenario:?}")),
        None => Ok(ScenarioData::reference()),
    }
}

/// Log out-of-range inputs without refusing to compute
fn warn_on_violations(name: &str, params: &ParameterSet) {
    for violation in params.violations() {
        tracing::warn!(
            scenario = name,
            field = %violation.field,
            value = violation.value,
            reason = violation.reason,
            "parameter out of range"
        );
    }
}

/// Pair up `--field` and `--deltas`, or fall back to the scenario's grid
fn sweep_config(
    scenario: &ScenarioData,
    fields: &[ParamField],
    deltas: &[DeltaList],
) -> color_eyre::Result<SweepConfig> {
    if fields.len() != deltas.len() {
        bail!(
            "got {} --field and {} --deltas; each field needs its own delta list",
            fields.len(),
            deltas.len()
        );
    }
    if fields.is_empty() {
        return Ok(scenario.sweep_config());
    }
    let parameters = fields
        .iter()
        .zip(deltas)
        .map(|(field, deltas)| SweepParameter::new(*field, deltas.0.clone()))
        .collect();
    Ok(SweepConfig::new(parameters))
}

fn write_text(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Run a command, writing its output to `out`
pub fn run(
    command: &Command,
    data_dir: &DataDirectory,
    out: &mut dyn Write,
) -> color_eyre::Result<Outcome> {
    match command {
        Command::Report { scenario, format } => {
            let scenario = load(data_dir, scenario.as_deref())?;
            warn_on_violations(&scenario.name, &scenario.parameters);

            let result = compute_pnl(&scenario.parameters);
            tracing::debug!(
                scenario = %scenario.name,
                revenue = result.total_revenue,
                ebitda = result.ebitda,
                "computed P&L"
            );
            write_text(out, &render_report(&scenario, &result, *format)?)?;
        }
        Command::Sweep {
            scenario,
            fields,
            deltas,
            metrics,
            format,
        } => {
            let scenario = load(data_dir, scenario.as_deref())?;
            warn_on_violations(&scenario.name, &scenario.parameters);

            let config = sweep_config(&scenario, fields, deltas)?;
            let results = sweep(&scenario.parameters, &config)
                .wrap_err("Invalid sensitivity configuration")?;
            tracing::info!(
                scenario = %scenario.name,
                cells = results.total_points(),
                "sweep complete"
            );
            let metrics: &[AnalysisMetric] = if metrics.is_empty() {
                &DEFAULT_SWEEP_METRICS
            } else {
                metrics
            };
            write_text(out, &render_sweep(&scenario, &results, metrics, *format)?)?;
        }
        Command::Init { name, force } => {
            let scenario = ScenarioData {
                name: name.clone(),
                ..ScenarioData::reference()
            };
            let path = data_dir.save_scenario(&scenario, *force)?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        Command::Check { scenario } => {
            let scenario = load(data_dir, Some(scenario))?;
            let violations = scenario.parameters.violations();
            if violations.is_empty() {
                writeln!(
                    out,
                    "{}: all {} parameters within range",
                    scenario.name,
                    ParamField::COUNT
                )?;
            } else {
                writeln!(
                    out,
                    "{}: {} parameter(s) out of range",
                    scenario.name,
                    violations.len()
                )?;
                for violation in &violations {
                    writeln!(out, "  {violation}")?;
                }
                return Ok(Outcome::Invalid);
            }
        }
        Command::List => {
            let names = data_dir.list_scenarios()?;
            if names.is_empty() {
                tracing::info!(
                    data_dir = %data_dir.root().display(),
                    "no stored scenarios (run `bottega init`)"
                );
            }
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(Outcome::Success)
}
