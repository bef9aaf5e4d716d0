use std::path::PathBuf;
use std::process::ExitCode;

use bottega::{Command, DataDirectory, LogTarget, Outcome, init_logging, run};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bottega")]
#[command(about = "Monthly P&L and sensitivity analysis for a small food-service business")]
struct Args {
    /// Path to the data directory (default: ~/.bottega/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to bottega.log in the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    let target = if args.log_file {
        LogTarget::File(data_dir.clone())
    } else {
        LogTarget::Stderr
    };
    init_logging(&target, &args.log_level)?;

    let data_dir = DataDirectory::new(data_dir);
    let outcome = run(&args.command, &data_dir, &mut std::io::stdout().lock())?;

    Ok(match outcome {
        Outcome::Success => ExitCode::SUCCESS,
        Outcome::Invalid => ExitCode::FAILURE,
    })
}
