//! cem-pfs-replay - run a decoded CEM recording through the parking feature
//! validators.
//!
//! # Usage
//!
//! ```bash
//! # With default config (configs/config.yaml, or built-in defaults)
//! cargo run --release -p cem-pfs-replay -- --recording recordings/slot_pass.yaml
//!
//! # With custom config file, JSON report on stdout
//! cargo run --release -p cem-pfs-replay -- -r recordings/slot_pass.yaml -c strict.yaml --json
//! ```
//!
//! Exit code 0 if the run passed, 1 if any check failed, 2 if the recording
//! or config could not be loaded.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use cem_pfs::{EvalConfig, Recording, RunEvaluator};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recording YAML file
    #[arg(short, long)]
    recording: PathBuf,

    /// Config YAML file (defaults to configs/config.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> cem_pfs::Result<cem_pfs::RunReport> {
    let config = match &args.config {
        Some(path) => EvalConfig::load(path)?,
        None => EvalConfig::load_default()?,
    };
    let evaluator = RunEvaluator::new(config)?;

    let recording = Recording::load(&args.recording)?;
    info!(
        "Loaded {}: {} frames, {} poses, ground truth: {}",
        recording.name,
        recording.timeframes.len(),
        recording.poses.len(),
        recording
            .ground_truth
            .as_ref()
            .map_or_else(|| "none".to_string(), |gt| format!("{} features", gt.len()))
    );

    Ok(evaluator.evaluate(&recording))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    let report = match run(&args) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to encode report: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        report.print();
    }

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
