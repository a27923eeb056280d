//! Prints the half-adder truth table and stores it as JSON.
//!
//! ```shell
//! RUST_LOG=debug cargo run --bin half-adder -- --trace --output half_adder_results.json
//! ```

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{error, info};
use tristate_circuit::{DEFAULT_MAX_ITERATIONS, ReportError, RunConfig, logging, report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Upper bound on evaluation passes per run
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Log the schedule and every wire change
    #[arg(long)]
    trace: bool,

    /// JSON file with a run configuration; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to store the results
    #[arg(long, default_value = "half_adder_results.json")]
    output: PathBuf,

    /// Print the table without writing the results file
    #[arg(long)]
    no_save: bool,
}

impl Args {
    fn run_config(&self) -> Result<RunConfig, ReportError> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => RunConfig::default(),
        };
        if let Some(max_iterations) = self.max_iterations {
            config = config.with_max_iterations(max_iterations);
        }
        if self.trace {
            config = config.with_trace(true);
        }
        Ok(config)
    }
}

fn run(args: &Args) -> Result<bool, ReportError> {
    let config = args.run_config()?;
    if config.max_iterations < DEFAULT_MAX_ITERATIONS {
        info!("running with a reduced budget of {} pass(es)", config.max_iterations);
    }

    let report = report::run_half_adder_table(&config)?;
    println!("{}", report.render_table());

    if !args.no_save {
        report.save(&args.output)?;
        println!("Results saved to {}", args.output.display());
    }

    Ok(report.all_ok())
}

fn main() -> ExitCode {
    logging::init_tracing("info");
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("half-adder output does not match the expected table");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
