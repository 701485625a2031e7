use std::process::ExitCode;

use clap::Parser;
use cliche_scales::{compute_scales, ScalesResult, DEFAULT_H0_KM_S_MPC};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about = "Compute Planck and Cliche scales for a given H0.")]
struct Cli {
    /// Hubble constant in km s^-1 Mpc^-1
    #[clap(
        long = "H0",
        value_name = "H0",
        default_value_t = DEFAULT_H0_KM_S_MPC,
        allow_hyphen_values = true
    )]
    h0: f64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Render the report for the parsed arguments.
fn run(args: &Cli) -> ScalesResult<String> {
    Ok(compute_scales(args.h0)?.to_string())
}

fn main() -> ExitCode {
    init_logging();

    // parse command line parameters
    let args = Cli::parse();

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
