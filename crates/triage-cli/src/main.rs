use std::process::ExitCode;

use clap::Parser;
use triage_cli::{run, Cli};
use triage_core::errors::TriageErrorCode;
use triage_core::logging::{init_tracing, LogFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogFormat::from_env());

    match run(&cli) {
        Ok(outcome) => {
            tracing::info!(
                output = %cli.output.display(),
                clusters = outcome.kpis.cluster_count,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err.coded_message());
            ExitCode::FAILURE
        }
    }
}
