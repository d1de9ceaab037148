//! # triage-cli
//!
//! Wires the configured capabilities into the pipeline:
//! config → input table → pipeline → report workbook.

use std::path::PathBuf;

use clap::Parser;
use triage_clustering::{HdbscanClusterer, PcaReducer};
use triage_core::errors::TriageResult;
use triage_core::traits::IReportSink;
use triage_core::TriageConfig;
use triage_embeddings::BatchedEmbedder;
use triage_io::{load_records, XlsxReportSink};
use triage_pipeline::{run_pipeline, PipelineContext, PipelineOutcome, YakeExtractor};
use tracing::{debug, info, Level};

/// Cluster support tickets and summarize them in an Excel overview.
#[derive(Parser, Debug, Clone)]
#[command(name = "ticket-triage", version, about)]
pub struct Cli {
    /// Input table: .csv, or a spreadsheet workbook (first sheet)
    #[arg(long, default_value = "input.xlsx")]
    pub input: PathBuf,

    /// YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Output workbook
    #[arg(long, default_value = "overview.xlsx")]
    pub output: PathBuf,
}

/// Build the capability stack described by `config`.
pub fn build_context(config: &TriageConfig) -> TriageResult<PipelineContext> {
    Ok(PipelineContext::new(
        Box::new(BatchedEmbedder::from_config(&config.embedding)?),
        Box::new(PcaReducer::new(config.reducer.clone())),
        Box::new(HdbscanClusterer::new(config.clusterer.clone())),
        Box::new(YakeExtractor::default()),
    ))
}

/// Run one triage job end to end.
pub fn run(cli: &Cli) -> TriageResult<PipelineOutcome> {
    let config = TriageConfig::load(&cli.config)?;
    info!(
        config = %cli.config.display(),
        provider = %config.embedding.provider,
        "configuration loaded"
    );
    if tracing::enabled!(Level::DEBUG) {
        debug!(effective = %config.to_yaml()?, "effective configuration");
    }

    let records = load_records(&cli.input)?;
    let ctx = build_context(&config)?;
    let outcome = run_pipeline(&records, &config, &ctx)?;

    let include_assignments = config.output.include_assignments;
    XlsxReportSink::new(&cli.output)
        .with_assignments(include_assignments)
        .write(&outcome.report(include_assignments))?;
    Ok(outcome)
}
