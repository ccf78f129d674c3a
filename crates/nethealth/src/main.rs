use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nethealth_core::combine::FacilityRecord;
use nethealth_core::outputs;
use nethealth_core::pipeline::{self, ReportPaths};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "NetHealth weekly report ingest for TheraScope", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process the four weekly NetHealth exports into one facility dataset
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Productivity report workbook (one sheet per facility)
    productivity: PathBuf,
    /// CPM (expense per treatment minute) report workbook
    cpm: PathBuf,
    /// Census report workbook (Med B caseload)
    census: PathBuf,
    /// Mode of treatment report workbook (C/G percentages)
    mode_of_treatment: PathBuf,
    /// Output path for the combined facility dataset
    #[arg(long, default_value = "facility_data_nethealth.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let paths = ReportPaths {
        productivity: args.productivity,
        cpm: args.cpm,
        census: args.census,
        mode_of_treatment: args.mode_of_treatment,
    };

    let records =
        pipeline::process_reports(&paths).context("failed to process NetHealth reports")?;
    for record in &records {
        log_record(record);
    }

    outputs::write_records(&args.output, &records)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        records = records.len(),
        output = %args.output.display(),
        "Facility dataset saved"
    );

    Ok(())
}

fn log_record(record: &FacilityRecord) {
    info!(
        facility = %record.facility,
        region = %record.region,
        productivity = record.productivity,
        cpm = record.cpm,
        med_b = %format!("{}/{}", record.med_b_caseload, record.med_b_eligible),
        mode = record.mode_of_treatment.unwrap_or(0.0),
        "Combined facility record"
    );
}
