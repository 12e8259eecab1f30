//! Tally command-line report.
//!
//! Reads a bank ledger statement spreadsheet and prints its balance report
//! with class and group subtotals.

mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::import::StatementExtractor;
use tally_core::reports::{ReportError, ReportLabels, ReportService};
use tally_core::store::StatementStore;
use tally_shared::AppConfig;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Balance report with class and group subtotals for a ledger statement"
)]
struct Cli {
    /// Statement spreadsheet (xls, xlsx, xlsb or ods).
    file: PathBuf,

    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr, the report to stdout
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info,tally_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let labels = ReportLabels::from_config(&config.report)?;

    let statement = StatementExtractor::new(config.sheet.clone())
        .extract_path(&cli.file)
        .map_err(ReportError::from)
        .with_context(|| format!("Failed to import {}", cli.file.display()))?;

    let store = StatementStore::new();
    let outcome = store.import(statement);
    info!(statement = %outcome.statement, rows = outcome.rows, "Building report");

    let report = ReportService::generate(&store, &outcome.statement, &labels)?
        .rounded(config.report.display_scale);

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        render::write_table(&mut stdout, &report, config.report.display_scale)?;
    }

    Ok(())
}
