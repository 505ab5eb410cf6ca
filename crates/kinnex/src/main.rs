use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use kinnex_core::config::DbConfig;
use kinnex_core::{db, export, qc, sheet};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Kinnex samplesheet tools and RNA QC sync", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a lab Kinnex RNA export into the canonical samplesheet
    Convert {
        /// Lab CSV as exported from the Kinnex template
        input: PathBuf,
        /// Destination for the canonical samplesheet CSV
        output: PathBuf,
    },
    /// Push RNA QC read counts into the sequencing database
    PushQc(PushQcArgs),
    /// Build a samplesheet from the database reference tables
    ExportSheet(ExportSheetArgs),
}

#[derive(Args, Debug)]
struct PushQcArgs {
    /// TOML file with the [postgres] connection settings
    #[arg(long)]
    config: PathBuf,
    /// Tab-separated read-count table
    #[arg(long, default_value = "rna_read_counts.tsv")]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct ExportSheetArgs {
    /// TOML file with the [postgres] connection settings
    #[arg(long)]
    config: PathBuf,
    /// Destination for the samplesheet CSV
    #[arg(long)]
    output: PathBuf,
    /// Export every library tube sequenced on this run
    #[arg(long, conflicts_with = "rna_id")]
    run_id: Option<String>,
    /// Export these RNA IDs (repeatable)
    #[arg(long = "rna-id")]
    rna_id: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert { input, output } => {
            let written = sheet::convert_file(&input, &output)
                .with_context(|| format!("converting {}", input.display()))?;
            println!("Wrote {} rows to {}", written, output.display());
        }
        Command::PushQc(args) => {
            info!(input = %args.input.display(), "importing QC read counts");
            // Config and input validation both happen before any
            // connection is opened.
            let config = DbConfig::from_file(&args.config)?;
            let records = qc::read_qc_table(&args.input)
                .with_context(|| format!("reading {}", args.input.display()))?;

            let pool = db::connect(&config.url()).await?;
            let report = qc::push_qc_records(&pool, &records).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::ExportSheet(args) => {
            let config = DbConfig::from_file(&args.config)?;
            let pool = db::connect(&config.url()).await?;

            let rows = if let Some(run_id) = &args.run_id {
                export::fetch_rows_for_run(&pool, run_id).await?
            } else if !args.rna_id.is_empty() {
                export::fetch_rows_for_rna_ids(&pool, &args.rna_id).await?
            } else {
                bail!("either --run-id or at least one --rna-id is required");
            };

            let written = export::write_samplesheet_csv(&args.output, &rows)?;
            println!("Wrote {} rows to {}", written, args.output.display());
        }
    }

    Ok(())
}
