use analytics::{format_currency, format_percent, CalculationResult, MetricsEngine};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::Property;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use std::path::PathBuf;
use store::{connect, run_migrations, PropertyRepository};
use tracing_subscriber::EnvFilter;

/// The main entry point for the perch analysis CLI.
#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => {
            if let Err(e) = handle_analyze(args) {
                eprintln!("Error during analysis: {}", e);
            }
        }
        Commands::Import(args) => {
            if let Err(e) = handle_import(args).await {
                eprintln!("Error during import: {}", e);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Investment analysis for short-term-rental properties.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute investment metrics for a single property record.
    Analyze(AnalyzeArgs),
    /// Bulk-load property records from a JSON file into the local store.
    Import(ImportArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to a JSON file holding one property record.
    #[arg(long)]
    file: PathBuf,
}

#[derive(Parser)]
struct ImportArgs {
    /// Path to a JSON file holding an array of property records.
    #[arg(long)]
    file: PathBuf,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Computes and renders the metrics report for one property record.
fn handle_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)?;
    let property: Property = serde_json::from_str(&text)?;

    let result = MetricsEngine::new().calculate(&property);

    println!("{}", property.address);
    println!("{}", report_table(&result));
    Ok(())
}

/// Lays the result out as a two-column terminal table. Metrics that are
/// undefined for the given input render as "N/A".
fn report_table(result: &CalculationResult) -> Table {
    let currency = |value: Option<Decimal>| {
        value.map(format_currency).unwrap_or_else(|| "N/A".to_string())
    };
    let percent = |value: Option<Decimal>| {
        value.map(format_percent).unwrap_or_else(|| "N/A".to_string())
    };

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Monthly income".to_string(),
        format_currency(result.monthly_income),
    ]);
    table.add_row(vec![
        "Monthly operating expenses".to_string(),
        format_currency(result.monthly_expenses),
    ]);
    table.add_row(vec![
        "Monthly mortgage".to_string(),
        currency(result.monthly_mortgage),
    ]);
    table.add_row(vec!["Cash flow".to_string(), currency(result.cash_flow)]);
    table.add_row(vec![
        "Total investment".to_string(),
        format_currency(result.total_investment),
    ]);
    table.add_row(vec![
        "Cash-on-cash return".to_string(),
        percent(result.cash_on_cash_return),
    ]);
    table.add_row(vec!["Cap rate".to_string(), percent(result.cap_rate)]);
    table
}

// ==============================================================================
// Import Command Logic
// ==============================================================================

/// Handles the orchestration of the bulk import process.
async fn handle_import(args: ImportArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)?;
    let properties: Vec<Property> = serde_json::from_str(&text)?;

    println!("Importing {} properties from {}", properties.len(), args.file.display());

    let pool = connect().await?;
    run_migrations(&pool).await?;
    let repository = PropertyRepository::new(pool);

    // Set up the progress bar
    let progress_bar = ProgressBar::new(properties.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );

    // Inserts stay sequential: the store is one local file, and concurrent
    // writers would only contend on its lock.
    for property in &properties {
        progress_bar.set_message(format!("Saving {}...", property.address));
        repository.insert_property(property).await?;
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("Import complete!");
    Ok(())
}
