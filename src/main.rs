// src/main.rs
// =============================================================================
// Entry point of openapi-sync.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up console logging (tracing, written to stderr)
// 3. Fetch the OpenAPI document, merge in the code samples, write it out
// 4. Exit with proper code (0 = success, 1 = error)
//
// The steps run strictly in order. If fetching fails, nothing is written,
// so an existing output file is never clobbered by a failed run.
// =============================================================================

mod cli;
mod error;
mod merge;
mod openapi;
mod samples;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::SyncError;
use samples::ExampleTable;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Error: {:#}", e);
            if e.downcast_ref::<SyncError>().is_some_and(SyncError::is_retrieval) {
                eprintln!("  No changes were written.");
            }
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so that --dry-run output on stdout stays valid JSON.
// RUST_LOG takes precedence over --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "openapi_sync=debug" } else { "openapi_sync=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    info!("🔄 Syncing OpenAPI specification...");

    let table = ExampleTable::builtin().context("invalid built-in code sample table")?;
    debug!("Loaded code samples for {} operation(s)", table.len());

    let client = Client::new();
    let mut document = openapi::fetch_document(&client, cli.url.as_str()).await?;

    let enriched = merge::merge_code_samples(&mut document, &table);
    let sample_count: usize = enriched.iter().map(|e| e.samples).sum();
    info!(
        "Enriched {} operation(s) with {} code sample(s)",
        enriched.len(),
        sample_count
    );

    if cli.dry_run {
        print!("{}", openapi::render_document(&document)?);
        info!("Dry run, {} left unchanged", cli.output.display());
        return Ok(());
    }

    openapi::write_document(&document, &cli.output)?;

    info!("✅ OpenAPI sync complete!");
    Ok(())
}
