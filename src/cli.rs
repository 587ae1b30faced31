// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Every flag is optional: running `openapi-sync` with no arguments fetches
// the production document and writes api-reference/openapi.json.
// =============================================================================

use std::path::PathBuf;

use clap::Parser;
use url::Url;

/// Production location of the published OpenAPI document
pub const DEFAULT_URL: &str = "https://api.emitkit.com/api/openapi.json";

/// Where the merged document is written, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "api-reference/openapi.json";

#[derive(Parser, Debug)]
#[command(
    name = "openapi-sync",
    version,
    about = "Sync the OpenAPI document for the API reference and merge in SDK code samples",
    long_about = "openapi-sync downloads the published OpenAPI document, attaches the SDK \
                  code samples (x-codeSamples) to the operations they document, and writes \
                  the result as pretty-printed JSON."
)]
pub struct Cli {
    /// URL of the OpenAPI document to fetch
    ///
    /// Parsed as a url::Url, so relative or malformed URLs are rejected
    /// before any request is made
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: Url,

    /// File to write the merged document to
    ///
    /// The parent directory must exist; the file itself is replaced
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the merged document to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Show debug output (skipped operations, response size)
    #[arg(short, long)]
    pub verbose: bool,
}
