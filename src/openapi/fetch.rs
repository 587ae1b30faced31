// src/openapi/fetch.rs
// =============================================================================
// This module downloads the published OpenAPI document.
//
// Strategy:
// - One GET request, no custom headers, no retry
// - Any non-2xx status is an error
// - The body is read as raw bytes and parsed separately, so a bad
//   response body (including invalid UTF-8) is reported as a parse error
//   rather than a transport error
// =============================================================================

use bytes::Bytes;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, SyncError};

// Fetches and parses the OpenAPI document at `url`
//
// Returns: the parsed document, treated as opaque JSON by the rest of the app
//
// Errors:
//   SyncError::Fetch  - request failed before a response arrived
//   SyncError::Status - server answered with a non-success status
//   SyncError::Parse  - body is not valid JSON
pub async fn fetch_document(client: &Client, url: &str) -> Result<Value> {
    info!("Fetching OpenAPI spec from: {}", url);

    let body = fetch_body(client, url).await?;
    debug!("Received {} bytes", body.len());

    let document = serde_json::from_slice(&body).map_err(|source| SyncError::Parse {
        url: url.to_string(),
        source,
    })?;

    info!("✓ Fetched OpenAPI spec");
    Ok(document)
}

async fn fetch_body(client: &Client, url: &str) -> Result<Bytes> {
    let fetch_error = |source: reqwest::Error| SyncError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SyncError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.bytes().await.map_err(fetch_error)
}
