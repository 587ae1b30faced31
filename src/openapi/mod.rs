// src/openapi/mod.rs
// =============================================================================
// Reading and writing the OpenAPI document.
//
// Submodules:
// - fetch: Downloads the document over HTTP and parses it
// - write: Renders the document as pretty JSON and saves it atomically
//
// The document itself is a serde_json::Value. Only `paths` is ever looked
// at (by the merge module); everything else passes through untouched.
// =============================================================================

mod fetch;
mod write;

pub use fetch::fetch_document;
pub use write::{render_document, write_document};
