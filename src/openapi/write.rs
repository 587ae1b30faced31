// src/openapi/write.rs
// =============================================================================
// This module writes the merged OpenAPI document to disk.
//
// Output format:
// - Pretty-printed JSON, 2-space indentation
// - Keys in the order they appeared in the fetched document
// - Exactly one trailing newline
//
// The file is written to a temporary file next to the destination and then
// renamed over it, so readers never see a half-written document.
// =============================================================================

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::Builder;
use tracing::{debug, info};

use crate::error::{Result, SyncError};

// Renders the document exactly as it will be written to disk
pub fn render_document(document: &Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(document).map_err(SyncError::Serialize)?;
    text.push('\n');
    Ok(text)
}

// Writes the document to `destination`, replacing any existing file
//
// The parent directory must already exist. On failure the previous
// contents of `destination` are left in place. An existing file keeps its
// permissions; a new one is created as 0644 (less the umask) on unix.
pub fn write_document(document: &Value, destination: &Path) -> Result<()> {
    info!("Saving to: {}", destination.display());

    let text = render_document(document)?;

    let write_error = |source: std::io::Error| SyncError::Write {
        path: destination.to_path_buf(),
        source,
    };

    // An empty parent means the destination is a bare file name
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(destination).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    if let Some(permissions) = new_file_permissions() {
        builder.permissions(permissions);
    }
    let mut file = builder.tempfile_in(dir).map_err(write_error)?;

    // Set after creation so the umask does not narrow the existing mode
    if let Some(permissions) = existing {
        debug!("Keeping permissions of {}", destination.display());
        file.as_file().set_permissions(permissions).map_err(write_error)?;
    }

    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(destination).map_err(|e| write_error(e.error))?;

    info!("✓ OpenAPI spec saved successfully");
    Ok(())
}

// Temp files default to 0600; new output files get the usual 0644
#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
