//! File boundary for snapshots.
//!
//! Reading and writing are single-shot; callers treat "no file selected" as
//! a no-op before reaching here.

use crate::snapshot::SnapshotError;
use log::info;
use std::fs;
use std::path::Path;

/// Reads a snapshot document as UTF-8 text.
pub fn read_snapshot_file(path: &Path) -> Result<String, SnapshotError> {
    let text = fs::read_to_string(path)?;
    info!(
        "event=snapshot_read module=snapshot status=ok path={} bytes={}",
        path.display(),
        text.len()
    );
    Ok(text)
}

/// Writes a snapshot document, replacing any existing file.
pub fn write_snapshot_file(path: &Path, text: &str) -> Result<(), SnapshotError> {
    fs::write(path, text)?;
    info!(
        "event=snapshot_write module=snapshot status=ok path={} bytes={}",
        path.display(),
        text.len()
    );
    Ok(())
}
