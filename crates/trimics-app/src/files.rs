//! Reading and writing calendar files.

use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads the whole input file.
///
/// ## Errors
/// [`AppError::FileNotFound`], [`AppError::PermissionDenied`] or
/// [`AppError::Io`] depending on why the read failed.
pub fn read_calendar(path: &Path) -> AppResult<Vec<u8>> {
    tracing::debug!("Reading calendar entries from '{}'", path.display());
    let bytes = fs::read(path).map_err(|e| AppError::from_read(path, e))?;
    tracing::debug!("'{}' size is {} bytes", path.display(), bytes.len());
    Ok(bytes)
}

/// ## Summary
/// Writes `text` to the output file, replacing it if it exists.
///
/// ## Errors
/// [`AppError::OutputNotWritable`] if the write fails.
pub fn write_calendar(path: &Path, text: &str) -> AppResult<()> {
    fs::write(path, text).map_err(|e| AppError::from_write(path, e))
}
