use std::path::Path;
use std::process::Command;

use chrono::NaiveDateTime;

use super::{parse_capture_time, CAPTURE_FORMAT};
use crate::error::ResolveError;

/// Ask exiftool for a video's `CreationDate`, formatted as `YYYY:MM:DD HH:MM:SS`.
///
/// `-s -S` drop the tag name so stdout carries only the value. Empty output
/// (tag not present) is `Ok(None)`; a non-zero exit is an error.
pub fn query_creation_date(tool: &Path, path: &Path) -> Result<Option<NaiveDateTime>, ResolveError> {
    let output = Command::new(tool)
        .args(["-CreationDate", "-d", CAPTURE_FORMAT, "-s", "-S"])
        .arg(path)
        .output()
        .map_err(|source| ResolveError::Spawn {
            tool: tool.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(ResolveError::ToolFailed {
            tool: tool.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim().is_empty() {
        return Ok(None);
    }
    parse_capture_time(&stdout).map(Some)
}
