//! JSON file writer
//!
//! Writes reassembled responses and probe reports to disk or stdout.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Serialize `value` as JSON, pretty-printed with two-space indentation or compact
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Write `value` as JSON to `path`, creating parent directories
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T, pretty: bool) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::config(format!(
                "Failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let mut text = to_json_string(value, pretty)?;
    text.push('\n');
    fs::write(path, text)?;

    info!("Wrote {}", path.display());
    Ok(())
}

/// Write `value` as JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let text = to_json_string(value, pretty)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
