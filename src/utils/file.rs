use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a file's entire contents into a String.
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err` - I/O error or UTF-8 decoding error, with the path attached
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
