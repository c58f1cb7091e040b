use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

pub const SCRIPT_FILE_NAME: &str = "script.lua";
pub const SCRIPT_MIME_TYPE: &str = "text/plain";

/// Resolves where a download lands: directories get `script.lua` inside them.
pub fn script_path(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(SCRIPT_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}

/// Writes the script through a temp file in the destination directory, so an interrupted
/// write never leaves a truncated script behind.
pub fn write_script(target: &Path, script: &str) -> Result<PathBuf> {
    let path = script_path(target);
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .with_context(|| format!("Failed to create output directory '{}'.", parent.display()))?;
    let mut temp = NamedTempFile::new_in(&parent)
        .context("Failed to create temporary script file in output directory.")?;
    temp.write_all(script.as_bytes())?;
    temp.persist(&path)
        .with_context(|| format!("Failed to write script to '{}'.", path.display()))?;
    info!(path = %path.display(), bytes = script.len(), "wrote script");
    Ok(path)
}
