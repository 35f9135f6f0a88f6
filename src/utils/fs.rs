//! File system helpers used by the generator.
//!
//! - [`ensure_dir`] creates the output directory tree
//! - [`safe_write`] writes a page atomically (temp file in the same directory,
//!   then rename) so a crash never leaves a half-written page behind
//! - [`read_text_file`] reads a UTF-8 file with path context on failure
//! - [`find_files_with_suffix`] lists the scripts of a directory

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the path exists but is not a directory, or creation fails.
///
/// # Examples
///
/// ```rust,no_run
/// use bbdocgen::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("website/tools"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Atomically writes a string to a file.
///
/// The content goes to a named temporary file next to the target, is synced to
/// disk, and is then renamed over the target. Readers see either the old page
/// or the new one. Parent directories are created when missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any write step fails.
pub fn safe_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;

    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move temp file into place: {}", path.display()))?;

    Ok(())
}

/// Reads a UTF-8 text file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Lists the regular files directly inside `dir` whose name ends with `suffix`.
///
/// The search is not recursive and skips hidden files (`.old.sh`). Results are
/// sorted by path so callers process files in a stable order. A missing
/// directory yields an empty list.
///
/// # Errors
///
/// Returns an error if the glob pattern built from `dir` is invalid.
pub fn find_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/*{}", escaped_dir.trim_end_matches(['/', '\\']), suffix);

    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options).with_context(|| format!("Invalid glob pattern: {pattern}"))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(target: "fs", "Skipping unreadable entry: {}", e);
            }
        }
    }

    files.sort();
    Ok(files)
}
