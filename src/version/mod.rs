//! Suite version lookup from the website's JSON sidecar.
//!
//! The website keeps the current release number in `data/version.json`:
//!
//! ```json
//! { "version": "39.34" }
//! ```
//!
//! Reading it fails open. A missing file, malformed JSON, a non-object root, or
//! a missing or unusable `version` field all produce the configured default.
//! The reason is logged at debug level and never surfaces to the caller.

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::path::Path;

use crate::core::DocgenError;

/// Read the version from `path`, or return `default` if that is not possible.
///
/// # Examples
///
/// ```rust,no_run
/// use bbdocgen::version::load_version;
/// use std::path::Path;
///
/// let version = load_version(Path::new("website/data/version.json"), "39.34");
/// println!("BBTools v{version}");
/// ```
#[must_use]
pub fn load_version(path: &Path, default: &str) -> String {
    if !path.exists() {
        tracing::debug!(
            target: "version",
            "No version sidecar at {}, using default {}",
            path.display(),
            default
        );
        return default.to_string();
    }

    match read_version(path) {
        Ok(version) => {
            tracing::debug!(target: "version", "Using version {} from {}", version, path.display());
            version
        }
        Err(e) => {
            tracing::debug!(target: "version", "{:#}; using default {}", e, default);
            default.to_string()
        }
    }
}

/// Strictly read the `version` field of the sidecar.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not JSON, or has no string
/// or numeric `version` field at the top level.
pub fn read_version(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read version sidecar {}", path.display()))?;

    let json: JsonValue = serde_json::from_str(&content).map_err(|e| {
        DocgenError::VersionSidecarInvalid {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    let invalid = |reason: &str| DocgenError::VersionSidecarInvalid {
        path: path.display().to_string(),
        reason: reason.to_string(),
    };

    match json.get("version") {
        Some(JsonValue::String(version)) => Ok(version.clone()),
        Some(JsonValue::Number(number)) => Ok(number.to_string()),
        Some(_) => Err(invalid("`version` is neither a string nor a number").into()),
        None => Err(invalid("no `version` field").into()),
    }
}
