//! Configuration for a generation run.
//!
//! Values come from three layers, highest priority first:
//!
//! 1. Command-line flags (see [`crate::cli::Cli`])
//! 2. An optional TOML file passed with `--config`
//! 3. Built-in defaults from [`crate::constants`]
//!
//! # File Format
//!
//! ```toml
//! source_dir = "/opt/bbmap"
//! website_dir = "/srv/bbmap_website"
//! # output_dir defaults to "<website_dir>/tools"
//! # version_file defaults to "<website_dir>/data/version.json"
//! exclude = ["testformat", "runhmm"]
//! escape_html = false
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos do not silently
//! fall back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::core::DocgenError;

/// Contents of a `--config` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory holding the `*.sh` wrappers.
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// Website root.
    #[serde(default)]
    pub website_dir: Option<PathBuf>,

    /// Directory receiving the generated pages.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Version sidecar location.
    #[serde(default)]
    pub version_file: Option<PathBuf>,

    /// Extra tool names to skip, added to the built-in exclusion list.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// HTML-escape extracted text.
    #[serde(default)]
    pub escape_html: Option<bool>,
}

impl FileConfig {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::ConfigNotFound`] if the file does not exist and
    /// [`DocgenError::ConfigParseError`] if it is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DocgenError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
        let config = toml::from_str(&content).map_err(|e: toml::de::Error| {
            DocgenError::ConfigParseError {
                file: path.display().to_string(),
                reason: e.message().to_string(),
            }
        })?;

        tracing::debug!(target: "config", "Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise return an empty configuration.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load_from`].
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }
}

/// Command-line overrides, one per configurable value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--source-dir`
    pub source_dir: Option<PathBuf>,
    /// `--website-dir`
    pub website_dir: Option<PathBuf>,
    /// `--output-dir`
    pub output_dir: Option<PathBuf>,
    /// `--version-file`
    pub version_file: Option<PathBuf>,
    /// `--exclude` (repeatable)
    pub exclude: Vec<String>,
    /// `--escape-html`
    pub escape_html: bool,
    /// `--quiet`
    pub quiet: bool,
}

/// Fully resolved settings for one run of the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding the `*.sh` wrappers.
    pub source_dir: PathBuf,
    /// Directory receiving `<tool>.html`.
    pub output_dir: PathBuf,
    /// Version sidecar location.
    pub version_file: PathBuf,
    /// Tool names that never get a page.
    pub excluded_tools: Vec<String>,
    /// HTML-escape extracted text.
    pub escape_html: bool,
    /// Suppress progress and summary output.
    pub quiet: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), ConfigOverrides::default())
    }
}

impl GeneratorConfig {
    /// Merge command-line overrides over a file configuration over the defaults.
    ///
    /// `output_dir` and `version_file` are derived from the resolved website
    /// directory unless set explicitly.
    #[must_use]
    pub fn resolve(file: FileConfig, overrides: ConfigOverrides) -> Self {
        let source_dir = overrides
            .source_dir
            .or(file.source_dir)
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_SOURCE_DIR));
        let website_dir = overrides
            .website_dir
            .or(file.website_dir)
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_WEBSITE_DIR));
        let output_dir = overrides
            .output_dir
            .or(file.output_dir)
            .unwrap_or_else(|| website_dir.join(constants::TOOLS_SUBDIR));
        let version_file = overrides.version_file.or(file.version_file).unwrap_or_else(|| {
            constants::VERSION_SIDECAR_PATH.iter().fold(website_dir.clone(), |path, part| path.join(part))
        });

        let mut excluded_tools: Vec<String> =
            constants::EXCLUDED_TOOLS.iter().map(|name| (*name).to_string()).collect();
        for name in file.exclude.into_iter().chain(overrides.exclude) {
            if !excluded_tools.contains(&name) {
                excluded_tools.push(name);
            }
        }

        Self {
            source_dir,
            output_dir,
            version_file,
            excluded_tools,
            escape_html: overrides.escape_html || file.escape_html.unwrap_or(false),
            quiet: overrides.quiet,
        }
    }

    /// True if `tool_name` is on the exclusion list.
    #[must_use]
    pub fn is_excluded(&self, tool_name: &str) -> bool {
        self.excluded_tools.iter().any(|name| name == tool_name)
    }
}
