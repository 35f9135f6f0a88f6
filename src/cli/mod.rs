//! Command-line interface for bbdocgen.
//!
//! Running `bbdocgen` with no arguments regenerates every tool page using the
//! built-in locations. Flags and an optional TOML file override them:
//!
//! ```bash
//! # Default locations
//! bbdocgen
//!
//! # Explicit locations
//! bbdocgen --source-dir ~/bbmap --website-dir ~/bbmap_website
//!
//! # Untrusted scripts: escape extracted text
//! bbdocgen --escape-html --exclude testformat
//!
//! # Everything from a file, with debug logging
//! bbdocgen --config bbdocgen.toml --verbose
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigOverrides, FileConfig, GeneratorConfig};
use crate::generator::{GenerationSummary, Generator};

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter handed to `tracing_subscriber`, e.g. `"debug"`.
    pub log_level: String,
}

/// Generate static HTML pages for BBTools shell wrappers.
#[derive(Parser, Debug)]
#[command(
    name = "bbdocgen",
    about = "Generate one HTML documentation page per BBTools shell wrapper",
    version,
    long_about = "Scans a directory of BBTools *.sh wrappers, extracts the description, usage, \
                  author and last-modified date from each script's help text, and writes \
                  <tool>.html pages into the website's tools directory."
)]
pub struct Cli {
    /// Directory containing the *.sh wrappers.
    #[arg(long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Website root; pages go to <DIR>/tools, the version is read from
    /// <DIR>/data/version.json.
    #[arg(long, value_name = "DIR")]
    website_dir: Option<PathBuf>,

    /// Write pages here instead of <website-dir>/tools.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Read the version sidecar from this file.
    #[arg(long, value_name = "FILE")]
    version_file: Option<PathBuf>,

    /// Additional tool name to skip (repeatable).
    #[arg(long = "exclude", value_name = "TOOL")]
    exclude: Vec<String>,

    /// HTML-escape text extracted from scripts before inserting it into pages.
    #[arg(long)]
    escape_html: bool,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Print nothing but errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Build a [`CliConfig`] from the verbosity flags.
    ///
    /// `--verbose` maps to `debug`, `--quiet` to `error`, otherwise `warn`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
        }
    }

    /// Resolve the generator configuration from flags, the optional config
    /// file, and built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `--config` names a file that is missing or invalid.
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let file = FileConfig::load_optional(self.config.as_deref())?;
        let overrides = ConfigOverrides {
            source_dir: self.source_dir.clone(),
            website_dir: self.website_dir.clone(),
            output_dir: self.output_dir.clone(),
            version_file: self.version_file.clone(),
            exclude: self.exclude.clone(),
            escape_html: self.escape_html,
            quiet: self.quiet,
        };
        Ok(GeneratorConfig::resolve(file, overrides))
    }

    /// Run the generator.
    ///
    /// # Errors
    ///
    /// Only configuration problems are returned; per-script failures are
    /// reported inline and counted in the summary.
    pub fn execute(self) -> Result<GenerationSummary> {
        let config = self.generator_config()?;
        tracing::debug!(?config, "Resolved configuration");
        Ok(Generator::new(config).run())
    }
}
