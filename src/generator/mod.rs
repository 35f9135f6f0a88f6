//! The page generation run.
//!
//! For every `*.sh` wrapper in the source directory, in path order:
//!
//! 1. Derive the tool name from the file name.
//! 2. Skip it if it is on the exclusion list.
//! 3. Extract its metadata; skip it if there is neither a description nor a
//!    usage block (unreadable files land here too).
//! 4. Render the page and write `<output_dir>/<tool>.html`.
//!
//! Each skip increments the skipped counter exactly once. Nothing in the loop
//! is fatal: a failed write is reported and counted as a skip, and the run
//! always ends with a summary.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::constants;
use crate::metadata::MetadataExtractor;
use crate::templating::{PageDefaults, PageRenderer, RenderOptions};
use crate::utils::fs::{ensure_dir, find_files_with_suffix, safe_write};
use crate::version::load_version;

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Pages written.
    pub generated: usize,
    /// Scripts that produced no page.
    pub skipped: usize,
}

/// What happened to a single script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Page written to the contained path.
    Generated(PathBuf),
    /// Tool is on the exclusion list.
    Excluded,
    /// No description or usage found, or the script could not be read.
    NoDocumentation,
    /// Rendering succeeded but the page could not be written.
    WriteFailed,
}

impl ScriptOutcome {
    /// True for every outcome other than [`ScriptOutcome::Generated`].
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        !matches!(self, Self::Generated(_))
    }
}

/// Drives extraction and rendering over a source directory.
pub struct Generator {
    config: GeneratorConfig,
    renderer: PageRenderer,
}

impl Generator {
    /// Create a generator using the default page literals.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let options = RenderOptions {
            escape_html: config.escape_html,
        };
        let renderer = PageRenderer::new(PageDefaults::default(), options);
        Self::with_renderer(config, renderer)
    }

    /// Create a generator with a custom renderer.
    #[must_use]
    pub const fn with_renderer(config: GeneratorConfig, renderer: PageRenderer) -> Self {
        Self {
            config,
            renderer,
        }
    }

    /// The resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate pages for every script and print the summary.
    pub fn run(&self) -> GenerationSummary {
        let source_dir = &self.config.source_dir;
        let output_dir = &self.config.output_dir;

        self.say("Generating tool pages...");
        self.say(&format!("Reading from: {}", source_dir.display()));
        self.say(&format!("Writing to: {}", output_dir.display()));

        if let Err(e) = ensure_dir(output_dir) {
            tracing::warn!("Cannot prepare output directory: {:#}", e);
        }

        if !source_dir.is_dir() {
            tracing::warn!("Source directory {} does not exist", source_dir.display());
        }

        let scripts = match find_files_with_suffix(source_dir, constants::SCRIPT_SUFFIX) {
            Ok(scripts) => scripts,
            Err(e) => {
                tracing::warn!("Cannot list scripts in {}: {:#}", source_dir.display(), e);
                Vec::new()
            }
        };
        tracing::debug!("Found {} scripts", scripts.len());

        let version = load_version(&self.config.version_file, &self.renderer.defaults().default_version);

        let mut summary = GenerationSummary::default();
        for script in &scripts {
            if self.process_script(script, &version).is_skip() {
                summary.skipped += 1;
            } else {
                summary.generated += 1;
            }
        }

        self.say("");
        self.say(&"Summary:".bold().to_string());
        self.say(&format!("  Generated: {} pages", summary.generated));
        self.say(&format!("  Skipped: {} scripts", summary.skipped));
        self.say("");
        self.say(&format!("Tool pages created in: {}", output_dir.display()));
        self.say("");
        self.say("Run deploy.sh to publish changes to bbmap.org");

        summary
    }

    /// Handle one script: exclusion check, extraction, rendering, writing.
    pub fn process_script(&self, script: &Path, version: &str) -> ScriptOutcome {
        let Some(tool_name) = tool_name_from_path(script) else {
            tracing::debug!("Ignoring {}: no tool name", script.display());
            return ScriptOutcome::NoDocumentation;
        };

        if self.config.is_excluded(&tool_name) {
            tracing::debug!("Skipping utility script {}", tool_name);
            return ScriptOutcome::Excluded;
        }

        let metadata = match MetadataExtractor::extract_file(script) {
            Some(metadata) if metadata.has_documentation() => metadata,
            _ => {
                self.say(&format!("  Skipped: {tool_name} (no description found)"));
                return ScriptOutcome::NoDocumentation;
            }
        };

        let html = self.renderer.render(&tool_name, &metadata, version);
        let page_name = format!("{tool_name}{}", constants::PAGE_SUFFIX);
        let output_path = self.config.output_dir.join(&page_name);

        match safe_write(&output_path, &html) {
            Ok(()) => {
                self.say(&format!("  Generated: {page_name}"));
                ScriptOutcome::Generated(output_path)
            }
            Err(e) => {
                tracing::warn!("Failed to write {}: {:#}", output_path.display(), e);
                self.say(&format!("  Skipped: {tool_name} (could not write {page_name})"));
                ScriptOutcome::WriteFailed
            }
        }
    }

    fn say(&self, line: &str) {
        if !self.config.quiet {
            println!("{line}");
        }
    }
}

/// Tool identifier for a script path: the file name without the `.sh` suffix.
#[must_use]
pub fn tool_name_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.strip_suffix(constants::SCRIPT_SUFFIX)?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
