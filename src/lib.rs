//! bbdocgen - static documentation pages for BBTools
//!
//! Every BBTools wrapper script (`bbduk.sh`, `reformat.sh`, ...) embeds its own
//! help text. bbdocgen reads those scripts, pulls out the description, usage
//! line, author and last-modified date, and writes one self-contained HTML page
//! per tool into the project website.
//!
//! # Pipeline
//!
//! ```text
//! *.sh ──► metadata::MetadataExtractor ──► templating::PageRenderer ──► <tool>.html
//!                                               ▲
//!                     version::load_version ────┘
//! ```
//!
//! The [`generator`] module drives that pipeline over a directory, applying the
//! exclusion list and counting generated and skipped scripts.
//!
//! # Modules
//!
//! - [`cli`] - command-line parsing and execution
//! - [`config`] - defaults, TOML configuration file, flag overrides
//! - [`constants`] - default paths and page literals
//! - [`core`] - error types and user-facing error display
//! - [`generator`] - the per-directory run and its summary
//! - [`metadata`] - field extraction from script text
//! - [`templating`] - HTML page rendering
//! - [`utils`] - file system helpers
//! - [`version`] - version sidecar lookup
//!
//! # Example
//!
//! ```rust,no_run
//! use bbdocgen::config::{ConfigOverrides, FileConfig, GeneratorConfig};
//! use bbdocgen::generator::Generator;
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig::resolve(
//!     FileConfig::default(),
//!     ConfigOverrides {
//!         source_dir: Some(PathBuf::from("/opt/bbmap")),
//!         website_dir: Some(PathBuf::from("/srv/bbmap_website")),
//!         ..ConfigOverrides::default()
//!     },
//! );
//! let summary = Generator::new(config).run();
//! println!("{} pages, {} skipped", summary.generated, summary.skipped);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod generator;
pub mod metadata;
pub mod templating;
pub mod utils;
pub mod version;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
