//! HTML page generation for tool documentation.
//!
//! Pages are built from a single fixed template with `format!`; there is no
//! template engine and no template files on disk. The moving parts are:
//!
//! - [`PageRenderer`] - renders one complete HTML document per tool
//! - [`PageDefaults`] - fallback literals and fixed links, overridable in tests
//!   and configuration
//! - [`RenderOptions`] - output switches, currently only HTML escaping
//! - [`filters`] - display-name derivation and the small string helpers the
//!   template needs
//!
//! # Example
//!
//! ```rust
//! use bbdocgen::metadata::ToolMetadata;
//! use bbdocgen::templating::PageRenderer;
//!
//! let metadata = ToolMetadata {
//!     description: Some("Compresses reads.".to_string()),
//!     ..ToolMetadata::default()
//! };
//! let html = PageRenderer::default().render("bbduk", &metadata, "39.34");
//! assert!(html.contains("<title>BBDuk - BBTools</title>"));
//! ```

pub mod filters;
pub mod renderer;

pub use renderer::{PageDefaults, PageRenderer, RenderOptions};
