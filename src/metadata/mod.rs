//! Metadata extraction from tool wrapper scripts.
//!
//! Pulls the description, usage block, author and last-modified date out of a
//! script's help text. See [`MetadataExtractor`] for the individual rules.

pub mod extractor;

pub use extractor::{MetadataExtractor, ToolMetadata};
