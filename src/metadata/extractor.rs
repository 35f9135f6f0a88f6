//! Extract documentation fragments from BBTools shell wrappers.
//!
//! Wrapper scripts carry their help text in a loosely structured block:
//!
//! ```text
//! usage(){
//! echo "
//! Written by Brian Bushnell
//! Last modified March 12, 2024
//!
//! Description:  Compares reads to the kmers in a reference dataset.
//!
//! Usage:  bbduk.sh in=<input file> out=<output file> ref=<contaminant files>
//!
//! Input may be stdin or a fasta or fastq file, compressed or uncompressed.
//! ...
//! ```
//!
//! Each field is found by its own independent rule; rules never share state and
//! never look at each other's matches.
//!
//! Every rule first folds `\r\n` and lone `\r` into `\n`, so scripts checked
//! out with Windows line endings extract exactly like their LF originals.

use regex::Regex;
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use crate::core::DocgenError;
use crate::utils::fs::read_text_file;

/// Terminators closing a description, earliest wins.
const DESCRIPTION_TERMINATORS: &[&str] = &["\n\nUsage:", "Parameters:", "Usage:"];

/// Terminators closing a usage block, earliest wins.
const USAGE_TERMINATORS: &[&str] = &["\n\n", "\nParameters:", "\nInput"];

static DESCRIPTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Description:\s*").expect("static regex"));

static USAGE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Usage:\s*").expect("static regex"));

static AUTHOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Written by (.*)").expect("static regex"));

static LAST_MODIFIED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Last modified (.*)").expect("static regex"));

/// Documentation fields found in one wrapper script.
///
/// Every field is `None` when its rule did not match or matched only
/// whitespace. Fallback text for missing fields is the renderer's business
/// (see [`crate::templating::PageDefaults`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolMetadata {
    /// Single-line description.
    pub description: Option<String>,
    /// Usage block with its line breaks preserved.
    pub usage: Option<String>,
    /// Text after `Written by `. Kept for callers; pages always credit the
    /// suite author.
    pub author: Option<String>,
    /// Text after `Last modified `.
    pub last_modified: Option<String>,
}

impl ToolMetadata {
    /// True when there is enough to build a page: a description or a usage block.
    #[must_use]
    pub const fn has_documentation(&self) -> bool {
        self.description.is_some() || self.usage.is_some()
    }
}

/// Metadata extractor for wrapper scripts.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extract all fields from script content.
    #[must_use]
    pub fn extract(content: &str) -> ToolMetadata {
        ToolMetadata {
            description: Self::extract_description(content),
            usage: Self::extract_usage(content),
            author: Self::extract_author(content),
            last_modified: Self::extract_last_modified(content),
        }
    }

    /// Read a script and extract its fields.
    ///
    /// Returns `None` if the file cannot be read or is not valid UTF-8. The
    /// caller handles that exactly like a script without documentation.
    #[must_use]
    pub fn extract_file(path: &Path) -> Option<ToolMetadata> {
        match read_text_file(path) {
            Ok(content) => Some(Self::extract(&content)),
            Err(e) => {
                let error = DocgenError::ScriptUnreadable {
                    path: path.display().to_string(),
                    reason: format!("{e:#}"),
                };
                tracing::debug!(target: "metadata", "{}", error);
                None
            }
        }
    }

    /// Text between `Description:` and the next `Usage:`/`Parameters:` label,
    /// flattened to one line.
    #[must_use]
    pub fn extract_description(content: &str) -> Option<String> {
        let content = normalize_line_endings(content);
        let block = labelled_block(&content, &DESCRIPTION_LABEL, DESCRIPTION_TERMINATORS)?;
        non_empty(block.trim().replace('\n', " "))
    }

    /// Text between `Usage:` and the next blank line, `Parameters:` line or
    /// `Input` line.
    #[must_use]
    pub fn extract_usage(content: &str) -> Option<String> {
        let content = normalize_line_endings(content);
        let block = labelled_block(&content, &USAGE_LABEL, USAGE_TERMINATORS)?;
        non_empty(block.trim().to_string())
    }

    /// Rest of the line after `Written by `.
    #[must_use]
    pub fn extract_author(content: &str) -> Option<String> {
        rest_of_line(&normalize_line_endings(content), &AUTHOR_LINE)
    }

    /// Rest of the line after `Last modified `.
    #[must_use]
    pub fn extract_last_modified(content: &str) -> Option<String> {
        rest_of_line(&normalize_line_endings(content), &LAST_MODIFIED_LINE)
    }
}

/// `\r\n` and lone `\r` become `\n`; LF-only content is borrowed as-is.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Slice following the first match of `label` up to the earliest terminator.
///
/// The label pattern swallows trailing whitespace, so the block starts at the
/// first non-blank character. If no terminator follows, the block runs to the
/// end of the content. A terminator hidden inside the swallowed whitespace
/// (e.g. `Usage:\n\n`) closes an empty block.
fn labelled_block<'a>(content: &'a str, label: &Regex, terminators: &[&str]) -> Option<&'a str> {
    let found = label.find(content)?;
    let label_text_end = found.start() + label_text_len(found.as_str());

    let end = earliest(content, found.end(), terminators)
        .or_else(|| earliest(content, label_text_end, terminators).map(|_| found.end()))
        .unwrap_or(content.len());

    Some(&content[found.end()..end])
}

/// Length of the label itself, excluding the whitespace the pattern consumed.
fn label_text_len(matched: &str) -> usize {
    matched.trim_end().len()
}

fn earliest(content: &str, from: usize, terminators: &[&str]) -> Option<usize> {
    let haystack = &content[from..];
    terminators.iter().filter_map(|t| haystack.find(t)).min().map(|offset| from + offset)
}

fn rest_of_line(content: &str, pattern: &Regex) -> Option<String> {
    let captures = pattern.captures(content)?;
    let line = captures.get(1)?.as_str();
    non_empty(line.to_string())
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
