//! HTML page rendering for a single tool.
//!
//! [`PageRenderer::render`] is a pure function of its inputs: the tool
//! identifier, the extracted [`ToolMetadata`], the version string, and the
//! [`PageDefaults`] table it was built with. Rendering twice yields the same
//! bytes.

use std::borrow::Cow;

use super::filters::{display_name, escape_html, truncate_chars};
use crate::constants;
use crate::metadata::ToolMetadata;

/// Fallback literals and fixed links interpolated into every page.
///
/// `Default` carries the values used on bbmap.org. Tests and configuration
/// can replace any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDefaults {
    /// Suite name used in titles, navigation and fallback sentences.
    pub suite_name: String,
    /// Author named in the info box and the footer.
    ///
    /// A script's own `Written by` line is extracted but never rendered.
    pub default_author: String,
    /// Version used when the sidecar is unavailable.
    pub default_version: String,
    /// Shown when the script has no `Last modified` line.
    pub last_modified_placeholder: String,
    /// Header tagline when the script has no description.
    pub header_tagline: String,
    /// Base URL of the "View Source" link.
    pub source_repository_url: String,
    /// "Documentation" link.
    pub documentation_url: String,
    /// "Download" link.
    pub download_url: String,
    /// Footer home page link.
    pub home_page_url: String,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            suite_name: "BBTools".to_string(),
            default_author: constants::DEFAULT_AUTHOR.to_string(),
            default_version: constants::DEFAULT_VERSION.to_string(),
            last_modified_placeholder: constants::LAST_MODIFIED_PLACEHOLDER.to_string(),
            header_tagline: "A tool in the BBTools suite".to_string(),
            source_repository_url: constants::SOURCE_REPOSITORY_URL.to_string(),
            documentation_url: constants::DOCUMENTATION_URL.to_string(),
            download_url: constants::DOWNLOAD_URL.to_string(),
            home_page_url: constants::HOME_PAGE_URL.to_string(),
        }
    }
}

/// Switches that change the rendered bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// HTML-escape extracted text before interpolation.
    ///
    /// Off by default: script text is inserted verbatim, matching the pages
    /// already published. Turn it on when the scripts are not trusted.
    pub escape_html: bool,
}

/// Renders tool pages from extracted metadata.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    defaults: PageDefaults,
    options: RenderOptions,
}

impl PageRenderer {
    /// Create a renderer with the given defaults table and options.
    #[must_use]
    pub const fn new(defaults: PageDefaults, options: RenderOptions) -> Self {
        Self {
            defaults,
            options,
        }
    }

    /// The defaults table this renderer interpolates.
    #[must_use]
    pub const fn defaults(&self) -> &PageDefaults {
        &self.defaults
    }

    /// Render the complete HTML document for one tool.
    #[must_use]
    pub fn render(&self, tool_name: &str, metadata: &ToolMetadata, version: &str) -> String {
        let defaults = &self.defaults;
        let suite = &defaults.suite_name;
        let display_name = display_name(tool_name);

        let description = metadata.description.as_deref();

        let meta_description = match description {
            Some(text) => self.field(truncate_chars(text, constants::META_DESCRIPTION_LIMIT)),
            None => Cow::Owned(format!("{display_name} - {suite} bioinformatics tool")),
        };
        let header_text = match description {
            Some(text) => self.field(text),
            None => Cow::Borrowed(defaults.header_tagline.as_str()),
        };
        let about_text = match description {
            Some(text) => self.field(text),
            None => Cow::Owned(format!(
                "{display_name} is part of the {suite} suite of bioinformatics tools."
            )),
        };
        let usage_text = match metadata.usage.as_deref() {
            Some(text) => self.field(text),
            None => Cow::Owned(format!("{tool_name}{} [parameters]", constants::SCRIPT_SUFFIX)),
        };
        let last_modified = match metadata.last_modified.as_deref() {
            Some(text) => self.field(text),
            None => Cow::Borrowed(defaults.last_modified_placeholder.as_str()),
        };
        let author = &defaults.default_author;
        let source_url = &defaults.source_repository_url;
        let documentation_url = &defaults.documentation_url;
        let download_url = &defaults.download_url;
        let home_page_url = &defaults.home_page_url;
        let home_label = home_page_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{display_name} - {suite}</title>
    <meta name="description" content="{meta_description}">
    <link rel="stylesheet" href="../styles.css">
    <style>
        .tool-header {{
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 3rem 0;
            margin-bottom: 2rem;
        }}
        .tool-nav {{
            background: #f8f9fa;
            padding: 1rem 0;
            margin-bottom: 2rem;
        }}
        .tool-nav a {{
            margin: 0 1rem;
            color: #667eea;
            text-decoration: none;
        }}
        .tool-nav a:hover {{
            text-decoration: underline;
        }}
        .usage-box {{
            background: #f4f4f4;
            border-left: 4px solid #667eea;
            padding: 1rem;
            margin: 1rem 0;
            font-family: monospace;
            overflow-x: auto;
        }}
        .info-box {{
            background: #e8f4fd;
            border: 1px solid #bee5f0;
            padding: 1rem;
            margin: 1rem 0;
            border-radius: 4px;
        }}
    </style>
</head>
<body>
    <nav class="tool-nav">
        <div class="container">
            <a href="../index.html">← {suite} Home</a>
            <a href="../index.html#tools">All Tools</a>
            <a href="{source_url}/{tool_name}.sh" target="_blank">View Source</a>
        </div>
    </nav>

    <header class="tool-header">
        <div class="container">
            <h1>{display_name}</h1>
            <p>{header_text}</p>
        </div>
    </header>

    <main class="container">
        <section id="usage">
            <h2>Usage</h2>
            <div class="usage-box">
                {usage_text}
            </div>
        </section>

        <section id="description">
            <h2>About This Tool</h2>
            <p>{about_text}</p>
            <div class="info-box">
                <strong>Last Updated:</strong> {last_modified}<br>
                <strong>Author:</strong> {author}<br>
                <strong>Version:</strong> {suite} v{version}
            </div>
        </section>

        <section id="examples">
            <h2>Examples</h2>
            <p>For detailed parameters and examples, run:</p>
            <div class="usage-box">{tool_name}.sh</div>
            <p>This will display the help message with all available options.</p>
        </section>

        <section id="links">
            <h2>Additional Resources</h2>
            <ul>
                <li><a href="{documentation_url}">Documentation</a></li>
                <li><a href="{download_url}">Download {suite}</a></li>
                <li><a href="../index.html#citation">How to Cite</a></li>
            </ul>
        </section>
    </main>

    <footer>
        <div class="container">
            <p>{suite} by {author} | <a href="{home_page_url}">{home_label}</a></p>
        </div>
    </footer>
</body>
</html>"#
        )
    }

    fn field<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_html {
            Cow::Owned(escape_html(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}
