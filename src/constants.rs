//! Global constants used throughout the bbdocgen codebase.
//!
//! Default locations, file suffixes and the fallback literals that end up in
//! generated pages. Anything a user may want to change at runtime is also
//! exposed through [`crate::config`]; these values are only the defaults.

/// Directory containing the BBTools shell wrappers.
pub const DEFAULT_SOURCE_DIR: &str = r"C:\releases\bbmap";

/// Root of the website checkout that receives generated pages.
pub const DEFAULT_WEBSITE_DIR: &str = r"C:\releases\bbmap_website";

/// Subdirectory of the website root that holds one page per tool.
pub const TOOLS_SUBDIR: &str = "tools";

/// Location of the version sidecar, relative to the website root.
pub const VERSION_SIDECAR_PATH: &[&str] = &["data", "version.json"];

/// Suffix identifying a tool wrapper script.
pub const SCRIPT_SUFFIX: &str = ".sh";

/// Suffix of every generated page.
pub const PAGE_SUFFIX: &str = ".html";

/// Utility wrappers that are not user-facing tools and never get a page.
pub const EXCLUDED_TOOLS: &[&str] = &["calcmem", "javasetup", "memdetect", "Xcalcmem"];

/// Version shown when the sidecar is missing or unusable.
pub const DEFAULT_VERSION: &str = "39.34";

/// Author shown when a script carries no `Written by` line.
pub const DEFAULT_AUTHOR: &str = "Brian Bushnell";

/// Shown in the info box when a script carries no `Last modified` line.
pub const LAST_MODIFIED_PLACEHOLDER: &str = "See source";

/// Maximum number of characters copied into the `<meta name="description">` tag.
pub const META_DESCRIPTION_LIMIT: usize = 155;

/// Base URL for the "View Source" link; the script name is appended.
pub const SOURCE_REPOSITORY_URL: &str = "https://github.com/bbushnell/BBTools/blob/master";

/// Documentation link in the "Additional Resources" section.
pub const DOCUMENTATION_URL: &str = "https://github.com/bbushnell/BBTools/tree/master/docs";

/// Download link in the "Additional Resources" section.
pub const DOWNLOAD_URL: &str = "https://sourceforge.net/projects/bbmap/";

/// Project home page linked from the footer.
pub const HOME_PAGE_URL: &str = "https://bbmap.org";
