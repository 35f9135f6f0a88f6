//! Error handling for bbdocgen
//!
//! Two layers, mirroring how the rest of the crate reports failures:
//! - [`DocgenError`] - strongly-typed failures raised by configuration loading
//!   and file system helpers
//! - [`ErrorContext`] - wraps an error with details and an actionable suggestion
//!   for display on the terminal
//!
//! Per-script problems (unreadable wrappers, failed page writes) never reach this
//! layer as fatal errors: the generator logs them and counts the script as
//! skipped. Only problems that stop a run before it starts, such as an explicit
//! configuration file that cannot be parsed, are shown through
//! [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use bbdocgen::core::{DocgenError, ErrorContext, user_friendly_error};
//!
//! let error = DocgenError::ConfigNotFound {
//!     path: "bbdocgen.toml".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for bbdocgen operations.
#[derive(Error, Debug, Clone)]
pub enum DocgenError {
    /// Configuration file named on the command line does not exist
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was requested
        path: String,
    },

    /// Configuration file exists but is not valid TOML for [`crate::config::FileConfig`]
    #[error("Failed to parse configuration file: {file}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// Shell wrapper could not be read or decoded
    #[error("Cannot read script {path}: {reason}")]
    ScriptUnreadable {
        /// Script path
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// Version sidecar could not be used
    #[error("Version sidecar {path} is unusable: {reason}")]
    VersionSidecarInvalid {
        /// Sidecar path
        path: String,
        /// Why the sidecar was rejected
        reason: String,
    },

    /// File system operation failed
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// Operation that failed ("create directory", "write page", ...)
        operation: String,
        /// Path involved
        path: String,
    },

    /// Insufficient permissions
    #[error("Permission denied: {operation} on {path}")]
    PermissionDenied {
        /// Operation that was denied
        operation: String,
        /// Path involved
        path: String,
    },

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error wrapper carrying user-facing details and a suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DocgenError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DocgenError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] suitable for terminal display.
///
/// Known error types get tailored suggestions; everything else is reported with
/// its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(docgen_error) = error.downcast_ref::<DocgenError>() {
        return create_error_context(docgen_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DocgenError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check ownership of the source and website directories")
                .with_details(format!("{error:#}"));
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DocgenError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(format!("{error:#}"));
            }
            _ => {}
        }
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DocgenError::Other {
        message,
    })
}

fn create_error_context(error: DocgenError) -> ErrorContext {
    match &error {
        DocgenError::ConfigNotFound {
            path,
        } => {
            let details = format!("No file exists at '{path}'");
            ErrorContext::new(error)
                .with_suggestion("Pass an existing file to --config, or omit the flag to use built-in defaults")
                .with_details(details)
        }
        DocgenError::ConfigParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion(
                    "Supported keys are source_dir, website_dir, output_dir, version_file, exclude and escape_html",
                )
                .with_details(details)
        }
        DocgenError::ScriptUnreadable {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Make sure the script is readable and saved as UTF-8")
                .with_details(details)
        }
        DocgenError::VersionSidecarInvalid {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion(r#"The sidecar must be a JSON object such as {"version": "39.34"}"#)
                .with_details(details)
        }
        DocgenError::FileSystemError {
            path,
            ..
        } => {
            let suggestion = format!("Check that '{path}' is writable and the disk is not full");
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        DocgenError::PermissionDenied {
            path,
            ..
        } => {
            let details = format!("Access to '{path}' was refused by the operating system");
            ErrorContext::new(error)
                .with_suggestion("Check file ownership and permissions")
                .with_details(details)
        }
        DocgenError::Other {
            ..
        } => ErrorContext::new(error),
    }
}
