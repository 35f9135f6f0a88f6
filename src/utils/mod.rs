//! Cross-platform utilities
//!
//! - [`fs`] - atomic writes, directory creation, script discovery

pub mod fs;

pub use fs::{ensure_dir, find_files_with_suffix, read_text_file, safe_write};
