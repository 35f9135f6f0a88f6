//! Test fixtures for wrapper scripts and website layouts
//!
//! [`ScriptFixture`] holds sample script text; [`SiteFixture`] lays out a
//! temporary source directory and website root the way the generator expects
//! them.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample wrapper script
#[derive(Clone, Debug)]
pub struct ScriptFixture {
    /// Tool name, without `.sh`
    pub name: String,
    /// Script text
    pub content: String,
}

impl ScriptFixture {
    /// Script with arbitrary content
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Minimal documented script: description followed by a usage line at end of input
    pub fn bbduk() -> Self {
        Self::new("bbduk", "Description:\nCompresses reads.\n\nUsage:\nbbduk.sh in=reads.fq")
    }

    /// Help block laid out like the real BBTools wrappers
    pub fn reformat() -> Self {
        Self::new(
            "reformat",
            r#"#!/bin/bash

usage(){
echo "
Written by Brian Bushnell
Last modified September 14, 2024

Description:  Reformats reads to change ASCII quality encoding, interleaving,
file format, or compression format.

Usage:  reformat.sh in=<file> in2=<file2> out=<outfile> out2=<outfile2>

in2 and out2 are for paired reads and are optional.

Parameters:
in=<file>       Input file.
"
}
"#,
        )
    }

    /// Script without any help text
    pub fn undocumented(name: impl Into<String>) -> Self {
        Self::new(name, "#!/bin/bash\nset -e\njava -cp current/ Tool \"$@\"\n")
    }

    /// File name of the script
    pub fn file_name(&self) -> String {
        format!("{}.sh", self.name)
    }

    /// Write the script into `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }
}

/// Temporary source directory plus website root
pub struct SiteFixture {
    _temp_dir: TempDir,
    /// Directory of `*.sh` scripts
    pub source_dir: PathBuf,
    /// Website root
    pub website_dir: PathBuf,
}

impl SiteFixture {
    /// Create empty `bbmap/` and `bbmap_website/` directories in a fresh temp dir
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let source_dir = temp_dir.path().join("bbmap");
        let website_dir = temp_dir.path().join("bbmap_website");
        fs::create_dir_all(&source_dir)?;
        fs::create_dir_all(&website_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            source_dir,
            website_dir,
        })
    }

    /// Add a script to the source directory
    pub fn with_script(self, script: &ScriptFixture) -> Result<Self> {
        script.write_to(&self.source_dir)?;
        Ok(self)
    }

    /// Write `data/version.json` with raw content
    pub fn with_version_sidecar(self, content: &str) -> Result<Self> {
        let data_dir = self.website_dir.join("data");
        fs::create_dir_all(&data_dir)?;
        fs::write(data_dir.join("version.json"), content)?;
        Ok(self)
    }

    /// Default output directory, `<website>/tools`
    pub fn tools_dir(&self) -> PathBuf {
        self.website_dir.join("tools")
    }

    /// Path of the generated page for `tool`
    pub fn page_path(&self, tool: &str) -> PathBuf {
        self.tools_dir().join(format!("{tool}.html"))
    }

    /// Read the generated page for `tool`
    pub fn read_page(&self, tool: &str) -> Result<String> {
        let path = self.page_path(tool);
        fs::read_to_string(&path).with_context(|| format!("Missing page {}", path.display()))
    }
}
