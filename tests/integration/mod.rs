//! Integration test suite for bbdocgen
//!
//! Runs the compiled binary against temporary source and website directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **generate**: end-to-end page generation and console output
//! - **skip**: exclusion list and undocumented scripts
//! - **version**: version sidecar lookup and fallback
//! - **config**: flags, TOML configuration and error exits

use assert_cmd::Command;
use bbdocgen::test_utils::SiteFixture;

mod generate;

/// `bbdocgen` pointed at the fixture's directories, with color and env logging off.
fn docgen_cmd(site: &SiteFixture) -> Command {
    let mut cmd = Command::cargo_bin("bbdocgen").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--source-dir")
        .arg(&site.source_dir)
        .arg("--website-dir")
        .arg(&site.website_dir);
    cmd
}
