use predicates::prelude::*;
use std::fs;

use super::docgen_cmd;
use bbdocgen::test_utils::{ScriptFixture, SiteFixture};

#[test]
fn test_generates_page_for_documented_script() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::bbduk()).unwrap();

    docgen_cmd(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating tool pages..."))
        .stdout(predicate::str::contains("  Generated: bbduk.html"))
        .stdout(predicate::str::contains("  Generated: 1 pages"))
        .stdout(predicate::str::contains("  Skipped: 0 scripts"))
        .stdout(predicate::str::contains("Run deploy.sh to publish changes to bbmap.org"));

    let html = site.read_page("bbduk").unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>BBDuk - BBTools</title>"));
    assert!(html.contains("Compresses reads."));
    assert!(html.contains("bbduk.sh in=reads.fq"));
}

#[test]
fn test_reports_directories() {
    let site = SiteFixture::new().unwrap();
    let tools_dir = site.tools_dir();

    docgen_cmd(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Reading from: {}", site.source_dir.display())))
        .stdout(predicate::str::contains(format!("Writing to: {}", tools_dir.display())))
        .stdout(predicate::str::contains(format!("Tool pages created in: {}", tools_dir.display())));

    assert!(tools_dir.is_dir(), "output directory should be created");
}

#[test]
fn test_existing_page_is_replaced() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::reformat()).unwrap();
    fs::create_dir_all(site.tools_dir()).unwrap();
    fs::write(site.page_path("reformat"), "stale").unwrap();

    docgen_cmd(&site).assert().success();

    let html = site.read_page("reformat").unwrap();
    assert!(!html.contains("stale"));
    assert!(html.contains("<title>Reformat - BBTools</title>"));
    assert!(html.contains("September 14, 2024"));
}

#[test]
fn test_two_runs_produce_identical_pages() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::reformat()).unwrap();

    docgen_cmd(&site).assert().success();
    let first = fs::read(site.page_path("reformat")).unwrap();
    docgen_cmd(&site).assert().success();
    let second = fs::read(site.page_path("reformat")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_script_files_are_ignored() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::bbduk()).unwrap();
    fs::write(site.source_dir.join("README.txt"), "Description: not a script\n\nUsage: none\n\n").unwrap();
    fs::create_dir(site.source_dir.join("nested.sh")).unwrap();

    docgen_cmd(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("  Generated: 1 pages"))
        .stdout(predicate::str::contains("  Skipped: 0 scripts"));
}

#[test]
fn test_escape_html_flag() {
    let script = ScriptFixture::new("markup", "Description: Uses <b>bold</b> & more.\n\nUsage: markup.sh\n\n");
    let site = SiteFixture::new().unwrap().with_script(&script).unwrap();

    docgen_cmd(&site).assert().success();
    assert!(site.read_page("markup").unwrap().contains("<p>Uses <b>bold</b> & more.</p>"));

    docgen_cmd(&site).arg("--escape-html").assert().success();
    assert!(
        site.read_page("markup")
            .unwrap()
            .contains("<p>Uses &lt;b&gt;bold&lt;/b&gt; &amp; more.</p>")
    );
}

#[test]
fn test_quiet_prints_nothing() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::bbduk()).unwrap();

    docgen_cmd(&site).arg("--quiet").assert().success().stdout(predicate::str::is_empty());
    assert!(site.page_path("bbduk").exists());
}

#[test]
fn test_output_dir_flag() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::bbduk()).unwrap();
    let custom = site.website_dir.join("preview");

    docgen_cmd(&site).arg("--output-dir").arg(&custom).assert().success();

    assert!(custom.join("bbduk.html").exists());
    assert!(!site.page_path("bbduk").exists());
}

#[test]
fn test_crlf_script_renders_like_lf() {
    let lf = ScriptFixture::reformat();
    let crlf = ScriptFixture::new("reformat_win", lf.content.replace('\n', "\r\n"));
    let site = SiteFixture::new().unwrap().with_script(&lf).unwrap().with_script(&crlf).unwrap();

    docgen_cmd(&site).assert().success().stdout(predicate::str::contains("  Generated: 2 pages"));

    let html = site.read_page("reformat_win").unwrap();
    assert!(html.contains(
        "<div class=\"usage-box\">\n                reformat.sh in=<file> in2=<file2> out=<outfile> out2=<outfile2>\n            </div>"
    ));
    assert!(html.contains("<strong>Last Updated:</strong> September 14, 2024<br>"));
    assert!(!html.contains('\r'));
}
