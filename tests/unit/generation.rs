//! Generator runs against temporary directories.

use bbdocgen::config::{ConfigOverrides, FileConfig, GeneratorConfig};
use bbdocgen::constants;
use bbdocgen::generator::{GenerationSummary, Generator};
use bbdocgen::test_utils::{ScriptFixture, SiteFixture};

fn config_for(site: &SiteFixture) -> GeneratorConfig {
    GeneratorConfig::resolve(
        FileConfig::default(),
        ConfigOverrides {
            source_dir: Some(site.source_dir.clone()),
            website_dir: Some(site.website_dir.clone()),
            quiet: true,
            ..ConfigOverrides::default()
        },
    )
}

#[test]
fn test_skip_rule_writes_nothing_and_counts_once() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::undocumented("blank")).unwrap();

    let summary = Generator::new(config_for(&site)).run();

    assert_eq!(summary, GenerationSummary {
        generated: 0,
        skipped: 1,
    });
    assert!(!site.page_path("blank").exists());
}

#[test]
fn test_excluded_tools_never_generate() {
    let mut site = SiteFixture::new().unwrap();
    for name in constants::EXCLUDED_TOOLS {
        // Fully documented, still excluded
        site = site.with_script(&ScriptFixture::new(*name, ScriptFixture::bbduk().content)).unwrap();
    }

    let summary = Generator::new(config_for(&site)).run();

    assert_eq!(summary.generated, 0);
    assert_eq!(summary.skipped, constants::EXCLUDED_TOOLS.len());
    for name in constants::EXCLUDED_TOOLS {
        assert!(!site.page_path(name).exists());
    }
}

#[test]
fn test_missing_sidecar_uses_fallback_version() {
    let site = SiteFixture::new().unwrap().with_script(&ScriptFixture::bbduk()).unwrap();
    Generator::new(config_for(&site)).run();

    let html = site.read_page("bbduk").unwrap();
    assert!(html.contains(&format!("BBTools v{}", constants::DEFAULT_VERSION)));
}

#[test]
fn test_malformed_sidecar_uses_fallback_version() {
    let site = SiteFixture::new()
        .unwrap()
        .with_script(&ScriptFixture::bbduk())
        .unwrap()
        .with_version_sidecar("{\"version\": ")
        .unwrap();
    Generator::new(config_for(&site)).run();

    let html = site.read_page("bbduk").unwrap();
    assert!(html.contains("BBTools v39.34"));
}

#[test]
fn test_mixed_directory() {
    let site = SiteFixture::new()
        .unwrap()
        .with_script(&ScriptFixture::bbduk())
        .unwrap()
        .with_script(&ScriptFixture::reformat())
        .unwrap()
        .with_script(&ScriptFixture::undocumented("runhmm"))
        .unwrap()
        .with_script(&ScriptFixture::new("calcmem", ScriptFixture::bbduk().content))
        .unwrap()
        .with_version_sidecar(r#"{"version": "39.40"}"#)
        .unwrap();

    let summary = Generator::new(config_for(&site)).run();

    assert_eq!(summary, GenerationSummary {
        generated: 2,
        skipped: 2,
    });
    assert!(site.read_page("reformat").unwrap().contains("BBTools v39.40"));
    assert!(site.read_page("bbduk").unwrap().contains("<title>BBDuk - BBTools</title>"));
}
