//! Rendering properties of complete pages.

use bbdocgen::metadata::{MetadataExtractor, ToolMetadata};
use bbdocgen::templating::{PageDefaults, PageRenderer, RenderOptions};
use bbdocgen::test_utils::ScriptFixture;

#[test]
fn test_title_for_every_tool_name() {
    let renderer = PageRenderer::default();
    let metadata = ToolMetadata::default();

    for (tool, display) in [
        ("bbduk", "BBDuk"),
        ("reformat", "Reformat"),
        ("bbmap", "BBMap"),
        ("bbmerge_auto", "BBMerge Auto"),
        ("sortbyname", "Sortbyname"),
        ("kmercountexact", "Kmercountexact"),
    ] {
        let html = renderer.render(tool, &metadata, "39.34");
        let title = format!("<title>{display} - BBTools</title>");
        assert!(html.contains(&title), "{tool} should render {title}");
    }
}

#[test]
fn test_render_twice_is_byte_identical() {
    let metadata = MetadataExtractor::extract(&ScriptFixture::reformat().content);
    let renderer = PageRenderer::new(PageDefaults::default(), RenderOptions::default());

    let first = renderer.render("reformat", &metadata, "39.34");
    let second = renderer.render("reformat", &metadata, "39.34");
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_bbduk_scenario_page_body() {
    let fixture = ScriptFixture::bbduk();
    let metadata = MetadataExtractor::extract(&fixture.content);
    let html = PageRenderer::default().render(&fixture.name, &metadata, "39.34");

    assert!(html.contains("<p>Compresses reads.</p>"));
    assert!(html.contains("<div class=\"usage-box\">\n                bbduk.sh in=reads.fq\n            </div>"));
}

#[test]
fn test_defaults_table_override() {
    let defaults = PageDefaults {
        suite_name: "TestSuite".to_string(),
        header_tagline: "A tool in the test suite".to_string(),
        ..PageDefaults::default()
    };
    let html = PageRenderer::new(defaults, RenderOptions::default()).render("widget", &ToolMetadata::default(), "0.1");

    assert!(html.contains("<title>Widget - TestSuite</title>"));
    assert!(html.contains("<p>A tool in the test suite</p>"));
    assert!(html.contains("TestSuite v0.1"));
}

#[test]
fn test_info_box_credits_suite_author() {
    let content = "Written by Jonathan Rood\nLast modified March 3, 2021\n\nDescription: Calls variants.\n\nUsage: callvariants.sh in=x.sam\n\n";
    let metadata = MetadataExtractor::extract(content);
    assert_eq!(metadata.author.as_deref(), Some("Jonathan Rood"));

    let html = PageRenderer::default().render("callvariants", &metadata, "39.34");

    assert!(html.contains("<strong>Author:</strong> Brian Bushnell<br>"));
    assert!(!html.contains("Jonathan Rood"));
}
