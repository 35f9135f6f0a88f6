//! Extraction properties over whole scripts.

use bbdocgen::metadata::{MetadataExtractor, ToolMetadata};
use bbdocgen::test_utils::{ScriptFixture, init_test_logging};

#[test]
fn test_well_formed_description_block() {
    init_test_logging(None);

    for (raw, expected) in [
        ("Single line.", "Single line."),
        ("  padded  ", "padded"),
        ("first\nsecond\nthird", "first second third"),
        ("\n\nleading blank lines\nand more\n", "leading blank lines and more"),
    ] {
        let content = format!("Description:{raw}\n\nUsage: tool.sh\n\n");
        assert_eq!(
            MetadataExtractor::extract_description(&content).as_deref(),
            Some(expected),
            "description of {raw:?}"
        );
    }
}

#[test]
fn test_text_without_usage_label_has_no_usage() {
    for content in ["", "Description: Only a description.", "usage: lowercase label\n\n", "Usage without colon\n\n"] {
        assert_eq!(MetadataExtractor::extract_usage(content), None, "usage of {content:?}");
    }
}

#[test]
fn test_reformat_fixture() {
    let metadata = MetadataExtractor::extract(&ScriptFixture::reformat().content);

    assert_eq!(
        metadata.description.as_deref(),
        Some(
            "Reformats reads to change ASCII quality encoding, interleaving, file format, or compression format."
        )
    );
    assert_eq!(
        metadata.usage.as_deref(),
        Some("reformat.sh in=<file> in2=<file2> out=<outfile> out2=<outfile2>")
    );
    assert_eq!(metadata.author.as_deref(), Some("Brian Bushnell"));
    assert_eq!(metadata.last_modified.as_deref(), Some("September 14, 2024"));
}

#[test]
fn test_undocumented_fixture() {
    let metadata = MetadataExtractor::extract(&ScriptFixture::undocumented("javasetup").content);
    assert_eq!(metadata, ToolMetadata::default());
    assert!(!metadata.has_documentation());
}

#[test]
fn test_usage_only_counts_as_documented() {
    let metadata = MetadataExtractor::extract("Usage: pileup.sh in=mapped.sam\n\n");
    assert!(metadata.description.is_none());
    assert!(metadata.has_documentation());
}

#[test]
fn test_crlf_copy_extracts_like_original() {
    let lf = ScriptFixture::reformat();
    let crlf = lf.content.replace('\n', "\r\n");

    let expected = MetadataExtractor::extract(&lf.content);
    let metadata = MetadataExtractor::extract(&crlf);

    assert_eq!(metadata, expected);
    assert_eq!(metadata.usage.as_deref(), Some("reformat.sh in=<file> in2=<file2> out=<outfile> out2=<outfile2>"));
    assert!(!metadata.description.unwrap().contains('\r'));
}
