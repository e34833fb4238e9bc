use debian_copyright::{DebianCopyright, is_wildcard_match};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_copyright(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write copyright file");
    file
}

#[test]
fn test_from_file_and_lookup() {
    let file = write_copyright(
        "Format: https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/\n\
         \n\
         Files: test/fixtures/*\n\
         Copyright: 2023 Jane Doe <jane@example.org>\n\
         License: MIT\n",
    );

    let document = DebianCopyright::from_file(file.path()).expect("Parse should succeed");
    let stanza = document
        .find_stanza("test/fixtures/basic-file.dep5")
        .expect("Stanza should match");

    assert_eq!(stanza.files, vec!["test/fixtures/*"]);
    assert_eq!(stanza.copyright, "2023 Jane Doe <jane@example.org>");
    assert_eq!(stanza.license, "MIT");
    assert!(stanza.comment.is_none());
    assert!(document.find_stanza("src/lib.rs").is_none());
}

#[test]
fn test_from_file_missing_path_is_an_error() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let result = DebianCopyright::from_file(&dir.path().join("copyright"));

    assert!(result.is_err(), "Reading a missing file should fail");
}

#[test]
fn test_from_file_matches_parse() {
    let path = Path::new("testdata/dep5/multi-stanza.dep5");
    let content = std::fs::read_to_string(path).expect("Fixture should exist");

    let from_file = DebianCopyright::from_file(path).expect("Parse should succeed");
    assert_eq!(from_file, DebianCopyright::parse(&content));
    assert_eq!(from_file.files.len(), 4);
}

#[test]
fn test_lookup_in_fixture_follows_document_order() {
    let document = DebianCopyright::from_file(Path::new("testdata/dep5/multi-stanza.dep5"))
        .expect("Parse should succeed");

    // `*` comes first, so it governs every path.
    for path in ["debian/rules", "src/vendor/zlib.c", "README"] {
        let stanza = document.find_stanza(path).expect("Stanza should match");
        assert_eq!(stanza.license, "Expat");
    }
}

#[test]
fn test_wildcard_public_api() {
    assert!(is_wildcard_match("good-example.ts", "good-*.ts"));
    assert!(!is_wildcard_match("bad-example.ts", "good-*.ts"));
    assert!(!is_wildcard_match("example.js", "*.ts"));
}
