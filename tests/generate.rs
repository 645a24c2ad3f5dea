//! Filesystem contract tests for artifact generation

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use logomark::{generate, logo_document, GenerateError, OUTPUT_PATHS};

#[test]
fn test_repeated_documents_are_byte_identical() {
    assert_eq!(logo_document(), logo_document());
}

#[test]
fn test_radius_serialization() {
    // 110 / 3.5, shortest round-trip f64 formatting, on both circles
    let doc = logo_document();
    assert_eq!(doc.matches(r#"r="31.428571428571427""#).count(), 2);
}

#[test]
fn test_generate_creates_missing_ancestors() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("a").join("b").join("c").join("logo.svg");

    generate(&target).expect("Should create ancestors and write");

    assert_eq!(fs::read_to_string(&target).unwrap(), logo_document());
}

#[test]
fn test_generate_into_existing_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("logo.svg");

    // Directory already exists; repeated calls must not error
    generate(&target).expect("First write should succeed");
    generate(&target).expect("Second write should succeed");

    assert_eq!(fs::read_to_string(&target).unwrap(), logo_document());
}

#[test]
fn test_generate_overwrites_existing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("logo.svg");

    let stale = "<!-- stale -->".repeat(200);
    fs::write(&target, &stale).unwrap();
    assert!(stale.len() > logo_document().len());

    generate(&target).expect("Should overwrite");

    // Fully replaced, not appended to
    assert_eq!(fs::read_to_string(&target).unwrap(), logo_document());
}

#[test]
fn test_generate_fails_when_file_blocks_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("public");
    fs::write(&blocker, "not a directory").unwrap();

    let target = blocker.join("logo.svg");
    let err = generate(&target).expect_err("Should fail to create directory");

    assert!(matches!(err, GenerateError::CreateDir { .. }));
    assert!(!target.exists());
    // The blocking file is untouched
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}

#[test]
fn test_end_to_end_produces_both_artifacts() {
    let dir = tempdir().expect("Failed to create temp dir");

    for rel in OUTPUT_PATHS {
        generate(dir.path().join(rel)).expect("Should write artifact");
    }

    let logo = fs::read_to_string(dir.path().join("public/logo.svg")).unwrap();
    let favicon = fs::read_to_string(dir.path().join("public/favicon.svg")).unwrap();

    // Same document at both paths
    assert_eq!(logo, favicon);

    // One 4-point polyline, two dots, one gradient with the two stops
    assert_eq!(logo.matches("<path").count(), 1);
    assert!(logo.contains(r#"d="M 80,432 L 80,80 L 432,432 L 432,80""#));
    assert_eq!(logo.matches("<circle").count(), 2);
    assert_eq!(logo.matches("<linearGradient").count(), 1);
    assert!(logo.contains(r##"stop-color="#0d9488""##));
    assert!(logo.contains(r##"stop-color="#34d399""##));
}
