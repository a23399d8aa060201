//! Integration tests for catalog loading and the generate flow.

use std::fs;

use cwr_cli::catalog::load_catalog;
use cwr_codec::generate;
use cwr_model::CwrVersion;

const CATALOG: &str = r#"{
    "version": "2.1",
    "transaction_type": "new",
    "submitter_code": "ABC",
    "submitter_name": "ABC MUSIC PUBLISHING",
    "submitter_ipi": "00123456789",
    "receiver_code": "052",
    "works": [
        {
            "title": "Yesterday",
            "code": "WRK0001",
            "writers": [
                {
                    "last_name": "MCCARTNEY",
                    "first_name": "Paul",
                    "role": "ComposerAuthor",
                    "shares": { "performance": 50.0, "mechanical": 100.0, "synchronization": 100.0 },
                    "controlled": true,
                    "publisher_code": "PUB000001"
                }
            ],
            "publishers": [
                {
                    "name": "NORTHERN SONGS",
                    "code": "PUB000001",
                    "role": "OriginalPublisher",
                    "shares": { "performance": 50.0, "mechanical": 100.0, "synchronization": 100.0 },
                    "controlled": true
                }
            ]
        }
    ]
}"#;

#[test]
fn catalog_file_generates_a_cwr_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog_path = dir.path().join("catalog.json");
    fs::write(&catalog_path, CATALOG).expect("write catalog");

    let catalog = load_catalog(&catalog_path).expect("load");
    assert_eq!(catalog.works.len(), 1);

    let ctx = catalog.context(None).expect("context");
    assert_eq!(ctx.version, CwrVersion::V21);

    let result = generate(&catalog.works, &ctx).expect("generate");
    let output = dir.path().join(&result.filename);
    fs::write(&output, &result.content).expect("write output");

    let written = fs::read_to_string(&output).expect("read back");
    assert!(written.starts_with("HDR"));
    assert!(written.lines().any(|l| l.starts_with("NWR")));
    assert!(written.ends_with('\n'));
}

#[test]
fn missing_catalog_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.json");
    let err = load_catalog(&missing).expect_err("must fail");
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").expect("write");
    let err = load_catalog(&path).expect_err("must fail");
    assert!(err.to_string().contains("parse catalog"));
}
