/// Integration tests for the application layer
mod test_utilities;

use cves_diff::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use test_utilities::mocks::*;

fn fixture(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn run_diff(
    reader: MockScanReader,
    reporter: MockProgressReporter,
    left: &str,
    right: &str,
    renderer: &mut dyn ReportRenderer,
) -> Result<DiffResponse> {
    let use_case = DiffScansUseCase::new(reader, reporter);
    use_case.execute(DiffRequest::from_paths(left, right), renderer)
}

#[test]
fn test_owasp_against_empty_document() {
    let reader = MockScanReader::new()
        .with_scan(
            "owasp.json",
            json!({
                "projectInfo": { "name": "demo" },
                "dependencies": [{
                    "packages": [{ "id": "pkg/org.foo/bar" }],
                    "vulnerabilities": [{ "name": "CVE-2021-1" }]
                }]
            }),
        )
        .with_scan("empty.json", json!({}));
    let mut renderer = MarkdownRenderer::new();

    let response = run_diff(
        reader,
        MockProgressReporter::new(),
        "owasp.json",
        "empty.json",
        &mut renderer,
    )
    .unwrap();

    assert_eq!(
        renderer.content(),
        "| owasp.json | empty.json |\n\
         | --- | --- |\n\
         | org.foo:bar<br/>CVE-2021-1 |  |\n"
    );
    assert_eq!(response.summary.total_rows(), 1);
    assert_eq!(response.summary.left_only, 1);
}

#[test]
fn test_registry_scans_with_different_cves() {
    let reader = MockScanReader::new()
        .with_scan("a.json", fixture("xray.json"))
        .with_scan("b.json", fixture("xray-updated.json"));
    let mut renderer = MockReportRenderer::new();

    let response = run_diff(
        reader,
        MockProgressReporter::new(),
        "a.json",
        "b.json",
        &mut renderer,
    )
    .unwrap();

    assert_eq!(
        renderer.rows(),
        vec!["libX@1.0 | libX@1.0", "libY@2.3 | -"]
    );
    assert_eq!(response.summary.in_both, 1);
    assert_eq!(response.summary.changed, 1);
    assert_eq!(response.summary.left_only, 1);
}

#[test]
fn test_registry_combined_row_keeps_sets_independent() {
    let reader = MockScanReader::new()
        .with_scan("a.json", fixture("xray.json"))
        .with_scan("b.json", fixture("xray-updated.json"));
    let mut renderer = JsonRenderer::new();

    run_diff(
        reader,
        MockProgressReporter::new(),
        "a.json",
        "b.json",
        &mut renderer,
    )
    .unwrap();

    let report: Value = serde_json::from_str(renderer.content()).unwrap();
    assert_eq!(
        report["rows"][0],
        json!({
            "left": { "name": "libX@1.0", "vulnerabilities": [{ "name": "CVE-1" }] },
            "right": { "name": "libX@1.0", "vulnerabilities": [{ "name": "CVE-2" }] }
        })
    );
    assert_eq!(
        report["rows"][1],
        json!({
            "left": { "name": "libY@2.3", "vulnerabilities": [] },
            "right": null
        })
    );
}

#[test]
fn test_owasp_reports_over_time() {
    let reader = MockScanReader::new()
        .with_scan("march.json", fixture("owasp.json"))
        .with_scan("april.json", fixture("owasp-updated.json"));
    let mut renderer = MockReportRenderer::new();

    let response = run_diff(
        reader,
        MockProgressReporter::new(),
        "march.json",
        "april.json",
        &mut renderer,
    )
    .unwrap();

    assert_eq!(
        renderer.rows(),
        vec![
            "com.fasterxml.jackson.core:jackson-databind@2.9.8 | com.fasterxml.jackson.core:jackson-databind@2.9.8",
            "- | io.netty:netty-codec@4.1.42",
            "org.foo:bar@1.2 | -",
        ]
    );
    assert_eq!(response.left.format, FormatKind::OwaspScan);
    assert_eq!(response.left.component_count, 2);
    assert_eq!(response.right.component_count, 2);
    assert_eq!(response.summary.changed, 1);
}

#[test]
fn test_container_scan_against_owasp_scan() {
    let reader = MockScanReader::new()
        .with_scan("image.json", fixture("xray-docker.json"))
        .with_scan("owasp.json", fixture("owasp.json"));
    let mut renderer = MockReportRenderer::new();

    let response = run_diff(
        reader,
        MockProgressReporter::new(),
        "image.json",
        "owasp.json",
        &mut renderer,
    )
    .unwrap();

    assert_eq!(response.left.format, FormatKind::ContainerScan);
    assert_eq!(
        renderer.rows(),
        vec![
            "com.fasterxml.jackson.core:jackson-databind@2.9.8 | com.fasterxml.jackson.core:jackson-databind@2.9.8",
            "deb://debian:buster:openssl:1.1.1d | -",
            "- | org.foo:bar@1.2",
            "requests@2.19.0 | -",
        ]
    );
}

#[test]
fn test_identical_scans_pair_every_component() {
    let reader = MockScanReader::new()
        .with_scan("a.json", fixture("owasp.json"))
        .with_scan("b.json", fixture("owasp.json"));
    let mut renderer = MockReportRenderer::new();

    let response = run_diff(
        reader,
        MockProgressReporter::new(),
        "a.json",
        "b.json",
        &mut renderer,
    )
    .unwrap();

    assert!(!response.has_differences());
    assert_eq!(response.summary.in_both, 2);
    assert!(renderer
        .rows()
        .iter()
        .all(|row| !row.starts_with("- ") && !row.ends_with(" -")));
}

#[test]
fn test_unknown_format_is_warning_not_error() {
    let reporter = MockProgressReporter::new();
    let reader = MockScanReader::new()
        .with_scan("unknown.json", fixture("unknown.json"))
        .with_scan("xray.json", fixture("xray.json"));
    let mut renderer = MockReportRenderer::new();

    let response = run_diff(
        reader,
        reporter.clone(),
        "unknown.json",
        "xray.json",
        &mut renderer,
    )
    .unwrap();

    assert_eq!(response.left.format, FormatKind::Unknown);
    assert_eq!(response.left.component_count, 0);
    assert_eq!(response.summary.right_only, 2);

    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("unknown.json"));
}

#[test]
fn test_progress_steps_and_completion() {
    let reporter = MockProgressReporter::new();
    let reader = MockScanReader::new()
        .with_scan("a.json", fixture("xray.json"))
        .with_scan("b.json", fixture("xray.json"));
    let mut renderer = MockReportRenderer::new();

    run_diff(reader, reporter.clone(), "a.json", "b.json", &mut renderer).unwrap();

    assert_eq!(reporter.steps(), vec![(1, 2), (2, 2)]);
    assert!(matches!(
        reporter.events().last(),
        Some(ReportedEvent::Completion(_))
    ));
    assert!(reporter.warnings().is_empty());
}

#[test]
fn test_reader_failure_propagates() {
    let mut renderer = MockReportRenderer::new();

    let result = run_diff(
        MockScanReader::with_failure(),
        MockProgressReporter::new(),
        "a.json",
        "b.json",
        &mut renderer,
    );

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Mock scan read failure"));
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_malformed_owasp_document_is_parse_error() {
    let reader = MockScanReader::new()
        .with_scan(
            "broken.json",
            json!({ "projectInfo": {}, "dependencies": "not-a-list" }),
        )
        .with_scan("b.json", json!({}));
    let mut renderer = MockReportRenderer::new();

    let err = run_diff(
        reader,
        MockProgressReporter::new(),
        "broken.json",
        "b.json",
        &mut renderer,
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("broken.json"));
    assert!(message.contains("OWASP Dependency-Check"));
}
