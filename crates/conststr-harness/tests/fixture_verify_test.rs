//! End-to-end conformance run: capture the built-in corpus against host
//! libc, verify the const-evaluable implementation against it, and check
//! the logging/artifact plumbing around the run.

use conststr_harness::capture::capture_fixture_set;
use conststr_harness::structured_log::{
    LogEmitter, LogLevel, Outcome, sha256_hex, validate_log_line,
};
use conststr_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

#[test]
fn implementation_matches_host_libc_on_builtin_corpus() {
    let fixture = capture_fixture_set("2026-08-05T00:00:00Z").expect("capture");
    let results = TestRunner::new("e2e").run(&fixture);
    let summary = VerificationSummary::from_results(results);

    assert!(
        summary.all_passed(),
        "host parity failures: {:#?}",
        summary.results.iter().filter(|r| !r.passed).collect::<Vec<_>>()
    );
    assert_eq!(summary.total, fixture.cases.len());
}

#[test]
fn captured_fixture_survives_json_roundtrip_and_still_verifies() {
    let fixture = capture_fixture_set("2026-08-05T00:00:00Z").expect("capture");
    let json = fixture.to_json().expect("serialize");
    let restored = FixtureSet::from_json(&json).expect("deserialize");

    let results = TestRunner::new("roundtrip").run(&restored);
    assert!(results.iter().all(|r| r.passed));
}

#[test]
fn verify_run_produces_valid_jsonl_log() {
    let fixture = capture_fixture_set("2026-08-05T00:00:00Z").expect("capture");
    let results = TestRunner::new("log-check").run(&fixture);

    let mut emitter = LogEmitter::to_buffer("run-e2e");
    emitter.emit(LogLevel::Info, "verify_start").expect("emit");
    for r in &results {
        let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
        let entry = emitter.emit(LogLevel::Info, "case_verified").expect("emit");
        // Every emitted line must round-trip through the validator.
        let line = entry.with_outcome(outcome).to_jsonl().expect("jsonl");
        assert!(validate_log_line(&line, 1).is_ok(), "invalid line: {line}");
    }
}

#[test]
fn report_artifacts_hash_deterministically() {
    let fixture = capture_fixture_set("2026-08-05T00:00:00Z").expect("capture");
    let results = TestRunner::new("hash-check").run(&fixture);
    let report = ConformanceReport {
        title: "conststr conformance".to_string(),
        campaign: "hash-check".to_string(),
        timestamp: "2026-08-05T00:00:00Z".to_string(),
        summary: VerificationSummary::from_results(results),
    };

    let md = report.to_markdown();
    assert_eq!(sha256_hex(md.as_bytes()), sha256_hex(md.as_bytes()));
    assert!(md.contains("| strlen_hello_world | strlen |"));
}
