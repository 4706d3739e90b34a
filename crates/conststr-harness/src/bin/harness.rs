//! CLI entrypoint for the conststr conformance harness.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use conststr_harness::structured_log::{ArtifactIndex, LogEmitter, LogLevel, Outcome, now_utc};
use conststr_harness::{
    ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationSummary, capture, diff,
};

/// Conformance tooling for conststr.
#[derive(Debug, Parser)]
#[command(name = "conststr-harness")]
#[command(about = "Conformance testing harness for conststr")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host libc behavior for the built-in corpus as a fixture file.
    Capture {
        /// Output fixture path.
        #[arg(long)]
        output: PathBuf,
        /// Optional fixed timestamp string for deterministic capture files.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the implementation against a captured fixture file.
    Verify {
        /// Input fixture path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output markdown report path.
        #[arg(long)]
        report_md: Option<PathBuf>,
        /// Output JSON report path.
        #[arg(long)]
        report_json: Option<PathBuf>,
        /// Output JSONL log path; an artifact index is written next to it.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic reports.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Render a diff between expected and actual text values.
    Diff {
        /// Expected text payload.
        #[arg(long)]
        expected: String,
        /// Actual text payload.
        #[arg(long)]
        actual: String,
    },
}

fn main() -> Result<(), HarnessError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Capture { output, timestamp } => {
            let captured_at = timestamp.unwrap_or_else(now_utc);
            let fixture = capture::capture_fixture_set(&captured_at)?;
            fixture.to_file(&output)?;
            println!("captured {} cases to {}", fixture.cases.len(), output.display());
        }
        Command::Verify {
            fixture,
            report_md,
            report_json,
            log,
            timestamp,
        } => {
            let fixture_set = FixtureSet::from_file(&fixture)?;
            let runner = TestRunner::new("conformance");
            let results = runner.run(&fixture_set);
            let summary = VerificationSummary::from_results(results);
            let report = ConformanceReport {
                title: "conststr conformance".to_string(),
                campaign: runner.campaign.clone(),
                timestamp: timestamp.unwrap_or_else(now_utc),
                summary,
            };

            let mut artifacts: Vec<(PathBuf, &str, Vec<u8>)> = Vec::new();
            if let Some(path) = report_md {
                let body = report.to_markdown().into_bytes();
                fs::write(&path, &body)?;
                artifacts.push((path, "report_md", body));
            }
            if let Some(path) = report_json {
                let body = report.to_json().into_bytes();
                fs::write(&path, &body)?;
                artifacts.push((path, "report_json", body));
            }
            if let Some(path) = log {
                write_run_log(&path, &report, &artifacts)?;
            }

            println!(
                "{} total, {} passed, {} failed",
                report.summary.total, report.summary.passed, report.summary.failed
            );
            if !report.summary.all_passed() {
                for r in report.summary.results.iter().filter(|r| !r.passed) {
                    eprintln!("FAIL {}: {}", r.case_name, r.diff.as_deref().unwrap_or(""));
                }
                std::process::exit(1);
            }
        }
        Command::Diff { expected, actual } => {
            println!("{}", diff::render_diff(&expected, &actual));
        }
    }

    Ok(())
}

/// Emit a JSONL run log plus an artifact index alongside it.
fn write_run_log(
    path: &std::path::Path,
    report: &ConformanceReport,
    artifacts: &[(PathBuf, &str, Vec<u8>)],
) -> Result<(), HarnessError> {
    let run_id = format!("conformance-{}", report.timestamp);
    let mut emitter = LogEmitter::to_file(path, &run_id)?;
    emitter.emit(LogLevel::Info, "verify_start")?;
    for r in &report.summary.results {
        let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
        let level = if r.passed { LogLevel::Info } else { LogLevel::Error };
        let entry = conststr_harness::structured_log::LogEntry::new("", level, "case_verified")
            .with_function(r.function.as_str())
            .with_case(r.case_name.as_str())
            .with_outcome(outcome);
        emitter.emit_entry(entry)?;
    }
    emitter.emit(LogLevel::Info, "verify_end")?;
    emitter.flush()?;

    let mut index = ArtifactIndex::new(run_id.as_str());
    for (artifact_path, kind, body) in artifacts {
        index.add(artifact_path.display().to_string(), *kind, body);
    }
    let index_path = path.with_extension("index.json");
    fs::write(index_path, index.to_json()?)?;
    Ok(())
}
