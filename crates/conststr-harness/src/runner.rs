//! Test execution engine.

use crate::diff;
use crate::exec::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let (actual, diff) = run_case(case);
                VerificationResult {
                    case_name: case.name.clone(),
                    function: case.function.clone(),
                    reference: case.reference.clone(),
                    passed: actual == case.expected_output,
                    expected: case.expected_output.clone(),
                    actual,
                    diff,
                }
            })
            .collect()
    }
}

fn run_case(case: &FixtureCase) -> (String, Option<String>) {
    match execute_case(&case.function, &case.inputs) {
        Ok(run) => {
            let mut notes = Vec::new();
            if !run.host_parity {
                notes.push(format!(
                    "host parity mismatch: host={}, impl={}",
                    run.host_output, run.impl_output
                ));
            }

            let mut diff_out = None;
            if run.impl_output != case.expected_output {
                diff_out = Some(diff::render_diff(&case.expected_output, &run.impl_output));
            } else if !notes.is_empty() {
                diff_out = Some(notes.join("\n"));
            }

            (run.impl_output, diff_out)
        }
        Err(err) => {
            let actual = format!("unsupported:{err}");
            let diff_out = Some(diff::render_diff(&case.expected_output, &actual));
            (actual, diff_out)
        }
    }
}
