//! Fixture case execution.
//!
//! Maps a fixture's function name + JSON inputs onto the implementation under
//! test and the host libc, and renders both outputs as comparison strings.

use serde_json::Value;

use crate::error::HarnessError;
use crate::hostlibc;

/// Outcome of executing one fixture case both ways.
#[derive(Debug, Clone)]
pub struct CaseExecution {
    /// Output of the implementation under test.
    pub impl_output: String,
    /// Output of the host libc (comparison ground truth).
    pub host_output: String,
    /// Whether the two agreed.
    pub host_parity: bool,
}

/// Render a search result: the index, or `absent` for not-found.
fn render_position(pos: Option<usize>) -> String {
    match pos {
        Some(i) => i.to_string(),
        None => "absent".to_string(),
    }
}

fn bytes_field(inputs: &Value, field: &str) -> Result<Vec<u8>, HarnessError> {
    let arr = inputs
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| HarnessError::bad_input(field))?;
    arr.iter()
        .map(|v| {
            v.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| HarnessError::bad_input(field))
        })
        .collect()
}

fn count_field(inputs: &Value, field: &str) -> Result<usize, HarnessError> {
    inputs
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| HarnessError::bad_input(field))
}

fn byte_field(inputs: &Value, field: &str) -> Result<u8, HarnessError> {
    inputs
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| HarnessError::bad_input(field))
}

/// Execute one fixture case by function name.
///
/// Returns the rendered implementation and host outputs. Unknown function
/// names and malformed inputs are typed errors, not panics.
pub fn execute_case(function: &str, inputs: &Value) -> Result<CaseExecution, HarnessError> {
    let (impl_output, host_output) = match function {
        "strlen" => {
            let s = bytes_field(inputs, "s")?;
            (
                conststr_core::strlen(&s).to_string(),
                hostlibc::strlen(&s).to_string(),
            )
        }
        "strnlen" => {
            let s = bytes_field(inputs, "s")?;
            let n = count_field(inputs, "n")?;
            (
                conststr_core::strnlen(&s, n).to_string(),
                hostlibc::strnlen(&s, n).to_string(),
            )
        }
        "strcmp" => {
            let lhs = bytes_field(inputs, "lhs")?;
            let rhs = bytes_field(inputs, "rhs")?;
            (
                conststr_core::strcmp(&lhs, &rhs).to_string(),
                hostlibc::strcmp(&lhs, &rhs).to_string(),
            )
        }
        "strncmp" => {
            let lhs = bytes_field(inputs, "lhs")?;
            let rhs = bytes_field(inputs, "rhs")?;
            let n = count_field(inputs, "n")?;
            (
                conststr_core::strncmp(&lhs, &rhs, n).to_string(),
                hostlibc::strncmp(&lhs, &rhs, n).to_string(),
            )
        }
        "strchr" => {
            let s = bytes_field(inputs, "s")?;
            let c = byte_field(inputs, "c")?;
            (
                render_position(conststr_core::strchr(&s, c)),
                render_position(hostlibc::strchr(&s, c)),
            )
        }
        "strrchr" => {
            let s = bytes_field(inputs, "s")?;
            let c = byte_field(inputs, "c")?;
            (
                render_position(conststr_core::strrchr(&s, c)),
                render_position(hostlibc::strrchr(&s, c)),
            )
        }
        "strspn" => {
            let s = bytes_field(inputs, "s")?;
            let accept = bytes_field(inputs, "accept")?;
            (
                conststr_core::strspn(&s, &accept).to_string(),
                hostlibc::strspn(&s, &accept).to_string(),
            )
        }
        "strcspn" => {
            let s = bytes_field(inputs, "s")?;
            let reject = bytes_field(inputs, "reject")?;
            (
                conststr_core::strcspn(&s, &reject).to_string(),
                hostlibc::strcspn(&s, &reject).to_string(),
            )
        }
        "strpbrk" => {
            let s = bytes_field(inputs, "s")?;
            let accept = bytes_field(inputs, "accept")?;
            (
                render_position(conststr_core::strpbrk(&s, &accept)),
                render_position(hostlibc::strpbrk(&s, &accept)),
            )
        }
        "strstr" => {
            let haystack = bytes_field(inputs, "haystack")?;
            let needle = bytes_field(inputs, "needle")?;
            (
                render_position(conststr_core::strstr(&haystack, &needle)),
                render_position(hostlibc::strstr(&haystack, &needle)),
            )
        }
        other => return Err(HarnessError::UnknownFunction(other.to_string())),
    };

    Ok(CaseExecution {
        host_parity: impl_output == host_output,
        impl_output,
        host_output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn executes_strlen_case() {
        let run = execute_case("strlen", &json!({"s": [72, 105, 0]})).expect("execute");
        assert_eq!(run.impl_output, "2");
        assert!(run.host_parity);
    }

    #[test]
    fn executes_strchr_absent_case() {
        let run = execute_case("strchr", &json!({"s": [104, 105, 0], "c": 122})).expect("execute");
        assert_eq!(run.impl_output, "absent");
        assert_eq!(run.host_output, "absent");
    }

    #[test]
    fn rejects_unknown_function() {
        let err = execute_case("strtok", &json!({})).unwrap_err();
        assert!(matches!(err, HarnessError::UnknownFunction(_)));
    }

    #[test]
    fn rejects_missing_field() {
        let err = execute_case("strlen", &json!({})).unwrap_err();
        assert!(matches!(err, HarnessError::BadInput { .. }));
    }

    #[test]
    fn rejects_out_of_range_byte() {
        let err = execute_case("strlen", &json!({"s": [300]})).unwrap_err();
        assert!(matches!(err, HarnessError::BadInput { .. }));
    }
}
