//! Host libc fixture capture.
//!
//! Runs a built-in vector corpus against the host libc and records the
//! outputs as JSON fixtures for later verification.

use serde_json::json;

use crate::error::HarnessError;
use crate::exec::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};

fn case(name: &str, function: &str, reference: &str, inputs: serde_json::Value) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        function: function.to_string(),
        reference: reference.to_string(),
        inputs,
        // Filled in by capture.
        expected_output: String::new(),
    }
}

fn z(s: &[u8]) -> Vec<u8> {
    let mut v = s.to_vec();
    v.push(0);
    v
}

/// The built-in capture corpus: one or more cases per scan function,
/// covering the boundary behaviors (empty inputs, terminator search,
/// bounded compare stopping early, empty accept/reject sets, empty needle).
#[must_use]
pub fn builtin_corpus() -> Vec<FixtureCase> {
    vec![
        case("strlen_empty", "strlen", "C11 7.24.6.3", json!({"s": z(b"")})),
        case(
            "strlen_hello_world",
            "strlen",
            "C11 7.24.6.3",
            json!({"s": z(b"HelloWorld!")}),
        ),
        case(
            "strnlen_bounded",
            "strnlen",
            "POSIX strnlen",
            json!({"s": z(b"HelloWorld!"), "n": 5}),
        ),
        case(
            "strnlen_unbounded",
            "strnlen",
            "POSIX strnlen",
            json!({"s": z(b"Hi"), "n": 64}),
        ),
        case(
            "strcmp_both_empty",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b""), "rhs": z(b"")}),
        ),
        case(
            "strcmp_empty_vs_nonempty",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b""), "rhs": z(b"HelloWorld!")}),
        ),
        case(
            "strcmp_nonempty_vs_empty",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b"HelloWorld!"), "rhs": z(b"")}),
        ),
        case(
            "strcmp_identical",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b"Hi There!"), "rhs": z(b"Hi There!")}),
        ),
        case(
            "strcmp_prefix",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b"Hi"), "rhs": z(b"Hi There!")}),
        ),
        case(
            "strcmp_later_difference",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b"tralaAla"), "rhs": z(b"tralaCla")}),
        ),
        case(
            "strcmp_high_byte_is_unsigned",
            "strcmp",
            "C11 7.24.4.2",
            json!({"lhs": z(b"\x80"), "rhs": z(b"z")}),
        ),
        case(
            "strncmp_stops_before_difference",
            "strncmp",
            "C11 7.24.4.4",
            json!({"lhs": z(b"tralaAla"), "rhs": z(b"tralaUla"), "n": 4}),
        ),
        case(
            "strncmp_reaches_difference",
            "strncmp",
            "C11 7.24.4.4",
            json!({"lhs": z(b"tralaAla"), "rhs": z(b"tralaUla"), "n": 6}),
        ),
        case(
            "strncmp_zero_count",
            "strncmp",
            "C11 7.24.4.4",
            json!({"lhs": z(b"abc"), "rhs": z(b"xyz"), "n": 0}),
        ),
        case(
            "strchr_first_match",
            "strchr",
            "C11 7.24.5.2",
            json!({"s": z(b"Tralala"), "c": b'l'}),
        ),
        case(
            "strchr_absent",
            "strchr",
            "C11 7.24.5.2",
            json!({"s": z(b"Tralala"), "c": b'z'}),
        ),
        case(
            "strchr_terminator_is_findable",
            "strchr",
            "C11 7.24.5.2",
            json!({"s": z(b"Tralala"), "c": 0}),
        ),
        case(
            "strrchr_last_match",
            "strrchr",
            "C11 7.24.5.5",
            json!({"s": z(b"Tralala"), "c": b'l'}),
        ),
        case(
            "strrchr_terminator_is_findable",
            "strrchr",
            "C11 7.24.5.5",
            json!({"s": z(b"Tralala"), "c": 0}),
        ),
        case(
            "strspn_letters_prefix",
            "strspn",
            "C11 7.24.5.6",
            json!({"s": z(b"abcde312$#@"), "accept": z(b"qwertyuiopasdfghjklzxcvbnm")}),
        ),
        case(
            "strspn_empty_accept",
            "strspn",
            "C11 7.24.5.6",
            json!({"s": z(b"hello"), "accept": z(b"")}),
        ),
        case(
            "strcspn_empty_reject_is_length",
            "strcspn",
            "C11 7.24.5.3",
            json!({"s": z(b"hello"), "reject": z(b"")}),
        ),
        case(
            "strcspn_stops_at_digit",
            "strcspn",
            "C11 7.24.5.3",
            json!({"s": z(b"abcde312$#@"), "reject": z(b"0123456789")}),
        ),
        case(
            "strpbrk_first_of_set",
            "strpbrk",
            "C11 7.24.5.4",
            json!({"s": z(b"hello, world"), "accept": z(b",!")}),
        ),
        case(
            "strpbrk_absent",
            "strpbrk",
            "C11 7.24.5.4",
            json!({"s": z(b"hello"), "accept": z(b"xyz")}),
        ),
        case(
            "strpbrk_empty_set_never_matches",
            "strpbrk",
            "C11 7.24.5.4",
            json!({"s": z(b"hello"), "accept": z(b"")}),
        ),
        case(
            "strstr_interior_match",
            "strstr",
            "C11 7.24.5.7",
            json!({"haystack": z(b"cdrabgteababauit"), "needle": z(b"aba")}),
        ),
        case(
            "strstr_empty_needle",
            "strstr",
            "C11 7.24.5.7",
            json!({"haystack": z(b"hello"), "needle": z(b"")}),
        ),
        case(
            "strstr_empty_haystack",
            "strstr",
            "C11 7.24.5.7",
            json!({"haystack": z(b""), "needle": z(b"a")}),
        ),
        case(
            "strstr_absent",
            "strstr",
            "C11 7.24.5.7",
            json!({"haystack": z(b"hello world"), "needle": z(b"worlds")}),
        ),
    ]
}

/// Capture the built-in corpus against the host libc.
///
/// Each case's `expected_output` is the host's rendered output, so a later
/// verify run checks the implementation under test against host ground truth.
pub fn capture_fixture_set(captured_at: &str) -> Result<FixtureSet, HarnessError> {
    let mut cases = builtin_corpus();
    for case in &mut cases {
        let run = execute_case(&case.function, &case.inputs)?;
        case.expected_output = run.host_output;
    }
    Ok(FixtureSet {
        version: "v1".to_string(),
        family: "string/scan".to_string(),
        captured_at: captured_at.to_string(),
        cases,
    })
}
