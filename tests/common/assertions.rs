//! Logged assertion helpers.
//!
//! These wrap the standard assertions with `tracing` events so a failure in
//! CI comes with the values that were compared.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
///
/// ```rust,ignore
/// assert_eq_logged("keyword count", colorswatch::named::len(), 148);
/// ```
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that a Result is Ok, returning the value.
///
/// ```rust,ignore
/// let red = assert_ok_logged("parse red", parse_color("red"));
/// ```
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "asserting Ok");

    match result {
        Ok(value) => value,
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that a Result is Err, returning the error.
///
/// ```rust,ignore
/// let err = assert_err_logged("typo", parse_color("tomatoe"));
/// ```
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");

    match result {
        Err(e) => e,
        Ok(ref value) => {
            tracing::error!(
                context = context,
                value = ?value,
                "assertion failed: expected Err, got Ok"
            );
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Assert that `haystack` contains `needle`.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(
        context = context,
        needle = needle,
        haystack_len = haystack.len(),
        "asserting contains"
    );

    if !haystack.contains(needle) {
        tracing::error!(
            context = context,
            needle = needle,
            haystack = haystack,
            "assertion failed: needle not found"
        );
    }

    assert!(
        haystack.contains(needle),
        "{context}: expected to find {needle:?} in:\n{haystack}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_eq_logged_pass() {
        assert_eq_logged("numbers", 255, 255);
    }

    #[test]
    #[should_panic(expected = "channel")]
    fn test_assert_eq_logged_fail() {
        assert_eq_logged("channel", 254, 255);
    }

    #[test]
    fn test_assert_ok_and_err_logged() {
        let ok: Result<u8, String> = Ok(7);
        assert_eq!(assert_ok_logged("ok", ok), 7);
        let err: Result<u8, String> = Err("bad".to_string());
        assert_eq!(assert_err_logged("err", err), "bad");
    }
}
