//! Matching and assertion functions over management errors.
//!
//! [`check_mgmt_errors`] is the core matcher: two independent directional
//! scans that verify every actual error was expected and every expected
//! error was seen. It is an existence check in each direction, not a
//! one-to-one pairing: matched elements are not consumed, so one actual
//! error can satisfy several descriptors and duplicate actual errors are not
//! individually accounted for. That weak semantics is deliberate and relied
//! upon by existing suites.
//!
//! The single-field assertors ([`check_path`], [`check_msg`],
//! [`check_info`]) compare one field of one error against one literal, and
//! [`check_mgmt_errors_in_log`] does order-insensitive substring containment
//! over a captured log.

use crate::expect::ExpMgmtError;
use crate::formattable::{Formattable, MgmtErrorInfo};
use crate::reporter::Reporter;

/// Checks that actual and expected error sets correspond.
///
/// Direction one: every actual error must match *some* descriptor — exact
/// path, matching first info value, and every message fragment contained in
/// the actual message. Direction two: every descriptor must match *some*
/// actual error under the same three conditions. The first failure in either
/// direction is fatal, with a diagnostic showing the offending side.
///
/// # Example
///
/// ```rust
/// use errtest::{check_mgmt_errors, ExpMgmtError, Formattable, MgmtErrorInfo, PanicReporter};
///
/// struct Err1;
/// impl Formattable for Err1 {
///     fn path(&self) -> &str {
///         "/system/mtu"
///     }
///     fn message(&self) -> &str {
///         "Must have value between 1 and 10"
///     }
///     fn info(&self) -> &[MgmtErrorInfo] {
///         &[]
///     }
/// }
///
/// let expected = [ExpMgmtError::new(&["value between"], "/system/mtu", "")];
/// let actual: [&dyn Formattable; 1] = [&Err1];
/// check_mgmt_errors(&mut PanicReporter, &expected, &actual);
/// ```
pub fn check_mgmt_errors(
    t: &mut dyn Reporter,
    expected: &[ExpMgmtError],
    actual: &[&dyn Formattable],
) {
    // All actual errors must have been expected.
    for act in actual {
        let found = expected.iter().any(|exp| error_matches(*act, exp));
        if !found {
            if let Some(first) = expected.first() {
                t.log(&format!("Expecting: {}", first));
            }
            t.fatal(&format!(
                "Found unexpected error:\n\tPath:\t{}\n\tMsg:\t{}\n\tInfo:\t{:?}",
                act.path(),
                act.message(),
                act.info()
            ));
            return;
        }
    }

    // All expected errors must have been seen.
    for exp in expected {
        let found = actual.iter().any(|act| error_matches(*act, exp));
        if !found {
            t.fatal(&format!(
                "Error not found:\n\tPath:\t{}\n\tMsgs:\t{:?}\n\tInfo:\t{}",
                exp.path(),
                exp.msg_contents(),
                exp.info()
            ));
            return;
        }
    }
}

/// Checks that an actual error carries exactly the expected path.
pub fn check_path(t: &mut dyn Reporter, err: &dyn Formattable, expected_path: &str) {
    if err.path() != expected_path {
        t.fatal(&format!(
            "Path mismatch:\nExp:\t'{}'\nGot:\t'{}'",
            expected_path,
            err.path()
        ));
    }
}

/// Checks that an actual error carries exactly the expected message.
pub fn check_msg(t: &mut dyn Reporter, err: &dyn Formattable, expected_msg: &str) {
    if err.message() != expected_msg {
        t.fatal(&format!(
            "Msg mismatch:\nExp:\t'{}'\nGot:\t'{}'",
            expected_msg,
            err.message()
        ));
    }
}

/// Checks an actual error's first info value against one expected literal.
///
/// Four cases: nothing expected and nothing seen passes; an info entry when
/// none was expected fails, reporting the unexpected value; no info entry
/// when one was expected fails; otherwise the first entry's value must equal
/// the expectation exactly. Entries after the first are ignored.
pub fn check_info(t: &mut dyn Reporter, err: &dyn Formattable, expected_info_val: &str) {
    let first = err.info().first();

    if expected_info_val.is_empty() {
        // Nothing expected, nothing seen. All clear.
        if let Some(info) = first {
            t.fatal(&format!("Unexpected info value: '{}'", info.value));
        }
        return;
    }

    let Some(info) = first else {
        t.fatal("No info value!");
        return;
    };

    if info.value != expected_info_val {
        t.fatal(&format!(
            "Info value mismatch:\nExp:\t'{}'\nGot:\t'{}'",
            expected_info_val, info.value
        ));
    }
}

/// Rough and ready check that all parts of all expected errors appear
/// somewhere in a captured log.
///
/// Pure substring containment: each descriptor's path, every message
/// fragment, and the info value (when non-empty) must appear as literals.
/// No ordering and no cross-descriptor correlation is required; two
/// descriptors may match the same log region.
pub fn check_mgmt_errors_in_log(t: &mut dyn Reporter, log: &str, expected: &[ExpMgmtError]) {
    for exp in expected {
        if !log.contains(exp.path()) {
            t.fatal(&format!("Log doesn't contain path: {}", exp.path()));
            return;
        }
        for msg in exp.msg_contents() {
            if !log.contains(msg.as_str()) {
                t.fatal(&format!("Log doesn't contain msg: {}", msg));
                return;
            }
        }
        if !exp.info().is_empty() && !log.contains(exp.info()) {
            t.fatal(&format!("Log doesn't contain info: {}", exp.info()));
            return;
        }
    }
}

/// True if the actual error satisfies one descriptor: exact path, matching
/// first info value, and all fragments contained in the message.
fn error_matches(act: &dyn Formattable, exp: &ExpMgmtError) -> bool {
    act.path() == exp.path()
        && info_matches(act.info(), exp.info())
        && exp
            .msg_contents()
            .iter()
            .all(|frag| act.message().contains(frag.as_str()))
}

/// Empty actual info matches only an empty expectation; otherwise compare
/// the first entry's value alone.
fn info_matches(info: &[MgmtErrorInfo], expected_val: &str) -> bool {
    match info.first() {
        None => expected_val.is_empty(),
        Some(first) => first.value == expected_val,
    }
}
