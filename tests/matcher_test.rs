//! Integration tests for the two-directional management-error matcher.

use errtest::{check_mgmt_errors, ExpMgmtError, Formattable, MgmtErrorInfo, RecordingReporter};

struct MgmtErr {
    path: String,
    message: String,
    info: Vec<MgmtErrorInfo>,
}

impl MgmtErr {
    fn new(path: &str, message: &str) -> Self {
        Self {
            path: path.to_string(),
            message: message.to_string(),
            info: Vec::new(),
        }
    }

    fn with_info(mut self, value: &str) -> Self {
        self.info.push(MgmtErrorInfo::new(value));
        self
    }
}

impl Formattable for MgmtErr {
    fn path(&self) -> &str {
        &self.path
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn info(&self) -> &[MgmtErrorInfo] {
        &self.info
    }
}

#[test]
fn test_matching_error_sets_pass() {
    let act1 = MgmtErr::new("/a/b", "Must have value between 1 and 10");
    let act2 = MgmtErr::new("/c/d", "Node exists").with_info("dp0s3");

    let expected = [
        ExpMgmtError::new(&["value between", "1 and 10"], "/a/b", ""),
        ExpMgmtError::new(&["Node exists"], "/c/d", "dp0s3"),
    ];
    let actual: [&dyn Formattable; 2] = [&act1, &act2];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(!t.failed(), "{:?}", t.failures());
}

#[test]
fn test_empty_sets_pass() {
    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &[], &[]);
    assert!(!t.failed());
}

#[test]
fn test_unexpected_actual_fails_with_diagnostics() {
    let act = MgmtErr::new("/unexpected/path", "boom").with_info("iv");
    let expected = [ExpMgmtError::new(&["boom"], "/wanted/path", "")];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);

    assert!(t.failed());
    let failure = &t.failures()[0];
    assert!(failure.contains("Found unexpected error"));
    assert!(failure.contains("/unexpected/path"));
    assert!(failure.contains("boom"));
    assert!(failure.contains("iv"));
    // The first expected descriptor is logged for context.
    assert_eq!(t.logs().len(), 1);
    assert!(t.logs()[0].contains("/wanted/path"));
}

#[test]
fn test_path_differing_from_all_expected_fails() {
    let act = MgmtErr::new("/a/b", "msg");
    let expected = [
        ExpMgmtError::new(&["msg"], "/x", ""),
        ExpMgmtError::new(&["msg"], "/y", ""),
    ];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(t.failed());
}

#[test]
fn test_missing_expected_fails_with_descriptor_shown() {
    let act = MgmtErr::new("/a/b", "present");
    let expected = [
        ExpMgmtError::new(&["present"], "/a/b", ""),
        ExpMgmtError::new(&["absent"], "/a/b", ""),
    ];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);

    assert!(t.failed());
    let failure = &t.failures()[0];
    assert!(failure.contains("Error not found"));
    assert!(failure.contains("absent"));
}

#[test]
fn test_expected_info_without_matching_actual_fails() {
    let act = MgmtErr::new("/a/b", "msg");
    let expected = [ExpMgmtError::new(&["msg"], "/a/b", "some-info")];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(t.failed());
}

#[test]
fn test_only_first_info_entry_compared() {
    let act = MgmtErr::new("/a/b", "msg").with_info("first").with_info("second");
    let expected = [ExpMgmtError::new(&["msg"], "/a/b", "first")];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(!t.failed());

    // Matching on a later entry's value does not count.
    let expected = [ExpMgmtError::new(&["msg"], "/a/b", "second")];
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(t.failed());
}

#[test]
fn test_fragment_containment_not_equality() {
    let act = MgmtErr::new("/a/b", "prefix middle suffix");
    let expected = [ExpMgmtError::new(&["middle"], "/a/b", "")];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(!t.failed());
}

#[test]
fn test_all_fragments_must_be_contained() {
    let act = MgmtErr::new("/a/b", "only some fragments here");
    let expected = [ExpMgmtError::new(&["some fragments", "missing one"], "/a/b", "")];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(t.failed());
}

#[test]
fn test_duplicate_actuals_satisfied_by_one_descriptor() {
    // Existence check in each direction, not consumption-based pairing:
    // duplicate actual errors are not individually accounted for.
    let act1 = MgmtErr::new("/a/b", "same error");
    let act2 = MgmtErr::new("/a/b", "same error");
    let expected = [ExpMgmtError::new(&["same error"], "/a/b", "")];
    let actual: [&dyn Formattable; 2] = [&act1, &act2];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(!t.failed());
}

#[test]
fn test_one_actual_satisfies_multiple_descriptors() {
    let act = MgmtErr::new("/a/b", "alpha beta");
    let expected = [
        ExpMgmtError::new(&["alpha"], "/a/b", ""),
        ExpMgmtError::new(&["beta"], "/a/b", ""),
    ];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(!t.failed());
}

#[test]
fn test_empty_fragment_list_matches_any_message() {
    let act = MgmtErr::new("/a/b", "anything at all");
    let expected = [ExpMgmtError::new(&[] as &[&str], "/a/b", "")];
    let actual: [&dyn Formattable; 1] = [&act];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &expected, &actual);
    assert!(!t.failed());
}

#[test]
fn test_first_failure_stops_the_check() {
    let act1 = MgmtErr::new("/bad/one", "x");
    let act2 = MgmtErr::new("/bad/two", "y");
    let actual: [&dyn Formattable; 2] = [&act1, &act2];

    let mut t = RecordingReporter::new();
    check_mgmt_errors(&mut t, &[], &actual);

    // Only the first unexpected error is reported.
    assert_eq!(t.failures().len(), 1);
    assert!(t.failures()[0].contains("/bad/one"));
}
