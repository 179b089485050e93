//! Integration tests for log-containment checking of expected errors.

use errtest::{check_mgmt_errors_in_log, ExpMgmtError, RecordingReporter};

#[test]
fn test_all_parts_present_pass() {
    let log = "\
2026-08-29T10:00:01 warn: validation of /interfaces/dataplane/dp0s3 failed\n\
2026-08-29T10:00:01 warn: Must have value between 68 and 9000 (info: mtu)\n";

    let expected = [ExpMgmtError::new(
        &["Must have value between", "68 and 9000"],
        "/interfaces/dataplane/dp0s3",
        "mtu",
    )];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, log, &expected);
    assert!(!t.failed(), "{:?}", t.failures());
}

#[test]
fn test_parts_may_be_scattered_and_unordered() {
    // Containment only: no structure, no ordering, fragments may come from
    // different lines.
    let log = "info-val then /b/two then first-frag then /a/one second-frag";

    let expected = [
        ExpMgmtError::new(&["second-frag", "first-frag"], "/a/one", ""),
        ExpMgmtError::new(&["then"], "/b/two", "info-val"),
    ];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, log, &expected);
    assert!(!t.failed());
}

#[test]
fn test_two_descriptors_may_match_same_region() {
    let log = "/a/b shared message text";
    let expected = [
        ExpMgmtError::new(&["shared message"], "/a/b", ""),
        ExpMgmtError::new(&["message text"], "/a/b", ""),
    ];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, log, &expected);
    assert!(!t.failed());
}

#[test]
fn test_missing_path_fails() {
    let expected = [ExpMgmtError::new(&["msg"], "/not/in/log", "")];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, "msg only", &expected);

    assert!(t.failed());
    assert!(t.failures()[0].contains("doesn't contain path: /not/in/log"));
}

#[test]
fn test_missing_fragment_fails() {
    let expected = [ExpMgmtError::new(&["seen", "unseen"], "/a/b", "")];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, "/a/b seen", &expected);

    assert!(t.failed());
    assert!(t.failures()[0].contains("doesn't contain msg: unseen"));
}

#[test]
fn test_missing_info_fails() {
    let expected = [ExpMgmtError::new(&["seen"], "/a/b", "info-val")];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, "/a/b seen", &expected);

    assert!(t.failed());
    assert!(t.failures()[0].contains("doesn't contain info: info-val"));
}

#[test]
fn test_empty_info_not_required_in_log() {
    let expected = [ExpMgmtError::new(&["seen"], "/a/b", "")];

    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, "/a/b seen", &expected);
    assert!(!t.failed());
}

#[test]
fn test_empty_descriptor_list_passes_any_log() {
    let mut t = RecordingReporter::new();
    check_mgmt_errors_in_log(&mut t, "", &[]);
    assert!(!t.failed());
}
