//! Failure-reporting context for assertion helpers.
//!
//! Every check in this crate signals failure through a [`Reporter`] rather
//! than returning a `Result`: a `fatal` call is terminal for the current test
//! case, while `log` emits advisory context and continues. The default
//! [`PanicReporter`] panics on `fatal`, which is the standard way a Rust test
//! fails; [`RecordingReporter`] captures failures instead, so that assertion
//! behavior can itself be tested.

/// Sink for assertion diagnostics.
///
/// Implementations decide what "terminal" means: [`PanicReporter`] aborts the
/// test by panicking, [`RecordingReporter`] records the failure and lets the
/// caller inspect it. Checks in this crate always return immediately after
/// the first `fatal` call, so a non-panicking reporter still sees at most one
/// fatal message per check.
pub trait Reporter {
    /// Emits an advisory line without failing the test.
    fn log(&mut self, message: &str);

    /// Reports a failure that is terminal for the current test case.
    fn fatal(&mut self, message: &str);
}

/// Reporter that fails the test by panicking.
///
/// `log` lines go to stderr so they appear alongside the panic message in
/// test output.
///
/// # Example
///
/// ```rust
/// use errtest::{PanicReporter, Reporter};
///
/// let mut t = PanicReporter;
/// t.log("context line");
/// // t.fatal("boom") would panic and fail the test
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn log(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn fatal(&mut self, message: &str) {
        panic!("{}", message);
    }
}

/// Reporter that records diagnostics instead of panicking.
///
/// Useful for verifying that an assertion fails when it should, and with
/// which message.
///
/// # Example
///
/// ```rust
/// use errtest::{RecordingReporter, Reporter};
///
/// let mut t = RecordingReporter::new();
/// t.fatal("mismatch");
///
/// assert!(t.failed());
/// assert_eq!(t.failures(), ["mismatch"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    logs: Vec<String>,
    failures: Vec<String>,
}

impl RecordingReporter {
    /// Creates an empty recording reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any fatal message has been recorded.
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns the recorded fatal messages, in order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Returns the recorded advisory lines, in order.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }
}

impl Reporter for RecordingReporter {
    fn log(&mut self, message: &str) {
        self.logs.push(message.to_string());
    }

    fn fatal(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}
