//! Expected-error descriptors built by test code.

use std::fmt::{self, Display};

/// Description of one management error a test expects to see.
///
/// An `ExpMgmtError` carries:
/// - **msg_contents**: fragments that must all appear, as substrings, in the
///   actual error's message (fragment containment, not equality)
/// - **path**: matched exactly against the actual error's path
/// - **info**: the expected first structured-info value; empty means "no
///   info expected"
///
/// Descriptors are immutable once built and perform no validation of their
/// own; all checking happens in the matcher.
///
/// # Example
///
/// ```rust
/// use errtest::ExpMgmtError;
///
/// let exp = ExpMgmtError::new(
///     &["Must have value between", "1 and 10"],
///     "/system/mtu",
///     "",
/// );
/// assert_eq!(exp.path(), "/system/mtu");
/// assert_eq!(exp.info(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpMgmtError {
    msg_contents: Vec<String>,
    path: String,
    info: String,
}

impl ExpMgmtError {
    /// Creates a descriptor from message fragments, an exact path, and an
    /// optional info value (empty string for none).
    pub fn new<S: AsRef<str>>(msgs: &[S], path: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            msg_contents: msgs.iter().map(|s| s.as_ref().to_string()).collect(),
            path: path.into(),
            info: info.into(),
        }
    }

    /// The message fragments the actual error must contain.
    pub fn msg_contents(&self) -> &[String] {
        &self.msg_contents
    }

    /// The exact path the actual error must carry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The expected first info value; empty means "no info expected".
    pub fn info(&self) -> &str {
        &self.info
    }
}

impl Display for ExpMgmtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path '{}', msgs {:?}, info '{}'",
            self.path, self.msg_contents, self.info
        )
    }
}
