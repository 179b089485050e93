//! The error capability consumed from the system under test.
//!
//! This crate never constructs management errors; it only reads them through
//! the [`Formattable`] trait. Any error type the configuration-management
//! subsystem produces must expose its path, message, and structured info
//! entries through this interface. Requiring the trait bound statically is
//! the loudest possible capability check: an error type that lacks the
//! accessors cannot be handed to a check function at all.

/// One structured info entry attached to a management error.
///
/// Only the first entry's `value` participates in matching; further entries
/// (and further fields a producer may carry) are ignored by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MgmtErrorInfo {
    /// The info value compared against expectations.
    pub value: String,
}

impl MgmtErrorInfo {
    /// Creates an info entry from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Read access to a management error produced by the system under test.
///
/// This is the sole coupling point between the assertion helpers and the
/// error-producing subsystem.
///
/// # Example
///
/// ```rust
/// use errtest::{Formattable, MgmtErrorInfo};
///
/// struct ProducedError {
///     path: String,
///     message: String,
///     info: Vec<MgmtErrorInfo>,
/// }
///
/// impl Formattable for ProducedError {
///     fn path(&self) -> &str {
///         &self.path
///     }
///     fn message(&self) -> &str {
///         &self.message
///     }
///     fn info(&self) -> &[MgmtErrorInfo] {
///         &self.info
///     }
/// }
/// ```
pub trait Formattable {
    /// The configuration path the error refers to.
    fn path(&self) -> &str;

    /// The human-readable error message.
    fn message(&self) -> &str;

    /// The ordered structured-info entries, possibly empty.
    fn info(&self) -> &[MgmtErrorInfo];
}
