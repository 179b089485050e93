//! # errtest
//!
//! Test-assertion helpers for validating structured management errors from a
//! configuration-management subsystem, across four presentation channels:
//! raw/protocol, CLI, RPC, and the `set` command.
//!
//! ## Overview
//!
//! Tests describe what they expect — either directly as an
//! [`ExpMgmtError`] descriptor (path, message fragments, optional info
//! value), or as a [`TestError`] built from a logical [`ErrorKind`] category
//! whose accessors derive the exact expected text per channel. The checks
//! then compare expectations against actual error objects read through the
//! [`Formattable`] capability, and signal any failure through a
//! [`Reporter`], which is terminal for the current test case.
//!
//! Matching is deliberately loose where the callers need it to be: message
//! fragments use substring containment, and [`check_mgmt_errors`] performs a
//! two-directional existence check rather than one-to-one pairing.
//!
//! ## Example
//!
//! ```rust
//! use errtest::{
//!     check_mgmt_errors, ErrorKind, ExpMgmtError, Formattable, MgmtErrorInfo,
//!     PanicReporter, TestError,
//! };
//!
//! // An error as the system under test would produce it.
//! struct Produced;
//! impl Formattable for Produced {
//!     fn path(&self) -> &str {
//!         "/system/mtu"
//!     }
//!     fn message(&self) -> &str {
//!         "Must have value between 1 and 10"
//!     }
//!     fn info(&self) -> &[MgmtErrorInfo] {
//!         &[]
//!     }
//! }
//!
//! let mut t = PanicReporter;
//!
//! // Projection of the logical category gives the expected text.
//! let expected = TestError::new(&mut t, "/system/mtu", ErrorKind::InvalidRange { min: 1, max: 10 });
//! assert_eq!(expected.raw_error_strings()[1], "Must have value between 1 and 10");
//!
//! // Or match directly against descriptors.
//! let descriptors = [ExpMgmtError::new(&["value between 1 and 10"], "/system/mtu", "")];
//! let actual: [&dyn Formattable; 1] = [&Produced];
//! check_mgmt_errors(&mut t, &descriptors, &actual);
//! ```

pub mod check;
pub mod expect;
pub mod formattable;
pub mod path;
pub mod reporter;
pub mod variant;

pub use check::{check_info, check_mgmt_errors, check_mgmt_errors_in_log, check_msg, check_path};
pub use expect::ExpMgmtError;
pub use formattable::{Formattable, MgmtErrorInfo};
pub use path::PathError;
pub use reporter::{PanicReporter, RecordingReporter, Reporter};
pub use variant::{templates, ErrorKind, TestError};
