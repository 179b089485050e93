//! Per-category expected-error projections.
//!
//! A [`TestError`] holds, for one conceptual management error, its canonical
//! path plus the message parts each presentation channel should show. It is
//! built from an [`ErrorKind`] — a closed set of logical error categories,
//! each carrying only the parameters that vary for that category — and the
//! canonical text comes from [`templates`]. The CLI and set-command
//! projections are assembled at read time from the stored parts plus the
//! path renderings in [`crate::path`], so the display framing is defined
//! once rather than per category.

pub mod templates;

use crate::path;
use crate::reporter::Reporter;

use self::templates as tmpl;

/// One logical error category plus its varying parameters.
///
/// Each variant maps to fixed per-channel templates; constructing a
/// [`TestError`] from it yields the exact strings the system under test is
/// expected to emit for that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Authorization failure for the requested operation or data model.
    AccessDenied,
    /// Referenced interface is not configured.
    InterfaceMustExist,
    /// An unexpected element is present at the path.
    InvalidNode,
    /// List/leaf-list element count outside the allowed range.
    InvalidNumElements { min: i64, max: i64 },
    /// Value outside a numeric range restriction.
    InvalidRange { min: i64, max: i64 },
    /// Range restriction with a schema-supplied error message.
    InvalidRangeCustom { message: String },
    /// The path itself cannot be resolved.
    InvalidPath,
    /// Value fails a pattern restriction.
    InvalidPattern { pattern: String },
    /// Pattern restriction with a schema-supplied error message.
    InvalidPatternCustom { message: String },
    /// Value has the wrong type; the final path segment is the value shown.
    InvalidType { type_name: String },
    /// Value fails a length restriction.
    InvalidLength { min: i64, max: i64 },
    /// Length restriction with a schema-supplied error message.
    InvalidLengthCustom { message: String },
    /// A leafref target that must exist, does not.
    Leafref { leafref_path: String },
    /// List entry created without its key.
    MissingKey,
    /// A mandatory child node is absent. The reported path is the parent;
    /// the missing final segment appears in the message.
    MissingMandatoryNode,
    /// Delete/access of a node that is not present.
    NodeDoesntExist,
    /// Create of a node that is already present.
    NodeExists,
    /// Node cannot be left without a child.
    NodeRequiresChild,
    /// Node cannot be left without a value.
    NodeRequiresValue,
    /// A `unique` constraint is violated by the given child paths and keys.
    NonUniquePaths {
        keys: Vec<String>,
        children: Vec<String>,
    },
    /// A set path matches more than one schema node.
    PathAmbiguous,
    /// Data does not correspond to the schema.
    SchemaMismatch,
    /// A validation script rejected the configuration with its own output.
    Syntax { script_error: String },
    /// Element not defined by the schema.
    UnknownElement,
    /// Failed `must` condition with a schema-supplied error message.
    MustCustom { message: String },
    /// Failed `when` condition with a schema-supplied error message.
    WhenCustom { message: String },
    /// Failed `must` condition, default message quoting the statement.
    MustDefault { statement: String },
    /// Failed `when` condition, default message quoting the statement.
    WhenDefault { statement: String },
}

/// How the set-command channel presents this error.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SetMsg {
    /// Category has no set-command projection; requesting one is a test bug.
    None,
    /// Header line only, no message below it.
    Silent,
    /// Header line followed by this message.
    Text(String),
}

/// The expected per-channel text for one management error.
///
/// Built once by [`TestError::new`]; accessors assemble each channel's final
/// ordered strings on every call without mutating the value.
///
/// # Example
///
/// ```rust
/// use errtest::{ErrorKind, PanicReporter, TestError};
///
/// let mut t = PanicReporter;
/// let err = TestError::new(&mut t, "/system/mtu", ErrorKind::InvalidRange { min: 1, max: 10 });
///
/// assert_eq!(
///     err.set_cli_error_strings(&mut t),
///     vec![
///         "Configuration path: system [mtu] is not valid".to_string(),
///         "Must have value between 1 and 10".to_string(),
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError {
    path: String,
    raw_msgs: Vec<String>,
    cli_msgs: Vec<String>,
    rpc_msgs: Vec<String>,
    set_msg: SetMsg,
    set_suffix: Option<String>,
}

impl TestError {
    /// Builds the expected projections for one error category at a path.
    ///
    /// Categories that decompose the path (`InvalidType`,
    /// `MissingMandatoryNode`, the leafref and `must`/`when` forms) report a
    /// fatal failure through `t` when the relevant path has no segments.
    pub fn new(t: &mut dyn Reporter, path: impl Into<String>, kind: ErrorKind) -> Self {
        let mut te = Self {
            path: path.into(),
            raw_msgs: Vec::new(),
            cli_msgs: Vec::new(),
            rpc_msgs: Vec::new(),
            set_msg: SetMsg::None,
            set_suffix: None,
        };

        match kind {
            ErrorKind::AccessDenied => {
                te.raw_msgs = vec![tmpl::ACCESS_DENIED.to_string()];
            }
            ErrorKind::InterfaceMustExist => {
                te.raw_msgs = vec![tmpl::INTERFACE_MUST_EXIST.to_string()];
                te.cli_msgs = vec![tmpl::INTERFACE_MUST_EXIST.to_string()];
            }
            ErrorKind::InvalidNode => {
                te.raw_msgs = vec![tmpl::UNEXPECTED_ELEMENT.to_string()];
                te.cli_msgs = vec![
                    "Configuration path".to_string(),
                    tmpl::IS_NOT_VALID.to_string(),
                ];
                te.rpc_msgs = vec![tmpl::IS_NOT_VALID.to_string()];
                te.set_msg = SetMsg::Silent;
            }
            ErrorKind::InvalidNumElements { min, max } => {
                let msg = tmpl::wrong_num_elements(min, max);
                te.raw_msgs = vec![msg.clone()];
                te.cli_msgs = vec![msg];
                te.set_msg = SetMsg::Silent;
            }
            ErrorKind::InvalidRange { min, max } => {
                let msg = tmpl::wrong_range(min, max);
                te.raw_msgs = vec![msg.clone()];
                te.cli_msgs = vec![msg.clone()];
                te.set_msg = SetMsg::Text(msg);
            }
            ErrorKind::InvalidRangeCustom { message }
            | ErrorKind::InvalidPatternCustom { message }
            | ErrorKind::InvalidLengthCustom { message } => {
                te.raw_msgs = vec![message.clone()];
                te.cli_msgs = vec![message.clone()];
                te.set_msg = SetMsg::Text(message);
            }
            ErrorKind::InvalidPath => {
                te.raw_msgs = vec![format!("{}: {}", te.path, tmpl::PATH_IS_INVALID)];
                te.cli_msgs = vec![tmpl::TBD.to_string()];
                te.set_msg = SetMsg::Text(tmpl::PATH_IS_INVALID.to_string());
            }
            ErrorKind::InvalidPattern { pattern } => {
                te.raw_msgs = vec![tmpl::must_match_pattern(&pattern)];
                te.cli_msgs = vec![tmpl::doesnt_match_pattern(&pattern)];
                te.set_msg = SetMsg::Text(tmpl::doesnt_match_pattern(&pattern));
            }
            ErrorKind::InvalidType { type_name } => {
                let segments = path_slice(t, &te.path, "invalid type");
                if let Some(last) = segments.last() {
                    let msg = tmpl::wrong_type(last, &type_name);
                    te.raw_msgs = vec![msg.clone()];
                    te.cli_msgs = vec![msg.clone()];
                    te.set_msg = SetMsg::Text(msg);
                }
            }
            ErrorKind::InvalidLength { min, max } => {
                let msg = tmpl::wrong_length(min, max);
                te.raw_msgs = vec![msg.clone()];
                te.cli_msgs = vec![msg.clone()];
                te.set_msg = SetMsg::Text(msg);
            }
            ErrorKind::Leafref { leafref_path } => {
                let target = path::join_with_spaces(&path_slice(t, &leafref_path, "leafref"));
                te.raw_msgs = vec![tmpl::LEAFREF_ERROR.to_string(), target.clone()];
                te.cli_msgs = vec![tmpl::LEAFREF_ERROR.to_string(), target];
            }
            ErrorKind::MissingKey => {
                te.raw_msgs = vec![tmpl::MISSING_LIST_KEY.to_string()];
                te.cli_msgs = vec![tmpl::MISSING_LIST_KEY.to_string()];
                te.set_msg = SetMsg::Text(tmpl::NOT_YET_TESTED.to_string());
            }
            ErrorKind::MissingMandatoryNode => {
                let Ok(segments) = path::split(&te.path, "mandatory") else {
                    t.fatal("Cannot have empty path for missing mandatory node error");
                    return te;
                };
                let Some((last, parent)) = segments.split_last() else {
                    return te;
                };
                let msg = format!("{} {}", tmpl::MISSING_MANDATORY, last);
                te.path = parent.join("/");
                te.raw_msgs = vec![msg.clone()];
                te.cli_msgs = vec![msg];
            }
            ErrorKind::NodeDoesntExist => {
                te.raw_msgs = vec![tmpl::NODE_DOESNT_EXIST.to_string()];
                te.cli_msgs = vec![tmpl::NODE_DOESNT_EXIST.to_string()];
                te.set_msg = SetMsg::Text(tmpl::NODE_DOESNT_EXIST.to_string());
            }
            ErrorKind::NodeExists => {
                te.raw_msgs = vec![tmpl::NODE_EXISTS.to_string()];
                te.cli_msgs = vec![tmpl::NODE_EXISTS.to_string()];
                te.set_msg = SetMsg::Text(tmpl::NODE_EXISTS.to_string());
            }
            ErrorKind::NodeRequiresChild => {
                te.raw_msgs = vec![tmpl::NOT_YET_TESTED.to_string()];
                te.cli_msgs = vec![tmpl::NOT_YET_TESTED.to_string()];
                te.set_msg = SetMsg::Text(tmpl::NODE_REQUIRES_CHILD.to_string());
            }
            ErrorKind::NodeRequiresValue => {
                te.raw_msgs = vec![tmpl::NOT_YET_TESTED.to_string()];
                te.cli_msgs = vec![tmpl::NOT_YET_TESTED.to_string()];
                te.set_msg = SetMsg::Text(tmpl::NODE_REQUIRES_VALUE.to_string());
            }
            ErrorKind::NonUniquePaths { keys, children } => {
                let msgs = vec![
                    tmpl::NON_UNIQUE_PATHS.to_string(),
                    tmpl::bracketed_list(&children),
                    tmpl::NON_UNIQUE_KEYS.to_string(),
                    tmpl::bracketed_list(&keys),
                ];
                te.raw_msgs = msgs.clone();
                te.cli_msgs = msgs;
            }
            ErrorKind::PathAmbiguous => {
                te.raw_msgs = vec![tmpl::TBD.to_string()];
                te.cli_msgs = vec![tmpl::TBD.to_string()];
                te.set_suffix = Some(tmpl::IS_AMBIGUOUS.to_string());
                te.set_msg = SetMsg::Text(tmpl::POSSIBLE_COMPLETIONS.to_string());
            }
            ErrorKind::SchemaMismatch => {
                te.raw_msgs = vec![tmpl::DOESNT_MATCH_SCHEMA.to_string()];
                te.cli_msgs = vec![tmpl::TBD.to_string()];
            }
            ErrorKind::Syntax { script_error } => {
                te.raw_msgs = vec![script_error.clone()];
                te.cli_msgs = vec![script_error];
            }
            ErrorKind::UnknownElement => {
                te.raw_msgs = vec![tmpl::DOESNT_MATCH_SCHEMA.to_string()];
                te.cli_msgs = vec![tmpl::TBD.to_string()];
                te.set_msg = SetMsg::Silent;
            }
            ErrorKind::MustCustom { message } | ErrorKind::WhenCustom { message } => {
                let joined = path::join_with_spaces(&path_slice(t, &te.path, "xpath custom"));
                te.raw_msgs = vec![te.path.clone(), message.clone()];
                te.cli_msgs = vec![format!("[{}]", joined), message];
            }
            ErrorKind::MustDefault { statement } => {
                let joined = path::join_with_spaces(&path_slice(t, &te.path, "must default"));
                let msg = tmpl::must_condition_false(&statement);
                te.raw_msgs = vec![te.path.clone(), msg.clone()];
                te.cli_msgs = vec![format!("[{}]", joined), msg];
            }
            ErrorKind::WhenDefault { statement } => {
                let joined = path::join_with_spaces(&path_slice(t, &te.path, "when default"));
                let msg = tmpl::when_condition_false(&statement);
                te.raw_msgs = vec![te.path.clone(), msg.clone()];
                te.cli_msgs = vec![format!("[{}]", joined), msg];
            }
        }

        te
    }

    /// The canonical path this error is reported against.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw-channel strings: the path followed by the raw messages.
    pub fn raw_error_strings(&self) -> Vec<String> {
        let mut out = vec![self.path.clone()];
        out.extend(self.raw_msgs.iter().cloned());
        out
    }

    /// Raw-channel strings without the leading path.
    pub fn raw_error_strings_no_path(&self) -> Vec<String> {
        self.raw_msgs.clone()
    }

    /// CLI-channel strings: the bracketed path rendering followed by the
    /// CLI messages.
    pub fn cli_error_strings(&self, t: &mut dyn Reporter) -> Vec<String> {
        let segments = path_slice(t, &self.path, "generic error");
        let mut out = vec![path::render_bracketed(&segments)];
        out.extend(self.cli_msgs.iter().cloned());
        out
    }

    /// CLI messages alone, as shown in commit output (no path header).
    pub fn commit_cli_error_strings(&self) -> Vec<String> {
        self.cli_msgs.clone()
    }

    /// RPC-channel strings: the bracketed path rendering followed by the
    /// RPC messages.
    ///
    /// Fatal if this category never populated an RPC projection; that means
    /// the test requested a channel the category does not wire up.
    pub fn rpc_error_strings(&self, t: &mut dyn Reporter) -> Vec<String> {
        if self.rpc_msgs.is_empty() {
            t.fatal("Test error has no RPC messages");
            return Vec::new();
        }

        let segments = path_slice(t, &self.path, "rpc error");
        let mut out = vec![path::render_bracketed(&segments)];
        out.extend(self.rpc_msgs.iter().cloned());
        out
    }

    /// Set-command strings.
    ///
    /// Standard format for set errors is:
    ///
    /// ```text
    /// Configuration path: <path with last/only element in []> is not valid
    ///
    /// <set message>
    /// ```
    ///
    /// !!! DO NOT CHANGE THIS FORMAT WITHOUT CONSULTATION !!!
    ///
    /// Categories marked silent produce the header line alone; a non-default
    /// suffix (currently only "is ambiguous") replaces "is not valid".
    /// Fatal if this category has no set-command projection at all.
    pub fn set_cli_error_strings(&self, t: &mut dyn Reporter) -> Vec<String> {
        match &self.set_msg {
            SetMsg::None => {
                t.fatal("Test error has no set message");
                Vec::new()
            }
            SetMsg::Silent => vec![self.set_header(t, tmpl::IS_NOT_VALID)],
            SetMsg::Text(msg) => {
                let suffix = self.set_suffix.as_deref().unwrap_or(tmpl::IS_NOT_VALID);
                vec![self.set_header(t, suffix), msg.clone()]
            }
        }
    }

    /// The set-command header line: prefix, bracketed path, suffix.
    fn set_header(&self, t: &mut dyn Reporter, suffix: &str) -> String {
        let segments = path_slice(t, &self.path, "generic error");
        format!(
            "{} {} {}",
            tmpl::CONFIG_PATH,
            path::render_bracketed(&segments),
            suffix
        )
    }
}

/// Splits a path for display, reporting tokenization failure through `t`.
///
/// Returns no segments after a failure so callers can keep assembling a
/// degenerate value; with the panicking reporter execution never gets that
/// far.
fn path_slice(t: &mut dyn Reporter, path: &str, context: &str) -> Vec<String> {
    match path::split(path, context) {
        Ok(segments) => segments,
        Err(e) => {
            t.fatal(&e.to_string());
            Vec::new()
        }
    }
}
