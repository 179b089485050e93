//! Configuration path tokenizing and display rendering.
//!
//! Management errors carry slash-separated configuration paths such as
//! `/interfaces/dataplane/dp0s3/address`. This module splits those paths into
//! segments and re-renders them in the display forms used by the CLI error
//! formats: a bracketed form with the final segment in `[...]`, and a plain
//! space-joined form.

use thiserror::Error;

/// Error produced when a configuration path cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path contained no segments after splitting on `/`.
    #[error("empty path for {context}")]
    EmptyPath {
        /// Label describing which operation needed the path.
        context: String,
    },
}

/// Splits a slash-separated configuration path into ordered segments.
///
/// Empty segments (leading, trailing or doubled slashes) are discarded.
/// The `context` label names the operation on whose behalf the path is being
/// split; it appears in the error when the path has no segments at all.
///
/// # Errors
///
/// Returns [`PathError::EmptyPath`] if no non-empty segments remain.
///
/// # Example
///
/// ```rust
/// use errtest::path;
///
/// let segments = path::split("/interfaces/dataplane/dp0s3", "example").unwrap();
/// assert_eq!(segments, vec!["interfaces", "dataplane", "dp0s3"]);
///
/// assert!(path::split("", "example").is_err());
/// ```
pub fn split(path: &str, context: &str) -> Result<Vec<String>, PathError> {
    let segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if segments.is_empty() {
        return Err(PathError::EmptyPath {
            context: context.to_string(),
        });
    }
    Ok(segments)
}

/// Renders segments with the final (or only) segment in brackets.
///
/// This is the path form used at the head of CLI and set-command error
/// output: `a b [c]` for a multi-segment path, `[a]` for a single segment.
///
/// # Example
///
/// ```rust
/// use errtest::path;
///
/// let segments = path::split("/system/login/user", "example").unwrap();
/// assert_eq!(path::render_bracketed(&segments), "system login [user]");
/// ```
pub fn render_bracketed(segments: &[String]) -> String {
    match segments.split_last() {
        None => String::new(),
        Some((last, [])) => format!("[{}]", last),
        Some((last, rest)) => format!("{} [{}]", rest.join(" "), last),
    }
}

/// Joins segments with single spaces, no decoration.
///
/// # Example
///
/// ```rust
/// use errtest::path;
///
/// let segments = path::split("/a/b/c", "example").unwrap();
/// assert_eq!(path::join_with_spaces(&segments), "a b c");
/// ```
pub fn join_with_spaces(segments: &[String]) -> String {
    segments.join(" ")
}
