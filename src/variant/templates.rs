//! Canonical error-text templates, one per channel and category.
//!
//! Every literal a [`TestError`](super::TestError) projection can emit lives
//! here, so that the exact wording is defined in exactly one place.
//!
//! !!! DO NOT CHANGE THESE STRINGS WITHOUT CONSULTATION !!!
//!
//! CLI-compatibility test suites compare against this text verbatim; any
//! change must be signed off against those suites first. [`catalog`] exposes
//! the full table so a stability test can pin it.

use indexmap::IndexMap;

/// Prefix of the set-command error header line.
pub const CONFIG_PATH: &str = "Configuration path:";

/// Default suffix of the set-command error header line.
pub const IS_NOT_VALID: &str = "is not valid";

/// Suffix used when a set path matches more than one schema node.
pub const IS_AMBIGUOUS: &str = "is ambiguous";

pub const ACCESS_DENIED: &str = "Access to the requested protocol operation \
or data model is denied because authorization failed.";

pub const INTERFACE_MUST_EXIST: &str = "Interface must exist";

pub const UNEXPECTED_ELEMENT: &str = "An unexpected element is present";

pub const PATH_IS_INVALID: &str = "Path is invalid";

pub const MISSING_LIST_KEY: &str = "List entry is missing key";

pub const MISSING_MANDATORY: &str = "Missing mandatory node";

pub const NODE_EXISTS: &str = "Node exists";

pub const NODE_DOESNT_EXIST: &str = "Node does not exist";

pub const NODE_REQUIRES_CHILD: &str = "Node requires a child";

pub const NODE_REQUIRES_VALUE: &str = "Node requires a value";

pub const LEAFREF_ERROR: &str = "The following path must exist:";

pub const NON_UNIQUE_PATHS: &str = "The following set of paths must be unique:";

pub const NON_UNIQUE_KEYS: &str = "The following keys are not unique:";

pub const POSSIBLE_COMPLETIONS: &str = "Possible completions:";

pub const DOESNT_MATCH_SCHEMA: &str = "Doesn't match schema";

/// Placeholder for CLI renderings that have not been settled yet.
pub const TBD: &str = "TBD";

/// Placeholder for channels whose output has not been captured yet.
pub const NOT_YET_TESTED: &str = "Not yet tested";

/// Range-violation text: `Must have value between <min> and <max>`.
pub fn wrong_range(min: i64, max: i64) -> String {
    format!("Must have value between {} and {}", min, max)
}

/// Length-violation text: `Must have length between <min> and <max>`.
pub fn wrong_length(min: i64, max: i64) -> String {
    format!("Must have length between {} and {}", min, max)
}

/// Cardinality-violation text for list/leaf-list element counts.
pub fn wrong_num_elements(min: i64, max: i64) -> String {
    format!("Invalid number of nodes: must be in range {} to {}", min, max)
}

/// Raw-channel pattern-violation text.
pub fn must_match_pattern(pattern: &str) -> String {
    format!("Must match {}", pattern)
}

/// CLI/set-channel pattern-violation text.
pub fn doesnt_match_pattern(pattern: &str) -> String {
    format!("Does not match pattern {}", pattern)
}

/// Type-violation text: `<value> is not <type>`.
pub fn wrong_type(value: &str, type_name: &str) -> String {
    format!("{} is not {}", value, type_name)
}

/// Failed `must` condition text, quoting the XPath statement.
pub fn must_condition_false(statement: &str) -> String {
    format!("'must' condition is false: '{}'", statement)
}

/// Failed `when` condition text, quoting the XPath statement.
pub fn when_condition_false(statement: &str) -> String {
    format!("'when' condition is false: '{}'", statement)
}

/// Bracket-wrapped, space-joined rendering of a child-path or key list.
pub fn bracketed_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

/// The full template table, keyed by template name in declaration order.
///
/// Parameterized templates appear with `{}` placeholders. The table exists
/// so that tests can pin the closed set of canonical strings in one
/// assertion; production code reads the constants and helpers directly.
pub fn catalog() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        ("config_path", CONFIG_PATH),
        ("is_not_valid", IS_NOT_VALID),
        ("is_ambiguous", IS_AMBIGUOUS),
        ("access_denied", ACCESS_DENIED),
        ("interface_must_exist", INTERFACE_MUST_EXIST),
        ("unexpected_element", UNEXPECTED_ELEMENT),
        ("path_is_invalid", PATH_IS_INVALID),
        ("missing_list_key", MISSING_LIST_KEY),
        ("missing_mandatory", MISSING_MANDATORY),
        ("node_exists", NODE_EXISTS),
        ("node_doesnt_exist", NODE_DOESNT_EXIST),
        ("node_requires_child", NODE_REQUIRES_CHILD),
        ("node_requires_value", NODE_REQUIRES_VALUE),
        ("leafref_error", LEAFREF_ERROR),
        ("non_unique_paths", NON_UNIQUE_PATHS),
        ("non_unique_keys", NON_UNIQUE_KEYS),
        ("possible_completions", POSSIBLE_COMPLETIONS),
        ("doesnt_match_schema", DOESNT_MATCH_SCHEMA),
        ("tbd", TBD),
        ("not_yet_tested", NOT_YET_TESTED),
        ("wrong_range", "Must have value between {} and {}"),
        ("wrong_length", "Must have length between {} and {}"),
        (
            "wrong_num_elements",
            "Invalid number of nodes: must be in range {} to {}",
        ),
        ("must_match_pattern", "Must match {}"),
        ("doesnt_match_pattern", "Does not match pattern {}"),
        ("wrong_type", "{} is not {}"),
        ("must_condition_false", "'must' condition is false: '{}'"),
        ("when_condition_false", "'when' condition is false: '{}'"),
    ])
}
