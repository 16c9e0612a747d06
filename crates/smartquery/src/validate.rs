//! Whitelist checks applied to every fragment before it reaches builder state.
//!
//! All patterns are ASCII only: `\w` is `[0-9A-Za-z_]` and `\d` is `[0-9]`.

use crate::condition::{WHITELISTED_DIRECTIONS, WHITELISTED_OPERATORS};
use regex::Regex;
use std::sync::OnceLock;

/// The literal whitelist patterns.
pub mod patterns {
    /// Table names and selected columns, optionally single-quoted.
    pub const IDENTIFIER: &str = r"(?-u)^'?\w+'?$";

    /// Column references and criteria: a comma-joinable, optionally parenthesized
    /// run of word, dash and dot tokens, each optionally single-quoted.
    pub const EXPRESSION: &str = r"(?-u)^\(?('?(\w|-|\.)+'?,?)+\)?$";

    /// LIMIT counts.
    pub const DIGITS: &str = r"(?-u)^\d+$";

    /// Date and datetime literals, e.g. `2020-01-01T10:00:00.000`.
    pub const DATETIME_LITERAL: &str = r"(?-u)^(\w|-|:|\.)+$";

    /// `date({table:field})` or `date(substr('2020-01-01',1,10))`.
    pub const FUNCTION_DATE: &str = r"(?-u)^\w+\((\{\w+:\w+\}|[a-zA-Z]+\((\d|'|,|-)+\))\)$";

    /// `date(substr(...))` / `datetime(substr(...))` over a placeholder or a quoted literal.
    pub const FUNCTION_DATETIME: &str =
        r"(?-u)^date(\w+)?\(substr\((\{(\w|-)+:(\w|-|\.)+\}|'(\w|-|:|\.)+')(\d|'|,|-)+\)\)";
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid built-in whitelist regex"))
}

/// One or more word characters, optionally single-quoted on either side.
pub fn is_identifier(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, patterns::IDENTIFIER).is_match(s)
}

/// A plain column/criteria expression such as `name`, `'f'`, `t.col` or `(1,2,3)`.
pub fn is_expression(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, patterns::EXPRESSION).is_match(s)
}

/// A wrapped `date(...)`/`datetime(...)` expression.
pub fn is_function(s: &str) -> bool {
    static DATE: OnceLock<Regex> = OnceLock::new();
    static DATETIME: OnceLock<Regex> = OnceLock::new();
    compiled(&DATE, patterns::FUNCTION_DATE).is_match(s)
        || compiled(&DATETIME, patterns::FUNCTION_DATETIME).is_match(s)
}

pub fn is_datetime_literal(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, patterns::DATETIME_LITERAL).is_match(s)
}

pub fn is_digits(s: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, patterns::DIGITS).is_match(s)
}

/// Case-insensitive membership in the operator whitelist.
pub fn is_operator(s: &str) -> bool {
    let upper = s.to_ascii_uppercase();
    WHITELISTED_OPERATORS.contains(&upper.as_str())
}

/// Case-insensitive `ASC` / `DESC`.
pub fn is_direction(s: &str) -> bool {
    let upper = s.to_ascii_uppercase();
    WHITELISTED_DIRECTIONS.contains(&upper.as_str())
}
