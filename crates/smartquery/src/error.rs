//! Error types for smartquery

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for builder operations
pub type QueryResult<T> = Result<T, ValidationError>;

/// Why a fragment was rejected.
///
/// The set is fixed so callers can `match` on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Table (or date table) name failed the identifier pattern.
    Identifier,
    /// Column, criteria, order or group fragment failed the expression pattern.
    Expression,
    /// Operator is not in [`WHITELISTED_OPERATORS`](crate::WHITELISTED_OPERATORS).
    OperatorNotWhitelisted,
    /// Order direction is neither `ASC` nor `DESC`.
    DirectionNotWhitelisted,
    /// LIMIT value is not made of digits only.
    DigitsExpected,
    /// A grouped WHERE received something that is not a builder.
    ///
    /// `where_group` only accepts a [`QueryBuilder`](crate::QueryBuilder), so this
    /// code cannot be produced through the typed API. It stays in the table for
    /// callers that map codes coming from other producers.
    ExpectsBuilder,
}

impl ReasonCode {
    /// Every reason code, in table order.
    pub const ALL: [ReasonCode; 6] = [
        ReasonCode::Identifier,
        ReasonCode::Expression,
        ReasonCode::OperatorNotWhitelisted,
        ReasonCode::DirectionNotWhitelisted,
        ReasonCode::DigitsExpected,
        ReasonCode::ExpectsBuilder,
    ];

    /// The upper-case reason code, e.g. `OPERATOR_NOT_WHITELISTED`.
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::Identifier => "IDENTIFIER",
            ReasonCode::Expression => "EXPRESSION",
            ReasonCode::OperatorNotWhitelisted => "OPERATOR_NOT_WHITELISTED",
            ReasonCode::DirectionNotWhitelisted => "DIRECTION_NOT_WHITELISTED",
            ReasonCode::DigitsExpected => "DIGITS_EXPECTED",
            ReasonCode::ExpectsBuilder => "EXPECTS_BUILDER",
        }
    }

    /// Fixed human readable message for this code.
    pub fn message(self) -> &'static str {
        match self {
            ReasonCode::Identifier => "Only characters, digits and underscores are accepted",
            ReasonCode::Expression => {
                "Only characters, digits, underscores, and dashes are accepted"
            }
            ReasonCode::OperatorNotWhitelisted => "Operator not recognized or not whitelisted",
            ReasonCode::DirectionNotWhitelisted => "Unknown direction",
            ReasonCode::DigitsExpected => "Only digits expected",
            ReasonCode::ExpectsBuilder => "where method expects a query builder as parameter",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A fragment failed its whitelist check.
///
/// The call that produced this error left the builder untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {fragment:?}")]
pub struct ValidationError {
    code: ReasonCode,
    fragment: String,
}

impl ValidationError {
    /// Create an error for `fragment`.
    pub fn new(code: ReasonCode, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        crate::trace::rejected(code, &fragment);
        Self { code, fragment }
    }

    /// Create an identifier error
    pub fn identifier(fragment: impl Into<String>) -> Self {
        Self::new(ReasonCode::Identifier, fragment)
    }

    /// Create an expression error
    pub fn expression(fragment: impl Into<String>) -> Self {
        Self::new(ReasonCode::Expression, fragment)
    }

    /// The reason the fragment was rejected.
    pub fn code(&self) -> ReasonCode {
        self.code
    }

    /// The rejected input, as given by the caller.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}
