//! Operators, directions and joiners used by WHERE and ORDER BY clauses.
//!
//! Textual input is validated and normalized through [`IntoOperator`] and
//! [`IntoDirection`]; the typed enums pass through unchanged.
//!
//! # Example
//! ```
//! use smartquery::{Operator, QueryBuilder};
//!
//! let mut q = QueryBuilder::new();
//! q.from("person")?
//!     .where_("age", ">=", 18)?
//!     .where_("status", Operator::Ne, "'gone'")?;
//! assert_eq!(q.render(), "({person:age} >= 18 AND {person:status} != 'gone')");
//! # Ok::<(), smartquery::ValidationError>(())
//! ```

use crate::error::{QueryResult, ReasonCode, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operators accepted by WHERE conditions.
pub const WHITELISTED_OPERATORS: [&str; 11] =
    ["<", "<=", ">", ">=", "=", "==", "!=", "<>", "IN", "NOT IN", "IS"];

/// Directions accepted by ORDER BY.
pub const WHITELISTED_DIRECTIONS: [&str; 2] = ["ASC", "DESC"];

/// Comparison operator of a WHERE condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "=")]
    Eq,
    /// `==`, kept distinct from `=` so the caller's spelling survives rendering.
    #[serde(rename = "==")]
    EqEq,
    #[serde(rename = "!=")]
    Ne,
    /// `<>`
    #[serde(rename = "<>")]
    LtGt,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
    #[serde(rename = "IS")]
    Is,
}

impl Operator {
    /// Every operator, in whitelist order.
    pub const ALL: [Operator; 11] = [
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::Eq,
        Operator::EqEq,
        Operator::Ne,
        Operator::LtGt,
        Operator::In,
        Operator::NotIn,
        Operator::Is,
    ];

    /// SQL spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Eq => "=",
            Operator::EqEq => "==",
            Operator::Ne => "!=",
            Operator::LtGt => "<>",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Is => "IS",
        }
    }

    /// Parse an operator, ignoring ASCII case.
    pub fn parse(s: &str) -> QueryResult<Self> {
        let upper = s.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == upper)
            .ok_or_else(|| ValidationError::new(ReasonCode::OperatorNotWhitelisted, s))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    /// Parse a direction, ignoring ASCII case.
    pub fn parse(s: &str) -> QueryResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            _ => Err(ValidationError::new(ReasonCode::DirectionNotWhitelisted, s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a WHERE entry attaches to the entry before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Joiner {
    And,
    Or,
}

impl Joiner {
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert an input into an [`Operator`].
///
/// This is mainly for ergonomics in builder APIs.
pub trait IntoOperator {
    fn into_operator(self) -> QueryResult<Operator>;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> QueryResult<Operator> {
        Ok(self)
    }
}

impl IntoOperator for &str {
    fn into_operator(self) -> QueryResult<Operator> {
        Operator::parse(self)
    }
}

impl IntoOperator for String {
    fn into_operator(self) -> QueryResult<Operator> {
        Operator::parse(&self)
    }
}

/// Convert an input into a [`Direction`].
pub trait IntoDirection {
    fn into_direction(self) -> QueryResult<Direction>;
}

impl IntoDirection for Direction {
    fn into_direction(self) -> QueryResult<Direction> {
        Ok(self)
    }
}

impl IntoDirection for &str {
    fn into_direction(self) -> QueryResult<Direction> {
        Direction::parse(self)
    }
}

impl IntoDirection for String {
    fn into_direction(self) -> QueryResult<Direction> {
        Direction::parse(&self)
    }
}
