//! # smartquery
//!
//! A fluent builder for smart store queries.
//!
//! The builder never talks to a database. It produces a single string in a
//! placeholder dialect, `{table:column}` for qualified columns and `{table}` for
//! table references, which a templating layer resolves into real SQL.
//!
//! ## Features
//!
//! - **Whitelisted fragments**: tables, columns, criteria, operators, directions
//!   and limits are checked against fixed patterns before they are stored
//! - **Fail fast, no partial writes**: a rejected call returns a
//!   [`ValidationError`] and leaves the builder unchanged
//! - **Grouped conditions**: any builder can be nested as a parenthesized group
//! - **Date helpers**: `date(...)` / `datetime(...)` operands for the WHERE clause
//!
//! ## Example
//!
//! ```
//! use smartquery::QueryBuilder;
//!
//! let mut q = QueryBuilder::new();
//! q.select(["id", "name"])
//!     .from("person")?
//!     .where_("age", ">=", 18)?
//!     .order_by_desc("name")?
//!     .limit(10)?;
//!
//! assert_eq!(
//!     q.render(),
//!     "SELECT {person:id},{person:name} FROM {person} WHERE {person:age} >= 18 ORDER BY {person:name} DESC LIMIT 10"
//! );
//! # Ok::<(), smartquery::ValidationError>(())
//! ```
//!
//! Enable the `tracing` feature to get debug events for rejected fragments and
//! rendered queries (targets `smartquery.validate` and `smartquery.render`).

pub mod builder;
pub mod condition;
pub mod error;
pub mod operand;
pub mod prelude;
pub mod validate;

mod trace;

pub use builder::{Condition, OrderEntry, QueryBuilder, WhereClause, WhereEntry};
pub use condition::{
    Direction, IntoDirection, IntoOperator, Joiner, Operator, WHITELISTED_DIRECTIONS,
    WHITELISTED_OPERATORS,
};
pub use error::{QueryResult, ReasonCode, ValidationError};
pub use operand::Operand;
