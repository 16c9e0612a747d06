//! The fluent [`QueryBuilder`].
//!
//! Every mutator validates its input before touching state. A mutator that
//! fails returns a [`ValidationError`] and leaves the builder as it was.
//!
//! # Example
//! ```
//! use smartquery::QueryBuilder;
//!
//! let mut names = QueryBuilder::new();
//! names.where_("first", "=", "'f'")?.or_where("last", "=", "'l'")?;
//!
//! let mut q = QueryBuilder::new();
//! q.select(["id"])
//!     .from("table")?
//!     .where_("id", "=", 1)?
//!     .where_group(names);
//!
//! assert_eq!(
//!     q.render(),
//!     "SELECT {table:id} FROM {table} WHERE {table:id} = 1 AND ({table:first} = 'f' OR {table:last} = 'l')"
//! );
//! # Ok::<(), smartquery::ValidationError>(())
//! ```

mod render;

use crate::condition::{Direction, IntoDirection, IntoOperator, Joiner, Operator};
use crate::error::{QueryResult, ReasonCode, ValidationError};
use crate::operand::Operand;
use crate::validate;
use std::fmt;

pub use render::{compose_column, compose_columns, compose_condition, compose_table};

/// A single comparison: `column OPERATOR criteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: Operand,
    pub operator: Operator,
    pub criteria: Operand,
}

/// What a WHERE entry holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhereClause {
    Condition(Condition),
    /// A sub-builder whose own conditions render as a grouped expression.
    Nested(QueryBuilder),
}

/// One entry of the WHERE list. `joiner` is ignored for the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereEntry {
    pub joiner: Joiner,
    pub clause: WhereClause,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderEntry {
    pub column: String,
    pub direction: Direction,
}

/// Accumulates clause state and renders it into a smart query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    /// Table name (empty until `from` succeeds)
    table: String,
    /// Selected columns, already filtered
    columns: Vec<String>,
    /// WHERE entries in call order
    where_entries: Vec<WhereEntry>,
    /// ORDER BY entries in call order
    order_by: Vec<OrderEntry>,
    /// GROUP BY columns, duplicates kept
    group_by: Vec<String>,
    /// LIMIT, digits only
    limit: Option<String>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn where_entries(&self) -> &[WhereEntry] {
        &self.where_entries
    }

    pub fn order_entries(&self) -> &[OrderEntry] {
        &self.order_by
    }

    pub fn group_by_columns(&self) -> &[String] {
        &self.group_by
    }

    /// The LIMIT count as validated digits, if set.
    pub fn limit_count(&self) -> Option<&str> {
        self.limit.as_deref()
    }

    // ==================== SELECT / FROM ====================

    /// Set the selected columns.
    ///
    /// Entries that are not plain identifiers are dropped silently; the
    /// remaining ones keep their order. Replaces any earlier selection.
    pub fn select<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns
            .into_iter()
            .map(Into::<String>::into)
            .filter(|column| {
                let keep = validate::is_identifier(column);
                if !keep {
                    crate::trace::column_dropped(column);
                }
                keep
            })
            .collect();
        self
    }

    /// Set the table. The last successful call wins.
    pub fn from(&mut self, table: &str) -> QueryResult<&mut Self> {
        if !validate::is_identifier(table) {
            return Err(ValidationError::identifier(table));
        }
        self.table = table.to_string();
        Ok(self)
    }

    // ==================== WHERE ====================

    /// Add a condition joined with AND.
    ///
    /// `column` and `criteria` must be valid operands, `operator` must be
    /// whitelisted (any case).
    pub fn where_(
        &mut self,
        column: impl Into<Operand>,
        operator: impl IntoOperator,
        criteria: impl Into<Operand>,
    ) -> QueryResult<&mut Self> {
        self.push_condition(Joiner::And, column.into(), operator, criteria.into())
    }

    /// Add a condition joined with OR.
    pub fn or_where(
        &mut self,
        column: impl Into<Operand>,
        operator: impl IntoOperator,
        criteria: impl Into<Operand>,
    ) -> QueryResult<&mut Self> {
        self.push_condition(Joiner::Or, column.into(), operator, criteria.into())
    }

    /// Add a grouped sub-builder joined with AND.
    ///
    /// The sub-builder takes this builder's table when rendered.
    pub fn where_group(&mut self, group: QueryBuilder) -> &mut Self {
        self.push_entry(Joiner::And, WhereClause::Nested(group))
    }

    /// Add a grouped sub-builder joined with OR.
    pub fn or_where_group(&mut self, group: QueryBuilder) -> &mut Self {
        self.push_entry(Joiner::Or, WhereClause::Nested(group))
    }

    /// `left IN right`, joined with AND.
    ///
    /// Only `left` is validated; `right` is taken as a pre-formatted set such
    /// as `(1,2,3)`.
    pub fn where_in(
        &mut self,
        left: impl Into<Operand>,
        right: impl Into<Operand>,
    ) -> QueryResult<&mut Self> {
        self.push_in(Joiner::And, left.into(), right.into())
    }

    /// `left IN right`, joined with OR.
    pub fn or_where_in(
        &mut self,
        left: impl Into<Operand>,
        right: impl Into<Operand>,
    ) -> QueryResult<&mut Self> {
        self.push_in(Joiner::Or, left.into(), right.into())
    }

    /// `left IS right`, joined with AND.
    pub fn where_is(
        &mut self,
        left: impl Into<Operand>,
        right: impl Into<Operand>,
    ) -> QueryResult<&mut Self> {
        self.push_condition(Joiner::And, left.into(), Operator::Is, right.into())
    }

    /// `left IS right`, joined with OR.
    pub fn or_where_is(
        &mut self,
        left: impl Into<Operand>,
        right: impl Into<Operand>,
    ) -> QueryResult<&mut Self> {
        self.push_condition(Joiner::Or, left.into(), Operator::Is, right.into())
    }

    fn push_condition(
        &mut self,
        joiner: Joiner,
        column: Operand,
        operator: impl IntoOperator,
        criteria: Operand,
    ) -> QueryResult<&mut Self> {
        let column = column.validated()?;
        let operator = operator.into_operator()?;
        let criteria = criteria.validated()?;
        Ok(self.push_entry(
            joiner,
            WhereClause::Condition(Condition {
                column,
                operator,
                criteria,
            }),
        ))
    }

    fn push_in(&mut self, joiner: Joiner, left: Operand, right: Operand) -> QueryResult<&mut Self> {
        let column = left.validated()?;
        Ok(self.push_entry(
            joiner,
            WhereClause::Condition(Condition {
                column,
                operator: Operator::In,
                criteria: right,
            }),
        ))
    }

    fn push_entry(&mut self, joiner: Joiner, clause: WhereClause) -> &mut Self {
        self.where_entries.push(WhereEntry { joiner, clause });
        self
    }

    // ==================== ORDER BY / GROUP BY / LIMIT ====================

    /// Add an ascending ORDER BY column.
    pub fn order_by(&mut self, column: &str) -> QueryResult<&mut Self> {
        self.order_by_dir(column, Direction::Asc)
    }

    /// Add a descending ORDER BY column.
    pub fn order_by_desc(&mut self, column: &str) -> QueryResult<&mut Self> {
        self.order_by_dir(column, Direction::Desc)
    }

    /// Add an ORDER BY column with an explicit direction (`"asc"`, `"DESC"`, ...).
    pub fn order_by_dir(
        &mut self,
        column: &str,
        direction: impl IntoDirection,
    ) -> QueryResult<&mut Self> {
        if !validate::is_expression(column) {
            return Err(ValidationError::expression(column));
        }
        let direction = direction.into_direction()?;
        self.order_by.push(OrderEntry {
            column: column.to_string(),
            direction,
        });
        Ok(self)
    }

    /// Add a GROUP BY column. Repeated columns are kept.
    pub fn group_by(&mut self, column: &str) -> QueryResult<&mut Self> {
        if !validate::is_expression(column) {
            return Err(ValidationError::expression(column));
        }
        self.group_by.push(column.to_string());
        Ok(self)
    }

    /// Set the LIMIT. `count` must print as digits only, so `-1` is refused.
    pub fn limit(&mut self, count: impl fmt::Display) -> QueryResult<&mut Self> {
        let count = count.to_string();
        if !validate::is_digits(&count) {
            return Err(ValidationError::new(ReasonCode::DigitsExpected, count));
        }
        self.limit = Some(count);
        Ok(self)
    }
}
