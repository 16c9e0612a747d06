//! Column and criteria values of a WHERE condition.
//!
//! An [`Operand`] is either a plain fragment, rendered as a `{table:column}`
//! placeholder on the column side and verbatim on the criteria side, or a
//! `date(...)` / `datetime(...)` wrapper that is always rendered as-is.
//!
//! ```
//! use smartquery::{Operand, QueryBuilder};
//!
//! let mut q = QueryBuilder::new();
//! q.select(["id"]).from("event")?.where_(
//!     Operand::date_field("event", "created")?,
//!     ">=",
//!     Operand::date_literal("2020-01-01")?,
//! )?;
//! assert_eq!(
//!     q.render(),
//!     "SELECT {event:id} FROM {event} WHERE date({event:created}) >= date(substr('2020-01-01',1,10))"
//! );
//! # Ok::<(), smartquery::ValidationError>(())
//! ```

use crate::error::{QueryResult, ValidationError};
use crate::validate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Column name or literal value as written by the caller.
    Plain(String),
    /// Wrapped `date(...)` expression.
    Date(String),
    /// Wrapped `datetime(...)` expression.
    ///
    /// The datetime pattern is not anchored at the end, so text appended after
    /// the closing `))` of a hand-built value is accepted and rendered as-is.
    /// Build values with [`Operand::date_time_field`] or
    /// [`Operand::date_time_literal`] instead of this variant directly.
    DateTime(String),
}

impl Operand {
    /// `date({table:field})`
    pub fn date_field(table: &str, field: &str) -> QueryResult<Self> {
        check_field(table, field)?;
        Ok(Operand::Date(format!("date({{{table}:{field}}})")))
    }

    /// `date(substr('literal',1,10))`, for literals in `YYYY-MM-DD...` form.
    pub fn date_literal(literal: &str) -> QueryResult<Self> {
        check_literal(literal)?;
        Ok(Operand::Date(format!("date(substr('{literal}',1,10))")))
    }

    /// `datetime(substr({table:field},0,24))`
    pub fn date_time_field(table: &str, field: &str) -> QueryResult<Self> {
        check_field(table, field)?;
        Ok(Operand::DateTime(format!(
            "datetime(substr({{{table}:{field}}},0,24))"
        )))
    }

    /// `datetime(substr('literal',0,24))`, for literals like `2020-01-01T10:00:00.000`.
    pub fn date_time_literal(literal: &str) -> QueryResult<Self> {
        check_literal(literal)?;
        Ok(Operand::DateTime(format!("datetime(substr('{literal}',0,24))")))
    }

    /// The raw text: the plain fragment or the wrapped function expression.
    pub fn as_str(&self) -> &str {
        match self {
            Operand::Plain(s) | Operand::Date(s) | Operand::DateTime(s) => s,
        }
    }

    pub fn is_function(&self) -> bool {
        !matches!(self, Operand::Plain(_))
    }

    /// Whether this operand may appear in a WHERE condition.
    ///
    /// Plain operands must match the expression pattern; function operands must
    /// match one of the function patterns. A date over a dotted field, for
    /// example, is built fine but refused here.
    pub fn is_valid(&self) -> bool {
        match self {
            Operand::Plain(s) => validate::is_expression(s),
            Operand::Date(s) | Operand::DateTime(s) => validate::is_function(s),
        }
    }

    pub(crate) fn validated(self) -> QueryResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ValidationError::expression(self.as_str()))
        }
    }
}

fn check_field(table: &str, field: &str) -> QueryResult<()> {
    if !validate::is_identifier(table) {
        return Err(ValidationError::identifier(table));
    }
    if !validate::is_expression(field) {
        return Err(ValidationError::expression(field));
    }
    Ok(())
}

fn check_literal(literal: &str) -> QueryResult<()> {
    if validate::is_expression(literal) || validate::is_datetime_literal(literal) {
        Ok(())
    } else {
        Err(ValidationError::expression(literal))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Plain(s.to_string())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Plain(s)
    }
}

impl From<&String> for Operand {
    fn from(s: &String) -> Self {
        Operand::Plain(s.clone())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Plain(v.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
