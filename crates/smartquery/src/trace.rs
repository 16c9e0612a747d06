//! `tracing` events, compiled out unless the `tracing` feature is on.

use crate::error::ReasonCode;

#[cfg(feature = "tracing")]
const MAX_SQL_LENGTH: usize = 200;

pub(crate) fn rejected(code: ReasonCode, fragment: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "smartquery.validate",
        code = code.as_str(),
        fragment,
        "fragment rejected"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (code, fragment);
}

pub(crate) fn column_dropped(column: &str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "smartquery.validate", column, "select column dropped");
    #[cfg(not(feature = "tracing"))]
    let _ = column;
}

pub(crate) fn rendered(table: &str, conditions: usize, sql: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "smartquery.render",
        table,
        conditions,
        sql = truncate_sql(sql, MAX_SQL_LENGTH),
        "query rendered"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (table, conditions, sql);
}

/// Cut `sql` to at most `max` bytes without splitting a char.
#[cfg(feature = "tracing")]
fn truncate_sql(sql: &str, max: usize) -> &str {
    if sql.len() <= max {
        return sql;
    }
    let mut end = max;
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
