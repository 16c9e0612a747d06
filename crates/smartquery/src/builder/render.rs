//! Turns accumulated builder state into the smart query string.
//!
//! Clause order is fixed: SELECT, FROM, WHERE, ORDER BY, GROUP BY, LIMIT.
//! Columns are emitted as `{table:column}` placeholders and the table as
//! `{table}`; a downstream templating layer resolves them.

use super::{Condition, QueryBuilder, WhereClause};
use crate::operand::Operand;

/// `{table:column}`
pub fn compose_column(table: &str, column: &str) -> String {
    format!("{{{table}:{column}}}")
}

/// Comma-joined `{table:column}` list.
pub fn compose_columns(table: &str, columns: &[String]) -> String {
    columns
        .iter()
        .map(|column| compose_column(table, column))
        .collect::<Vec<_>>()
        .join(",")
}

/// `{table}`
pub fn compose_table(table: &str) -> String {
    format!("{{{table}}}")
}

/// One condition, without its joiner.
///
/// A plain column becomes a placeholder; a date/datetime column is emitted
/// unqualified. Criteria are emitted as written.
pub fn compose_condition(table: &str, condition: &Condition) -> String {
    let column = match &condition.column {
        Operand::Plain(column) => compose_column(table, column),
        function => function.as_str().to_string(),
    };
    format!(
        "{} {} {}",
        column,
        condition.operator,
        condition.criteria.as_str()
    )
}

impl QueryBuilder {
    /// Render the query.
    ///
    /// With no selected columns only the conditions are produced, wrapped in
    /// parentheses, so the builder can serve as a grouped sub-expression.
    ///
    /// Nested builders are attached to this builder's table first (see
    /// [`attach_to_parent`](Self::attach_to_parent)); that overwrite persists
    /// after rendering.
    pub fn render(&mut self) -> String {
        let sql = if self.columns.is_empty() {
            format!("({})", self.compose_conditions().unwrap_or_default())
        } else {
            let mut sql = format!(
                "SELECT {} FROM {}",
                compose_columns(&self.table, &self.columns),
                compose_table(&self.table)
            );
            if let Some(conditions) = self.compose_conditions() {
                sql.push_str(" WHERE ");
                sql.push_str(&conditions);
            }
            self.write_order_by(&mut sql);
            self.write_group_by(&mut sql);
            if let Some(limit) = &self.limit {
                sql.push_str(" LIMIT ");
                sql.push_str(limit);
            }
            sql
        };
        crate::trace::rendered(&self.table, self.where_entries.len(), &sql);
        sql
    }

    /// Force this builder's table to `table`, as done for every nested
    /// builder when its parent renders. No validation is applied: the parent
    /// table was validated by `from` (or is still empty).
    pub fn attach_to_parent(&mut self, table: &str) -> &mut Self {
        table.clone_into(&mut self.table);
        self
    }

    /// Space-joined condition list, `None` when there are no WHERE entries.
    fn compose_conditions(&mut self) -> Option<String> {
        if self.where_entries.is_empty() {
            return None;
        }
        let table = &self.table;
        let mut parts = Vec::with_capacity(self.where_entries.len());
        for (i, entry) in self.where_entries.iter_mut().enumerate() {
            let rendered = match &mut entry.clause {
                WhereClause::Condition(condition) => compose_condition(table, condition),
                WhereClause::Nested(nested) => nested.attach_to_parent(table).render(),
            };
            if i == 0 {
                parts.push(rendered);
            } else {
                parts.push(format!("{} {}", entry.joiner, rendered));
            }
        }
        Some(parts.join(" "))
    }

    fn write_order_by(&self, sql: &mut String) {
        if self.order_by.is_empty() {
            return;
        }
        let entries: Vec<String> = self
            .order_by
            .iter()
            .map(|entry| {
                format!(
                    "{} {}",
                    compose_column(&self.table, &entry.column),
                    entry.direction
                )
            })
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&entries.join(","));
    }

    fn write_group_by(&self, sql: &mut String) {
        if self.group_by.is_empty() {
            return;
        }
        sql.push_str(" GROUP BY ");
        sql.push_str(&compose_columns(&self.table, &self.group_by));
    }
}
