//! Build a date-filtered smart query and print it.
//!
//! Run with: `cargo run --example date_filters --features tracing`

use smartquery::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ValidationError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("smartquery=debug")),
        )
        .init();

    let mut open = QueryBuilder::new();
    open.where_is("closed_at", "NULL")?
        .or_where(
            Operand::date_time_field("ticket", "closed_at")?,
            ">",
            Operand::date_time_literal("2024-06-01T00:00:00.000")?,
        )?;

    let mut q = QueryBuilder::new();
    q.select(["id", "title", "status"])
        .from("ticket")?
        .where_(
            Operand::date_field("ticket", "opened_at")?,
            ">=",
            Operand::date_literal("2024-01-01")?,
        )?
        .where_in("status", "('open','pending')")?
        .where_group(open)
        .order_by_desc("opened_at")?
        .limit(50)?;

    println!("{}", q.render());

    // Rejected fragments leave the builder untouched.
    if let Err(err) = q.where_("title", "LIKE", "'%crash%'") {
        println!("rejected ({}): {err}", err.code().as_str());
    }

    Ok(())
}
