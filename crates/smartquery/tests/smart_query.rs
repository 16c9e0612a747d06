//! End-to-end behavior of the smart query builder.

use smartquery::prelude::*;

#[test]
fn select_one_field() {
    let mut q = QueryBuilder::new();
    q.select(["id"]).from("table").unwrap();
    assert_eq!(q.render(), "SELECT {table:id} FROM {table}");
}

#[test]
fn select_keeps_input_order() {
    let mut q = QueryBuilder::new();
    q.select(["name", "id", "age"]).from("table").unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:name},{table:id},{table:age} FROM {table}"
    );
}

#[test]
fn from_rejects_special_characters() {
    let mut q = QueryBuilder::new();
    q.select(["id", "name"]);
    let err = q.from("table$").unwrap_err();
    assert_eq!(err.code(), ReasonCode::Identifier);
}

#[test]
fn from_rejects_injection() {
    let mut q = QueryBuilder::new();
    q.select(["id", "name"]);
    let err = q.from("table' WHERE {table:id} = 1").unwrap_err();
    assert_eq!(err.code(), ReasonCode::Identifier);
    assert_eq!(q.table(), "");
}

#[test]
fn select_filters_injection() {
    let mut q = QueryBuilder::new();
    q.select(["id", "name FROM {table}"]).from("table").unwrap();
    assert_eq!(q.render(), "SELECT {table:id} FROM {table}");
}

#[test]
fn where_rejects_injection() {
    let mut q = QueryBuilder::new();
    q.select(["id", "name"]).from("table").unwrap();
    let err = q.where_("name", "=", "test1 AND {table:id}=1").unwrap_err();
    assert_eq!(err.code(), ReasonCode::Expression);
    assert!(q.where_entries().is_empty());
}

#[test]
fn one_where_condition() {
    let mut q = QueryBuilder::new();
    q.select(["id"])
        .from("table")
        .unwrap()
        .where_("id", "=", 1)
        .unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id} FROM {table} WHERE {table:id} = 1"
    );
}

#[test]
fn two_where_conditions_join_with_and() {
    let mut q = QueryBuilder::new();
    q.select(["id", "name"]).from("table").unwrap();
    q.where_("name", "=", "test1").unwrap();
    q.where_("name", "=", "test2").unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id},{table:name} FROM {table} WHERE {table:name} = test1 AND {table:name} = test2"
    );
}

#[test]
fn or_where_only_changes_its_own_joiner() {
    let mut q = QueryBuilder::new();
    q.select(["id"]).from("table").unwrap();
    q.where_("a", "=", 1).unwrap();
    q.where_("b", "=", 2).unwrap();
    q.or_where("c", "=", 3).unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id} FROM {table} WHERE {table:a} = 1 AND {table:b} = 2 OR {table:c} = 3"
    );
}

#[test]
fn one_grouped_condition() {
    let mut names = QueryBuilder::new();
    names
        .where_("firstName", "=", "'fakeFirstName'")
        .unwrap()
        .or_where("lastName", "=", "'fakeLastName'")
        .unwrap();

    let mut q = QueryBuilder::new();
    q.select(["id"])
        .from("table")
        .unwrap()
        .where_("id", "=", 1)
        .unwrap()
        .where_group(names);

    assert_eq!(
        q.render(),
        "SELECT {table:id} FROM {table} WHERE {table:id} = 1 AND ({table:firstName} = 'fakeFirstName' OR {table:lastName} = 'fakeLastName')"
    );
}

#[test]
fn grouped_condition_ignores_its_own_table() {
    let mut names = QueryBuilder::new();
    names.from("elsewhere").unwrap();
    names.where_("first", "=", "'f'").unwrap().or_where("last", "=", "'l'").unwrap();

    let mut q = QueryBuilder::new();
    q.select(["id"]).from("table").unwrap();
    q.where_("id", "=", 1).unwrap().where_group(names);

    assert_eq!(
        q.render(),
        "SELECT {table:id} FROM {table} WHERE {table:id} = 1 AND ({table:first} = 'f' OR {table:last} = 'l')"
    );
}

#[test]
fn order_by_one_column() {
    let mut q = QueryBuilder::new();
    q.select(["id"]).from("table").unwrap();
    q.order_by_dir("id", Direction::Asc).unwrap();
    assert_eq!(q.render(), "SELECT {table:id} FROM {table} ORDER BY {table:id} ASC");
}

#[test]
fn order_by_many_columns() {
    let mut q = QueryBuilder::new();
    q.select(["id", "id2", "id3"]).from("table").unwrap();
    q.order_by_dir("id", Direction::Asc).unwrap();
    q.order_by_dir("id2", Direction::Desc).unwrap();
    q.order_by_dir("id3", Direction::Asc).unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id},{table:id2},{table:id3} FROM {table} ORDER BY {table:id} ASC,{table:id2} DESC,{table:id3} ASC"
    );
}

#[test]
fn where_then_order_by() {
    let mut q = QueryBuilder::new();
    q.select(["id", "id2", "id3"]).from("table").unwrap();
    q.where_("id2", "=", "2").unwrap();
    q.order_by("id").unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id},{table:id2},{table:id3} FROM {table} WHERE {table:id2} = 2 ORDER BY {table:id} ASC"
    );
}

#[test]
fn group_by_columns() {
    let mut q = QueryBuilder::new();
    q.select(["id", "id2", "id3"]).from("table").unwrap();
    q.group_by("id").unwrap();
    q.group_by("id2").unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id},{table:id2},{table:id3} FROM {table} GROUP BY {table:id},{table:id2}"
    );
}

#[test]
fn where_then_group_by() {
    let mut q = QueryBuilder::new();
    q.select(["id", "id2", "id3"]).from("table").unwrap();
    q.where_("id2", "=", "2").unwrap();
    q.group_by("id2").unwrap();
    assert_eq!(
        q.render(),
        "SELECT {table:id},{table:id2},{table:id3} FROM {table} WHERE {table:id2} = 2 GROUP BY {table:id2}"
    );
}

#[test]
fn limit_appends_and_rejects() {
    let mut q = QueryBuilder::new();
    q.select(["id"]).from("table").unwrap();
    assert_eq!(q.limit(-1).unwrap_err().code(), ReasonCode::DigitsExpected);
    assert_eq!(q.limit("abc").unwrap_err().code(), ReasonCode::DigitsExpected);
    assert_eq!(q.limit_count(), None);

    q.limit(5).unwrap();
    assert_eq!(q.render(), "SELECT {table:id} FROM {table} LIMIT 5");
}

#[test]
fn date_range_filter() {
    let mut q = QueryBuilder::new();
    q.select(["id"]).from("event").unwrap();
    q.where_(
        Operand::date_field("event", "created").unwrap(),
        ">=",
        Operand::date_literal("2021-03-01").unwrap(),
    )
    .unwrap();
    q.where_(
        Operand::date_field("event", "created").unwrap(),
        "<=",
        Operand::date_literal("2021-03-31").unwrap(),
    )
    .unwrap();
    assert_eq!(
        q.render(),
        "SELECT {event:id} FROM {event} WHERE date({event:created}) >= date(substr('2021-03-01',1,10)) \
         AND date({event:created}) <= date(substr('2021-03-31',1,10))"
    );
}

#[test]
fn render_twice_is_identical() {
    let mut group = QueryBuilder::new();
    group.where_("a", "=", 1).unwrap().or_where("b", "=", 2).unwrap();

    let mut q = QueryBuilder::new();
    q.select(["id"]).from("table").unwrap();
    q.where_group(group).group_by("id").unwrap();
    assert_eq!(q.render(), q.render());
}

#[test]
fn errors_carry_fixed_messages() {
    let mut q = QueryBuilder::new();
    let err = q.where_("id", "~", 1).unwrap_err();
    assert_eq!(err.code(), ReasonCode::OperatorNotWhitelisted);
    assert_eq!(
        err.to_string(),
        "Operator not recognized or not whitelisted: \"~\""
    );
}
