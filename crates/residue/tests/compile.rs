use pretty_assertions::assert_eq;
use residue::{to_sql, Compile, MappingConfig, Query};
use residue_core::{
    ast::{Body, Expr, Location, PartialQueries, Term},
    reference,
};
use serde_json::json;

fn call(op: &str, lhs: impl Into<Term>, rhs: impl Into<Term>) -> Expr {
    Expr::call(op, [lhs.into(), rhs.into()])
}

fn single(expr: Expr) -> PartialQueries {
    PartialQueries::new([Body::new(vec![expr])])
}

fn adults() -> PartialQueries {
    single(call("gt", reference!(input.users.age), 18i64))
}

#[test]
fn builder_requires_a_target() {
    let err = Compile::builder().build().unwrap_err();
    assert_eq!(err.to_string(), "at least one target is required");
}

#[test]
fn builder_rejects_unknown_targets() {
    let err = Compile::builder()
        .target("sql", "oracle")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_target());

    let err = Compile::builder()
        .target("graphql", "all")
        .build()
        .unwrap_err();
    assert!(err.is_invalid_target());
}

#[test]
fn builder_rejects_non_object_mappings() {
    let err = Compile::builder()
        .target("sql", "postgresql")
        .mappings(json!(["users"]))
        .build()
        .unwrap_err();
    assert!(err.is_invalid_mappings());
}

#[test]
fn sql_with_mappings() {
    let compile = Compile::builder()
        .target("sql", "postgresql")
        .mappings(json!({"users": {"$self": "app_users", "age": "user_age"}}))
        .build()
        .unwrap();

    let filters = compile.compile(&adults()).unwrap();
    assert_eq!(
        filters.one(),
        Some(&Query::Sql("WHERE app_users.user_age > 18".to_string()))
    );
}

#[test]
fn ucast_document() {
    let compile = Compile::builder()
        .target("ucast", "prisma")
        .build()
        .unwrap();

    let filters = compile.compile(&adults()).unwrap();
    assert_eq!(
        filters.get("ucast", "prisma").and_then(Query::as_ucast),
        Some(&json!({
            "type": "field",
            "operator": "gt",
            "field": "users.age",
            "value": 18,
        }))
    );
}

#[test]
fn no_queries_never_match() {
    let compile = Compile::builder()
        .target("sql", "mysql")
        .target("ucast", "all")
        .build()
        .unwrap();

    let filters = compile.compile(&PartialQueries::default()).unwrap();
    assert_eq!(filters.len(), 2);
    assert!(filters.iter().all(|(_, _, query)| query.is_never()));
}

#[test]
fn empty_body_always_matches() {
    let compile = Compile::builder()
        .target("sql", "mysql")
        .target("ucast", "all")
        .build()
        .unwrap();

    let pq = PartialQueries::new([Body::default()]);
    let filters = compile.compile(&pq).unwrap();
    assert_eq!(filters.get("sql", "mysql"), Some(&Query::Sql(String::new())));
    assert_eq!(filters.get("ucast", "all"), Some(&Query::Ucast(json!({}))));
}

#[test]
fn check_failure_carries_every_diagnostic() {
    let compile = Compile::builder()
        .target("sql", "sqlite")
        .target("ucast", "linq")
        .build()
        .unwrap();

    let pq = single(
        call("startswith", reference!(input.fruits.name), "app")
            .negate()
            .at(Location::new(7, 3)),
    );
    let err = compile.compile(&pq).unwrap_err();
    assert!(err.is_check_failed());

    let messages: Vec<_> = err.diagnostics().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "\"not\" not permitted: unsupported feature \"not\" for UCAST (LINQ)",
            "invalid builtin `startswith`: unsupported for SQL (sqlite); unsupported for UCAST (LINQ)",
        ]
    );
    assert!(err
        .diagnostics()
        .iter()
        .all(|d| d.location == Some(Location::new(7, 3))));
}

#[test]
fn each_target_is_rendered() {
    let compile = Compile::builder()
        .target("SQL", "MySQL")
        .target("ucast", "prisma")
        .build()
        .unwrap();

    let pq = single(call("eq", reference!(input.fruits.colour), Term::var("_")));
    let filters = compile.compile(&pq).unwrap();

    assert_eq!(
        filters.get("sql", "mysql").and_then(Query::as_sql),
        Some("WHERE fruits.colour IS NOT NULL")
    );
    assert_eq!(
        filters.get("UCAST", "Prisma").and_then(Query::as_ucast),
        Some(&json!({
            "type": "field",
            "operator": "ne",
            "field": "fruits.colour",
            "value": null,
        }))
    );

    let keys: Vec<_> = filters.iter().map(|(t, v, _)| (t, v)).collect();
    assert_eq!(keys, [("sql", "mysql"), ("ucast", "prisma")]);
}

#[test]
fn mappings_per_target_and_dialect() {
    let compile = Compile::builder()
        .target("sql", "postgresql")
        .target("sql", "mysql")
        .target("ucast", "all")
        .mappings(json!({
            "postgresql": {"users": {"$self": "pg_users"}},
            "sql": {"users": {"$self": "sql_users"}},
        }))
        .build()
        .unwrap();

    let filters = compile.compile(&adults()).unwrap();
    assert_eq!(
        filters.get("sql", "postgresql").and_then(Query::as_sql),
        Some("WHERE pg_users.age > 18")
    );
    assert_eq!(
        filters.get("sql", "mysql").and_then(Query::as_sql),
        Some("WHERE sql_users.age > 18")
    );
    assert_eq!(
        filters.get("ucast", "all").and_then(Query::as_ucast),
        Some(&json!({"type": "field", "operator": "gt", "field": "users.age", "value": 18}))
    );
}

#[test]
fn invalid_dialect_entry_names_the_target() {
    let compile = Compile::builder()
        .target("sql", "postgresql")
        .mappings(json!({"postgresql": 5}))
        .build()
        .unwrap();

    let err = compile.compile(&adults()).unwrap_err();
    assert!(err.is_invalid_mappings());
    assert_eq!(
        err.to_string(),
        "sql (postgresql): invalid mappings: invalid mappings for dialect postgresql"
    );
}

#[test]
fn short_aliases_resolve_through_tables() {
    let compile = Compile::builder()
        .target("sql", "postgresql")
        .mappings(json!({
            "name": {"$table": "fruits"},
            "fruits": {"$self": "FRUIT", "name": "NAME"},
        }))
        .build()
        .unwrap();
    assert!(compile.shorts().contains("name"));

    let pq = single(call("eq", reference!(input.name), "apple"));
    let filters = compile.compile(&pq).unwrap();
    assert_eq!(
        filters.one().and_then(Query::as_sql),
        Some("WHERE FRUIT.NAME = 'apple'")
    );
}

#[test]
fn alternatives_become_or() {
    let compile = Compile::builder()
        .target("sql", "sqlserver")
        .build()
        .unwrap();

    let pq = PartialQueries::new([
        Body::new(vec![
            call("eq", reference!(input.fruits.colour), "red"),
            call("lt", reference!(input.fruits.price), 10i64),
        ]),
        Body::new(vec![call("eq", reference!(input.fruits.ripe), true)]),
    ]);
    let filters = compile.compile(&pq).unwrap();
    assert_eq!(
        filters.one().and_then(Query::as_sql),
        Some("WHERE ((fruits.colour = 'red' AND fruits.price < 10) OR fruits.ripe = 1)")
    );
}

#[test]
fn to_sql_renders_inline() {
    let mappings = MappingConfig::from_json(json!({"users": {"age": "user_age"}})).unwrap();

    assert_eq!(
        to_sql(&adults(), "sql", "postgresql", &mappings).unwrap(),
        Some("WHERE users.user_age > 18".to_string())
    );
    assert_eq!(
        to_sql(&PartialQueries::default(), "sql", "postgresql", &mappings).unwrap(),
        None
    );
    assert_eq!(
        to_sql(&PartialQueries::new([Body::default()]), "sql", "mysql", &mappings).unwrap(),
        Some(String::new())
    );
}

#[test]
fn to_sql_checks_first() {
    let pq = single(call("contains", reference!(input.fruits.name), "pp"));
    let err = to_sql(&pq, "sql", "sqlite", &MappingConfig::default()).unwrap_err();
    assert!(err.is_check_failed());
    assert_eq!(
        err.to_string(),
        "check failed: 1 error occurred: pe_fragment_error: invalid builtin `contains`: unsupported for SQL (sqlite)"
    );

    let rendered = to_sql(&pq, "sql", "sqlite-internal", &MappingConfig::default()).unwrap();
    assert_eq!(
        rendered.as_deref(),
        Some("WHERE internal_contains(fruits.name, 'pp')")
    );
}

#[test]
fn variable_keys_fail_the_check() {
    let compile = Compile::builder()
        .target("sql", "postgresql")
        .build()
        .unwrap();

    let column = residue_core::ast::Ref::new(vec![
        Term::var("input"),
        Term::string("fruits"),
        Term::var("x"),
    ]);
    let err = compile
        .compile(&single(call("gt", column, 1i64)))
        .unwrap_err();
    assert!(err.is_check_failed());
    assert_eq!(err.diagnostics().len(), 1);
}
