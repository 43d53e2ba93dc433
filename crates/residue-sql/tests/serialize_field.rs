use residue_core::ucast::{FieldOp, FieldValue, Filter, Node, Value};
use residue_sql::{Inline, Serializer};

fn field(op: FieldOp, value: FieldValue) -> Filter {
    Filter::Node(Node::field(op, "fruits.name", value))
}

fn inline(filter: &Filter) -> String {
    Serializer::postgresql().serialize_inline(filter).unwrap()
}

#[test]
fn comparison_operators() {
    let cases = [
        (FieldOp::Eq, "="),
        (FieldOp::Ne, "<>"),
        (FieldOp::Gt, ">"),
        (FieldOp::Gte, ">="),
        (FieldOp::Lt, "<"),
        (FieldOp::Lte, "<="),
    ];

    for (op, sql) in cases {
        assert_eq!(
            inline(&field(op, FieldValue::literal("apple"))),
            format!("WHERE fruits.name {sql} 'apple'")
        );
    }
}

#[test]
fn always_renders_empty() {
    assert_eq!(inline(&Filter::Always), "");
    assert_eq!(
        Serializer::mysql()
            .serialize(&Filter::Always, &mut Vec::new())
            .unwrap(),
        ""
    );
}

#[test]
fn null_marker() {
    assert_eq!(
        inline(&field(FieldOp::Eq, FieldValue::Null)),
        "WHERE fruits.name IS NULL"
    );
    assert_eq!(
        inline(&field(FieldOp::Ne, FieldValue::Null)),
        "WHERE fruits.name IS NOT NULL"
    );

    let err = Serializer::sqlite()
        .serialize_inline(&field(FieldOp::Gt, FieldValue::Null))
        .unwrap_err();
    assert!(err.is_invalid_filter());
}

#[test]
fn field_reference_is_raw() {
    assert_eq!(
        inline(&field(FieldOp::Eq, FieldValue::field("fruits.colour"))),
        "WHERE fruits.name = fruits.colour"
    );
}

#[test]
fn in_list() {
    let list = FieldValue::literal(vec![Value::from("apple"), Value::from("pear")]);
    assert_eq!(
        inline(&field(FieldOp::In, list)),
        "WHERE fruits.name IN ('apple', 'pear')"
    );
}

#[test]
fn in_empty_list_is_false() {
    let list = FieldValue::literal(Vec::<Value>::new());
    assert_eq!(inline(&field(FieldOp::In, list)), "WHERE 0 = 1");
}

#[test]
fn in_requires_list() {
    let err = Serializer::sqlite()
        .serialize_inline(&field(FieldOp::In, FieldValue::literal("apple")))
        .unwrap_err();
    assert!(err.is_invalid_filter());
}

#[test]
fn composite_literal_in_scalar_position() {
    let list = FieldValue::literal(vec![Value::from(1i64)]);
    let err = Serializer::sqlite()
        .serialize_inline(&field(FieldOp::Eq, list))
        .unwrap_err();
    assert!(err.is_invalid_filter());
}

#[test]
fn patterns_use_like() {
    assert_eq!(
        inline(&field(FieldOp::StartsWith, FieldValue::literal("app"))),
        "WHERE fruits.name LIKE 'app%'"
    );
    assert_eq!(
        inline(&field(FieldOp::EndsWith, FieldValue::literal("le"))),
        "WHERE fruits.name LIKE '%le'"
    );
    assert_eq!(
        inline(&field(FieldOp::Contains, FieldValue::literal("10%_off"))),
        r"WHERE fruits.name LIKE '%10\%\_off%'"
    );
}

#[test]
fn patterns_require_strings() {
    let err = Serializer::postgresql()
        .serialize_inline(&field(FieldOp::StartsWith, FieldValue::literal(1i64)))
        .unwrap_err();
    assert!(err.is_invalid_filter());
}

#[test]
fn sqlite_internal_pattern_functions() {
    let sql = Serializer::sqlite_internal()
        .serialize_inline(&field(FieldOp::Contains, FieldValue::literal("pp")))
        .unwrap();
    assert_eq!(sql, "WHERE internal_contains(fruits.name, 'pp')");

    let sql = Serializer::for_dialect("sqlite-internal")
        .serialize_inline(&field(FieldOp::StartsWith, FieldValue::literal("a")))
        .unwrap();
    assert_eq!(sql, "WHERE internal_startswith(fruits.name, 'a')");
}

#[test]
fn booleans_and_numbers() {
    let filter = Filter::Node(Node::field(
        FieldOp::Eq,
        "fruits.ripe",
        FieldValue::literal(true),
    ));
    assert_eq!(inline(&filter), "WHERE fruits.ripe = TRUE");
    assert_eq!(
        Serializer::sqlserver().serialize_inline(&filter).unwrap(),
        "WHERE fruits.ripe = 1"
    );

    let filter = Filter::Node(Node::field(
        FieldOp::Lt,
        "fruits.price",
        FieldValue::literal(Value::Number(serde_json::Number::from_f64(2.5).unwrap())),
    ));
    assert_eq!(inline(&filter), "WHERE fruits.price < 2.5");
}

#[test]
fn quotes_are_escaped() {
    let filter = field(FieldOp::Eq, FieldValue::literal("o'clock"));
    assert_eq!(inline(&filter), "WHERE fruits.name = 'o''clock'");
    assert_eq!(
        Serializer::mysql().serialize(&filter, &mut Inline).unwrap(),
        r"WHERE fruits.name = 'o\'clock'"
    );
}
