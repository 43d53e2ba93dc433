use residue_core::ucast::{FieldOp, FieldValue, Filter, Node};
use residue_sql::Serializer;

fn eq(field: &str, value: &str) -> Node {
    Node::field(FieldOp::Eq, field, FieldValue::literal(value))
}

#[test]
fn and_or_are_parenthesized() {
    let filter = Filter::or_from_vec(vec![
        Node::and(vec![eq("t.a", "x"), eq("t.b", "y")]).unwrap(),
        eq("t.c", "z"),
    ]);

    assert_eq!(
        Serializer::sqlite().serialize_inline(&filter).unwrap(),
        "WHERE ((t.a = 'x' AND t.b = 'y') OR t.c = 'z')"
    );
}

#[test]
fn not_prefixes_child() {
    let filter = Filter::from(Node::not(eq("t.a", "x")));
    assert_eq!(
        Serializer::mysql().serialize_inline(&filter).unwrap(),
        "WHERE NOT t.a = 'x'"
    );
}

#[test]
fn nested_not_in_and() {
    let filter = Filter::and_from_vec(vec![
        Node::not(Node::field(FieldOp::Ne, "t.a", FieldValue::Null)),
        eq("t.b", "y"),
    ]);
    assert_eq!(
        Serializer::postgresql().serialize_inline(&filter).unwrap(),
        "WHERE (NOT t.a IS NOT NULL AND t.b = 'y')"
    );
}
