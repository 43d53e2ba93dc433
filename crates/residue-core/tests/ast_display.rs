use residue_core::{
    ast::{Body, Every, Expr, Location, Ref, Term},
    reference,
};

#[test]
fn reference_display() {
    assert_eq!(reference!(input.fruits.name).to_string(), "input.fruits.name");

    let indexed = Ref::new(vec![
        Term::var("input"),
        Term::string("fruits"),
        Term::number(0),
        Term::string("has space"),
    ]);
    assert_eq!(indexed.to_string(), "input.fruits[0][\"has space\"]");
}

#[test]
fn call_display() {
    let expr = Expr::call(
        "internal.member_2",
        [
            reference!(input.fruits.name).into(),
            Term::array(["apple".into(), "pear".into()]),
        ],
    );
    assert_eq!(
        expr.to_string(),
        "internal.member_2(input.fruits.name, [\"apple\", \"pear\"])"
    );
    assert_eq!(expr.operator_name().as_deref(), Some("internal.member_2"));
}

#[test]
fn negated_with_display() {
    let expr = Expr::call("neq", [reference!(input.x).into(), Term::number(1)])
        .negate()
        .with_modifier(reference!(input.y), Term::bool(true));
    assert_eq!(expr.to_string(), "not neq(input.x, 1) with input.y as true");
}

#[test]
fn every_display() {
    let body = Body::new(vec![Expr::call(
        "neq",
        [Term::var("x"), Term::number(1)],
    )]);
    let expr = Expr::every(Every {
        key: None,
        value: Term::var("x"),
        domain: reference!(input.xs).into(),
        body,
    });
    assert_eq!(expr.to_string(), "every x in input.xs { neq(x, 1) }");
}

#[test]
fn term_display() {
    assert_eq!(Term::set([]).to_string(), "set()");
    assert_eq!(
        Term::object([("a".into(), Term::null())]).to_string(),
        "{\"a\": null}"
    );
    assert_eq!(
        Term::call("lower", [reference!(input.name).into()]).to_string(),
        "lower(input.name)"
    );
}

#[test]
fn ground_and_scalar() {
    assert!(Term::array([Term::number(1), "a".into()]).is_ground());
    assert!(!Term::array([Term::var("x")]).is_ground());
    assert!(Term::null().is_scalar());
    assert!(!Term::array([]).is_scalar());
}

#[test]
fn location_display() {
    assert_eq!(Location::new(3, 14).to_string(), "3:14");
    assert_eq!(
        Location::in_file("policy.rego", 3, 14).to_string(),
        "policy.rego:3:14"
    );
}
