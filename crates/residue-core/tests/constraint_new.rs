use residue_core::{
    constraint::{builtin, Target},
    Constraint, Feature,
};

#[test]
fn sql_variants() {
    assert_eq!(
        Constraint::new("sql", "sqlite").unwrap(),
        Constraint::SQL_SQLITE
    );
    assert_eq!(
        Constraint::new("sql", "mysql").unwrap(),
        Constraint::SQL_MYSQL
    );
    assert_eq!(
        Constraint::new("sql", "postgresql").unwrap(),
        Constraint::SQL_POSTGRESQL
    );
    assert_eq!(
        Constraint::new("sql", "postgres").unwrap(),
        Constraint::SQL_POSTGRESQL
    );
    assert_eq!(
        Constraint::new("sql", "sqlserver").unwrap(),
        Constraint::SQL_SQLSERVER
    );
    assert_eq!(
        Constraint::new("sql", "sqlite-internal").unwrap(),
        Constraint::SQL_SQLITE_INTERNAL
    );
}

#[test]
fn names_are_case_insensitive() {
    assert_eq!(
        Constraint::new("SQL", "MySQL").unwrap(),
        Constraint::SQL_MYSQL
    );
    assert_eq!(
        Constraint::new("UCAST", "Prisma").unwrap(),
        Constraint::UCAST_PRISMA
    );
}

#[test]
fn unknown_sql_variant_is_rejected() {
    let err = Constraint::new("sql", "oracle").unwrap_err();
    assert!(err.is_invalid_target());
}

#[test]
fn unknown_target_is_rejected() {
    let err = Constraint::new("graphql", "").unwrap_err();
    assert!(err.is_invalid_target());
}

#[test]
fn unknown_ucast_variant_is_minimal() {
    let constraint = Constraint::new("ucast", "mongo").unwrap();
    assert_eq!(constraint, Constraint::UCAST_MINIMAL);
    assert_eq!(constraint.target, Target::Ucast);
    assert!(constraint.features.is_empty());
    assert!(!constraint.builtin(builtin::MEMBER));
    assert!(constraint.builtin(builtin::LTE));
}

#[test]
fn sqlite_lacks_pattern_operators() {
    let sqlite = Constraint::SQL_SQLITE;
    assert!(sqlite.builtin(builtin::MEMBER));
    assert!(!sqlite.builtin(builtin::STARTS_WITH));
    assert!(!sqlite.builtin(builtin::ENDS_WITH));
    assert!(!sqlite.builtin(builtin::CONTAINS));

    for variant in ["mysql", "postgresql", "sqlserver", "sqlite-internal"] {
        let constraint = Constraint::new("sql", variant).unwrap();
        assert!(constraint.builtin(builtin::STARTS_WITH), "{variant}");
        assert!(constraint.builtin(builtin::CONTAINS), "{variant}");
    }
}

#[test]
fn builtin_supersets() {
    let sql = [
        Constraint::SQL_MYSQL,
        Constraint::SQL_POSTGRESQL,
        Constraint::SQL_SQLSERVER,
        Constraint::SQL_SQLITE_INTERNAL,
    ];
    for name in Constraint::SQL_SQLITE.builtins {
        for constraint in &sql {
            assert!(constraint.builtin(name), "{name} missing from {constraint}");
        }
    }

    for name in Constraint::UCAST_MINIMAL.builtins {
        assert!(Constraint::UCAST_ALL.builtin(name), "{name}");
    }
}

#[test]
fn ucast_features() {
    assert!(Constraint::UCAST_ALL.supports(Feature::FieldRef));
    assert!(!Constraint::UCAST_ALL.supports(Feature::ExistenceRef));

    assert!(Constraint::UCAST_PRISMA.supports(Feature::ExistenceRef));
    assert!(!Constraint::UCAST_PRISMA.supports(Feature::FieldRef));

    assert!(!Constraint::UCAST_LINQ.supports(Feature::Not));
    assert!(Constraint::UCAST_LINQ.builtin(builtin::MEMBER));
}

#[test]
fn sql_features() {
    for feature in [Feature::Not, Feature::FieldRef, Feature::ExistenceRef] {
        assert!(Constraint::SQL_POSTGRESQL.supports(feature));
    }
}

#[test]
fn display() {
    assert_eq!(Constraint::SQL_SQLITE.to_string(), "SQL (sqlite)");
    assert_eq!(Constraint::UCAST_PRISMA.to_string(), "UCAST (prisma)");
    assert_eq!(Constraint::UCAST_LINQ.to_string(), "UCAST (LINQ)");
    assert_eq!(Constraint::UCAST_MINIMAL.to_string(), "UCAST");
}

#[test]
fn assert_messages() {
    let err = Constraint::SQL_SQLITE
        .assert_builtin(builtin::STARTS_WITH)
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported for SQL (sqlite)");

    let err = Constraint::UCAST_LINQ
        .assert_feature(Feature::Not)
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported feature \"not\" for UCAST (LINQ)");

    assert!(Constraint::UCAST_ALL.assert_builtin(builtin::EQ).is_ok());
}

#[test]
fn assert_errors_name_one_backend() {
    let unsupported = Constraint::SQL_SQLITE
        .assert_builtin(builtin::CONTAINS)
        .unwrap_err();
    assert_eq!(unsupported.messages(), ["unsupported for SQL (sqlite)"]);

    let unsupported = Constraint::UCAST_PRISMA
        .assert_feature(Feature::FieldRef)
        .unwrap_err();
    assert_eq!(
        unsupported.messages(),
        ["unsupported feature \"field-ref\" for UCAST (prisma)"]
    );
}

#[test]
fn feature_from_str() {
    assert_eq!("field-ref".parse::<Feature>().unwrap(), Feature::FieldRef);
    assert_eq!(
        "existence-ref".parse::<Feature>().unwrap(),
        Feature::ExistenceRef
    );
    assert!("every".parse::<Feature>().is_err());
}
