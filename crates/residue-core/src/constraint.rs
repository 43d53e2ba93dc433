//! What a backend can express.
//!
//! A [`Constraint`] describes one `(target, variant)` backend: the operators
//! ("builtins") it can render and the structural features it supports. A
//! [`ConstraintSet`] requires a filter to be valid for every member at once.

pub mod builtin;

mod feature;
pub use feature::Feature;

mod set;
pub use set::ConstraintSet;

mod target;
pub use target::Target;

mod unsupported;
pub use unsupported::Unsupported;

use crate::Error;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub target: Target,

    /// Canonical variant name, e.g. `sqlite` or `linq`.
    pub variant: &'static str,

    /// Operator names the backend can render.
    pub builtins: &'static [&'static str],

    /// Structural features the backend supports.
    pub features: &'static [Feature],
}

const COMPARISONS: &[&str] = &[
    builtin::EQ,
    builtin::EQUAL,
    builtin::NEQ,
    builtin::LT,
    builtin::LTE,
    builtin::GT,
    builtin::GTE,
];

const COMPARISONS_AND_MEMBERSHIP: &[&str] = &[
    builtin::EQ,
    builtin::EQUAL,
    builtin::NEQ,
    builtin::LT,
    builtin::LTE,
    builtin::GT,
    builtin::GTE,
    builtin::MEMBER,
];

const COMPARISONS_MEMBERSHIP_AND_PATTERNS: &[&str] = &[
    builtin::EQ,
    builtin::EQUAL,
    builtin::NEQ,
    builtin::LT,
    builtin::LTE,
    builtin::GT,
    builtin::GTE,
    builtin::MEMBER,
    builtin::STARTS_WITH,
    builtin::ENDS_WITH,
    builtin::CONTAINS,
];

const SQL_FEATURES: &[Feature] = &[Feature::Not, Feature::FieldRef, Feature::ExistenceRef];

impl Constraint {
    /// SQLite: no pattern operators.
    pub const SQL_SQLITE: Self = Self {
        target: Target::Sql,
        variant: "sqlite",
        builtins: COMPARISONS_AND_MEMBERSHIP,
        features: SQL_FEATURES,
    };

    /// SQLite with the `internal_*` pattern functions registered.
    pub const SQL_SQLITE_INTERNAL: Self = Self {
        variant: "sqlite-internal",
        builtins: COMPARISONS_MEMBERSHIP_AND_PATTERNS,
        ..Self::SQL_SQLITE
    };

    pub const SQL_MYSQL: Self = Self {
        variant: "mysql",
        ..Self::SQL_SQLITE_INTERNAL
    };

    pub const SQL_POSTGRESQL: Self = Self {
        variant: "postgresql",
        ..Self::SQL_SQLITE_INTERNAL
    };

    pub const SQL_SQLSERVER: Self = Self {
        variant: "sqlserver",
        ..Self::SQL_SQLITE_INTERNAL
    };

    pub const UCAST_ALL: Self = Self {
        target: Target::Ucast,
        variant: "all",
        builtins: COMPARISONS_AND_MEMBERSHIP,
        features: &[Feature::Not, Feature::FieldRef],
    };

    pub const UCAST_PRISMA: Self = Self {
        variant: "prisma",
        features: &[Feature::Not, Feature::ExistenceRef],
        ..Self::UCAST_ALL
    };

    pub const UCAST_LINQ: Self = Self {
        variant: "linq",
        features: &[],
        ..Self::UCAST_ALL
    };

    /// The conservative default for UCAST consumers of unknown ability.
    pub const UCAST_MINIMAL: Self = Self {
        target: Target::Ucast,
        variant: "minimal",
        builtins: COMPARISONS,
        features: &[],
    };

    /// Looks up the constraint for a `(target, variant)` pair.
    ///
    /// Both names are matched case-insensitively. An unrecognized UCAST
    /// variant falls back to [`Constraint::UCAST_MINIMAL`]; any other unknown
    /// pair is an error.
    pub fn new(target: &str, variant: &str) -> crate::Result<Constraint> {
        let parsed: Target = target
            .parse()
            .map_err(|_| Error::invalid_target(target, variant))?;

        let constraint = match (parsed, variant.to_ascii_lowercase().as_str()) {
            (Target::Sql, "sqlite") => Self::SQL_SQLITE,
            (Target::Sql, "sqlite-internal") => Self::SQL_SQLITE_INTERNAL,
            (Target::Sql, "mysql") => Self::SQL_MYSQL,
            (Target::Sql, "postgresql" | "postgres") => Self::SQL_POSTGRESQL,
            (Target::Sql, "sqlserver") => Self::SQL_SQLSERVER,
            (Target::Sql, _) => return Err(Error::invalid_target(target, variant)),
            (Target::Ucast, "all") => Self::UCAST_ALL,
            (Target::Ucast, "prisma") => Self::UCAST_PRISMA,
            (Target::Ucast, "linq") => Self::UCAST_LINQ,
            (Target::Ucast, _) => Self::UCAST_MINIMAL,
        };
        Ok(constraint)
    }

    /// Returns `true` if the backend can render the operator `name`.
    pub fn builtin(&self, name: &str) -> bool {
        self.builtins.contains(&name)
    }

    /// Returns `true` if the backend supports `feature`.
    pub fn supports(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn assert_builtin(&self, name: &str) -> Result<(), Unsupported> {
        if self.builtin(name) {
            return Ok(());
        }
        Err(Unsupported::new(format!("unsupported for {self}")))
    }

    pub fn assert_feature(&self, feature: Feature) -> Result<(), Unsupported> {
        if self.supports(feature) {
            return Ok(());
        }
        Err(Unsupported::new(format!(
            "unsupported feature \"{feature}\" for {self}"
        )))
    }

    /// The variant as shown in messages; `None` for the default UCAST variant.
    fn label(&self) -> Option<&'static str> {
        match self.variant {
            "minimal" => None,
            "linq" => Some("LINQ"),
            variant => Some(variant),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{} ({label})", self.target),
            None => write!(f, "{}", self.target),
        }
    }
}
