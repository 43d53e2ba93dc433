//! Compiles partial-evaluation results of a policy into data filters.
//!
//! Partial evaluation leaves a disjunction of query bodies over the unknown
//! input document. This crate checks that every construct in those bodies is
//! expressible by the chosen backends, translates the bodies into a portable
//! constraint tree, and renders the tree as UCAST JSON or a SQL `WHERE`
//! clause.
//!
//! ```ignore
//! let compile = Compile::builder()
//!     .target("sql", "postgresql")
//!     .mappings(json!({"users": {"$self": "app_users"}}))
//!     .build()?;
//!
//! let filters = compile.compile(&partial_queries)?;
//! ```

pub mod check;
pub use check::{check, Checker};

pub mod compile;
pub use compile::{Compile, Filters, Query};

pub mod mappings;
pub use mappings::{MappingConfig, Mappings, Shorts, TableMapping};

pub mod translate;
pub use translate::Translator;

pub use residue_core::{
    ast, constraint, ucast, Constraint, ConstraintSet, Diagnostic, Error, Feature, Result,
    Results,
};
pub use residue_sql::Serializer;

use residue_core::{ast::Body, ast::PartialQueries, ucast::Filter};

/// Translates bodies without constraint checks.
pub fn translate(bodies: &[Body], mappings: &Mappings) -> Result<Filter> {
    Translator::new(mappings).bodies(bodies)
}

/// Checks, translates and renders `pq` as an inlined SQL `WHERE` clause.
///
/// Returns `None` when `pq` has no queries and no row can match, and the empty
/// string when every row matches.
pub fn to_sql(
    pq: &PartialQueries,
    target: &str,
    dialect: &str,
    mappings: &MappingConfig,
) -> Result<Option<String>> {
    let constraint = Constraint::new(target, dialect)?;

    let results = check(pq, &ConstraintSet::from(constraint), &mappings.shorts());
    if !results.is_empty() {
        return Err(Error::check_failed(results));
    }

    if pq.queries.is_empty() {
        return Ok(None);
    }

    let mappings = mappings.lookup(target, dialect)?;
    let filter = Translator::new(&mappings)
        .with_constraint(&constraint)
        .bodies(&pq.queries)?;

    Serializer::for_dialect(dialect)
        .serialize_inline(&filter)
        .map(Some)
}
