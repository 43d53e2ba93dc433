mod builder;
pub use builder::Builder;

mod filters;
pub use filters::{Filters, Query};

use crate::{
    check,
    mappings::{MappingConfig, Shorts},
    translate::Translator,
};

use residue_core::{
    ast::PartialQueries, constraint::Target, err, Constraint, ConstraintSet, Error, Result,
};
use residue_sql::Serializer;

/// Compiles partial-evaluation results into filters for a fixed set of
/// targets.
///
/// The partial-evaluation result is checked once against the constraints of
/// all targets together, then translated separately for each target.
#[derive(Debug, Clone)]
pub struct Compile {
    targets: Vec<CompileTarget>,

    /// Constraints of every target, which must hold simultaneously
    constraints: ConstraintSet,

    mappings: MappingConfig,

    /// Short aliases permitted by the mappings
    shorts: Shorts,
}

#[derive(Debug, Clone)]
struct CompileTarget {
    /// Target as requested, lower-cased
    name: String,

    /// Variant as requested, lower-cased
    variant: String,

    constraint: Constraint,
}

impl Compile {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn shorts(&self) -> &Shorts {
        &self.shorts
    }

    /// Checks and translates `pq` for every target.
    ///
    /// Fails with a `check failed` error carrying every diagnostic when any
    /// construct is not expressible for some target. A result without
    /// queries can never be satisfied and yields [`Query::Never`] for every
    /// target.
    pub fn compile(&self, pq: &PartialQueries) -> Result<Filters> {
        let results = check::check(pq, &self.constraints, &self.shorts);
        if !results.is_empty() {
            return Err(Error::check_failed(results));
        }

        let mut filters = Filters::default();

        for target in &self.targets {
            let query = if pq.queries.is_empty() {
                Query::Never
            } else {
                self.translate(target, pq)
                    .map_err(|e| e.context(err!("{} ({})", target.name, target.variant)))?
            };

            tracing::debug!(
                backend = %target.name,
                variant = %target.variant,
                ?query,
                "compiled filter"
            );
            filters.push(&target.name, &target.variant, query);
        }

        Ok(filters)
    }

    fn translate(&self, target: &CompileTarget, pq: &PartialQueries) -> Result<Query> {
        let mappings = self.mappings.lookup(&target.name, &target.variant)?;
        let filter = Translator::new(&mappings)
            .with_constraint(&target.constraint)
            .bodies(&pq.queries)?;

        Ok(match target.constraint.target {
            Target::Ucast => Query::Ucast(filter.to_json()?),
            Target::Sql => {
                Query::Sql(Serializer::for_dialect(&target.variant).serialize_inline(&filter)?)
            }
        })
    }
}
