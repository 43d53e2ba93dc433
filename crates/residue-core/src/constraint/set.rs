use super::{Constraint, Feature, Unsupported};

/// Constraints of several backends that must all hold at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new(constraints: impl IntoIterator<Item = Constraint>) -> ConstraintSet {
        ConstraintSet {
            constraints: constraints.into_iter().collect(),
        }
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns `true` if every member can render the operator `name`.
    pub fn builtin(&self, name: &str) -> bool {
        self.constraints.iter().all(|c| c.builtin(name))
    }

    /// Returns `true` if every member supports `feature`.
    pub fn supports(&self, feature: Feature) -> bool {
        self.constraints.iter().all(|c| c.supports(feature))
    }

    /// Checks the operator against every member, reporting all that reject it.
    pub fn assert_builtin(&self, name: &str) -> Result<(), Unsupported> {
        let rejected = Unsupported::join(
            self.constraints
                .iter()
                .filter_map(|c| c.assert_builtin(name).err()),
        );

        match rejected {
            Some(unsupported) => Err(unsupported),
            None => Ok(()),
        }
    }

    /// Checks the feature against every member, reporting all that lack it.
    pub fn assert_feature(&self, feature: Feature) -> Result<(), Unsupported> {
        let rejected = Unsupported::join(
            self.constraints
                .iter()
                .filter_map(|c| c.assert_feature(feature).err()),
        );

        match rejected {
            Some(unsupported) => Err(unsupported),
            None => Ok(()),
        }
    }
}

impl From<Constraint> for ConstraintSet {
    fn from(value: Constraint) -> Self {
        ConstraintSet::new([value])
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Constraint>>(iter: T) -> Self {
        ConstraintSet::new(iter)
    }
}
