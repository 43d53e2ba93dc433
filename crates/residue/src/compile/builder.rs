use super::{Compile, CompileTarget};
use crate::mappings::MappingConfig;

use residue_core::{bail, Constraint, ConstraintSet, Result};

#[derive(Debug, Default)]
pub struct Builder {
    /// Requested `(target, variant)` pairs, in order
    targets: Vec<(String, String)>,

    /// Raw mapping configuration
    mappings: Option<serde_json::Value>,
}

impl Builder {
    /// Adds a target. If repeated, the constraints of all targets apply
    /// simultaneously.
    pub fn target(&mut self, target: &str, variant: &str) -> &mut Self {
        self.targets.push((target.to_string(), variant.to_string()));
        self
    }

    /// Sets the table and column mappings, see [`MappingConfig`].
    pub fn mappings(&mut self, mappings: serde_json::Value) -> &mut Self {
        self.mappings = Some(mappings);
        self
    }

    pub fn build(&self) -> Result<Compile> {
        if self.targets.is_empty() {
            bail!("at least one target is required");
        }

        let targets = self
            .targets
            .iter()
            .map(|(target, variant)| -> Result<CompileTarget> {
                Ok(CompileTarget {
                    name: target.to_ascii_lowercase(),
                    variant: variant.to_ascii_lowercase(),
                    constraint: Constraint::new(target, variant)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let constraints: ConstraintSet = targets.iter().map(|t| t.constraint).collect();

        let mappings = match &self.mappings {
            Some(mappings) => MappingConfig::from_json(mappings.clone())?,
            None => MappingConfig::default(),
        };
        let shorts = mappings.shorts();

        tracing::debug!(
            backends = ?self.targets,
            shorts = ?shorts,
            "built compile pipeline"
        );

        Ok(Compile {
            targets,
            constraints,
            mappings,
            shorts,
        })
    }
}
