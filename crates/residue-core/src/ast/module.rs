use super::{Body, Location, Ref};

/// A module of support rules emitted by partial evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Package path, e.g. `data.partial.filters`
    pub package: Ref,
    pub rules: Vec<Rule>,
}

/// A support rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Fully qualified path of the rule, package included.
    pub path: Ref,

    /// True for `default` rules.
    pub default: bool,

    pub body: Body,

    pub location: Option<Location>,
}

impl Module {
    pub fn new(package: Ref, rules: Vec<Rule>) -> Module {
        Module { package, rules }
    }
}

impl Rule {
    pub fn new(path: Ref, body: impl Into<Body>) -> Rule {
        Rule {
            path,
            default: false,
            body: body.into(),
            location: None,
        }
    }

    /// Creates a `default` rule, which has no body.
    pub fn default_rule(path: Ref) -> Rule {
        Rule {
            path,
            default: true,
            body: Body::default(),
            location: None,
        }
    }
}
