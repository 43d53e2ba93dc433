use std::{fmt, str::FromStr};

/// A structural capability of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Negated conditions
    Not,

    /// Comparing one field against another field
    FieldRef,

    /// Testing a field for presence (`IS NOT NULL`)
    ExistenceRef,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Not => "not",
            Feature::FieldRef => "field-ref",
            Feature::ExistenceRef => "existence-ref",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not" => Ok(Feature::Not),
            "field-ref" => Ok(Feature::FieldRef),
            "existence-ref" => Ok(Feature::ExistenceRef),
            _ => Err(crate::err!("unknown feature {s:?}")),
        }
    }
}
