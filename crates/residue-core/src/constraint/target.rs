use std::{fmt, str::FromStr};

/// The family of a backend's filter language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// SQL `WHERE` clauses
    Sql,

    /// UCAST condition trees
    Ucast,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Sql => "sql",
            Target::Ucast => "ucast",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Sql => f.write_str("SQL"),
            Target::Ucast => f.write_str("UCAST"),
        }
    }
}

impl FromStr for Target {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sql" => Ok(Target::Sql),
            "ucast" => Ok(Target::Ucast),
            _ => Err(crate::err!("unknown target {s:?}")),
        }
    }
}
