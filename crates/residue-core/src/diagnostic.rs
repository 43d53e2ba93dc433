//! Diagnostics reported by the fragment checker.

use crate::ast::Location;

use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;

/// Code carried by every fragment diagnostic.
pub const PE_FRAGMENT_ERROR: &str = "pe_fragment_error";

/// One reason a partial-evaluation result cannot be translated for a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Remediation hint. Serialized as `{"details": "..."}`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_details"
    )]
    pub details: Option<String>,
}

/// Diagnostics of one checker pass, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Results(Vec<Diagnostic>);

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            code: PE_FRAGMENT_ERROR,
            message: message.into(),
            location: None,
            details: None,
        }
    }

    pub fn at(mut self, location: Option<Location>) -> Diagnostic {
        self.location = location;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Diagnostic {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

fn serialize_details<S: Serializer>(
    details: &Option<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("details", details)?;
    map.end()
}

impl Results {
    pub fn new() -> Results {
        Results::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => f.write_str("no errors"),
            [single] => write!(f, "1 error occurred: {single}"),
            all => {
                write!(f, "{} errors occurred:", all.len())?;
                for diagnostic in all {
                    write!(f, "\n{diagnostic}")?;
                }
                Ok(())
            }
        }
    }
}

impl Extend<Diagnostic> for Results {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Results {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Results(iter.into_iter().collect())
    }
}

impl IntoIterator for Results {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Results {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
