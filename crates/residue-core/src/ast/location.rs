use serde::Serialize;
use std::{fmt, sync::Arc};

/// A position in policy source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Arc<str>>,
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Location {
        Location {
            file: None,
            row,
            col,
        }
    }

    pub fn in_file(file: impl Into<Arc<str>>, row: usize, col: usize) -> Location {
        Location {
            file: Some(file.into()),
            row,
            col,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}:{}:{}", self.row, self.col),
            None => write!(f, "{}:{}", self.row, self.col),
        }
    }
}
