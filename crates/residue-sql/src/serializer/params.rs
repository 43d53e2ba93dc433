use super::{Flavor, Formatter, ToSql};

use residue_core::{ucast::Value, Result};

/// Receives the literals of a filter as it is serialized.
pub trait Params {
    /// Stores a scalar literal. Returns the placeholder to render in its
    /// place, or `None` if the literal should be inlined into the SQL text.
    fn push(&mut self, value: &Value) -> Option<Placeholder>;
}

/// Position of a bind parameter, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

/// Inlines every literal as a quoted SQL literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inline;

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Option<Placeholder> {
        self.push(value.clone());
        Some(Placeholder(self.len()))
    }
}

impl Params for Inline {
    fn push(&mut self, _: &Value) -> Option<Placeholder> {
        None
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let placeholder = match f.serializer.flavor {
            Flavor::Mysql => "?".to_string(),
            Flavor::Postgresql => format!("${}", self.0),
            Flavor::Sqlite | Flavor::SqliteInternal => format!("?{}", self.0),
            Flavor::Sqlserver => format!("@p{}", self.0),
        };
        f.dst.push_str(&placeholder);
        Ok(())
    }
}
