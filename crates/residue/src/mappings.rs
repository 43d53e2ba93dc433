//! Translation tables from policy names to physical table and column names.
//!
//! A table entry maps column names to physical names and may carry two
//! special keys:
//!
//! ```text
//! {
//!   "users": {"$self": "app_users", "age": "user_age"},  // rename table
//!   "name":  {"$table": "fruits"},                        // short alias
//! }
//! ```
//!
//! Tables can also be configured per target (`"sql"`, `"ucast"`) or per
//! dialect (`"postgresql"`, ...), see [`MappingConfig::lookup`].

mod table;
pub use table::TableMapping;

use residue_core::{Error, Result};

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

/// Names permitted as two-segment references, e.g. `input.name`.
pub type Shorts = IndexSet<String>;

/// Key redirecting a short alias, or renaming a table in place.
pub const TABLE_KEY: &str = "$table";

/// Key renaming a table while keeping its column names.
pub const SELF_KEY: &str = "$self";

/// Raw mapping configuration, possibly keyed per target or dialect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingConfig {
    raw: Map<String, Value>,
}

/// The table mappings that apply to one target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mappings {
    tables: IndexMap<String, TableMapping>,
}

impl MappingConfig {
    /// Wraps a JSON document. `null` is an empty configuration; anything else
    /// but an object is rejected.
    pub fn from_json(value: Value) -> Result<MappingConfig> {
        match value {
            Value::Null => Ok(MappingConfig::default()),
            Value::Object(raw) => Ok(MappingConfig { raw }),
            other => Err(Error::invalid_mappings(format!(
                "expected an object, got {other}"
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Selects the mappings for `target` and `dialect`: the dialect entry if
    /// present, else the target entry, else the whole configuration.
    pub fn lookup(&self, target: &str, dialect: &str) -> Result<Mappings> {
        if let Some(entry) = self.entry(dialect) {
            let tables = entry.as_object().ok_or_else(|| {
                Error::invalid_mappings(format!("invalid mappings for dialect {dialect}"))
            })?;
            return Ok(Mappings::from_object(tables));
        }

        if let Some(entry) = self.entry(target) {
            let tables = entry.as_object().ok_or_else(|| {
                Error::invalid_mappings(format!("invalid mappings for target {target}"))
            })?;
            return Ok(Mappings::from_object(tables));
        }

        Ok(Mappings::from_object(&self.raw))
    }

    /// Collects the short aliases: every key whose entry contains `$table`,
    /// looking one level into per-target and per-dialect entries.
    pub fn shorts(&self) -> Shorts {
        let mut shorts = Shorts::new();

        for (key, value) in &self.raw {
            let Some(entry) = value.as_object() else {
                continue;
            };

            if entry.contains_key(TABLE_KEY) {
                shorts.insert(key.clone());
                continue;
            }

            for (nested_key, nested) in entry {
                if nested
                    .as_object()
                    .is_some_and(|nested| nested.contains_key(TABLE_KEY))
                {
                    shorts.insert(nested_key.clone());
                }
            }
        }

        shorts
    }

    fn entry(&self, key: &str) -> Option<&Value> {
        self.raw.get(key).filter(|value| !value.is_null())
    }
}

impl Mappings {
    /// Builds mappings from a JSON object of table entries. Entries that are
    /// not objects are ignored.
    pub fn from_object(tables: &Map<String, Value>) -> Mappings {
        Mappings {
            tables: tables
                .iter()
                .filter_map(|(name, entry)| {
                    let entry = entry.as_object()?;
                    Some((name.clone(), TableMapping::from_object(entry)))
                })
                .collect(),
        }
    }

    pub fn table(&self, name: &str) -> Option<&TableMapping> {
        self.tables.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, table: TableMapping) {
        self.tables.insert(name.into(), table);
    }

    /// Derives the dotted field name for a path below the input root.
    ///
    /// A single segment is a short alias: it is redirected through its
    /// `$table` entry, then the target table's own entry applies. With two or
    /// more segments the first names a table and the second a column; any
    /// further segments are kept as is.
    pub fn field_name(&self, segments: &[&str]) -> String {
        match segments {
            [] => String::new(),
            [column] => match self.table(column).and_then(TableMapping::redirect) {
                Some(table) => self.qualify(table, column, &[]),
                None => column.to_string(),
            },
            [table, column, rest @ ..] => self.qualify(table, column, rest),
        }
    }

    fn qualify(&self, table: &str, column: &str, rest: &[&str]) -> String {
        let entry = self.table(table);
        let table = entry.and_then(TableMapping::table_name).unwrap_or(table);
        let column = entry.and_then(|e| e.column(column)).unwrap_or(column);

        let mut name = format!("{table}.{column}");
        for segment in rest {
            name.push('.');
            name.push_str(segment);
        }
        name
    }
}

impl FromIterator<(String, TableMapping)> for Mappings {
    fn from_iter<T: IntoIterator<Item = (String, TableMapping)>>(iter: T) -> Self {
        Mappings {
            tables: iter.into_iter().collect(),
        }
    }
}
