use super::{SELF_KEY, TABLE_KEY};

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Mapping for one table or short alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMapping {
    /// `$table`: physical table a short alias points to
    redirect: Option<String>,

    /// `$self`: physical name of the table itself
    rename: Option<String>,

    /// Column renames
    columns: IndexMap<String, String>,
}

impl TableMapping {
    /// Reads a table entry. Values that are not strings are ignored.
    pub fn from_object(entry: &Map<String, Value>) -> TableMapping {
        let mut table = TableMapping::default();

        for (key, value) in entry {
            let Some(value) = value.as_str() else {
                continue;
            };

            match key.as_str() {
                TABLE_KEY => table.redirect = Some(value.to_string()),
                SELF_KEY => table.rename = Some(value.to_string()),
                _ => {
                    table.columns.insert(key.clone(), value.to_string());
                }
            }
        }

        table
    }

    pub fn redirect_to(mut self, table: impl Into<String>) -> TableMapping {
        self.redirect = Some(table.into());
        self
    }

    pub fn renamed(mut self, name: impl Into<String>) -> TableMapping {
        self.rename = Some(name.into());
        self
    }

    pub fn column_as(mut self, column: impl Into<String>, name: impl Into<String>) -> TableMapping {
        self.columns.insert(column.into(), name.into());
        self
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// The physical table name: `$table` if set, else `$self`.
    pub fn table_name(&self) -> Option<&str> {
        self.redirect.as_deref().or(self.rename.as_deref())
    }

    pub fn column(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}
