use indexmap::IndexMap;

/// The compiled query for one target.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// No row can match: partial evaluation left no way to satisfy the policy.
    Never,

    /// UCAST document; the empty object when every row matches
    Ucast(serde_json::Value),

    /// SQL `WHERE` clause; empty when every row matches
    Sql(String),
}

/// Compiled queries, keyed by target and variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    filters: IndexMap<(String, String), Query>,
}

impl Query {
    pub fn is_never(&self) -> bool {
        matches!(self, Query::Never)
    }

    pub fn as_sql(&self) -> Option<&str> {
        match self {
            Query::Sql(sql) => Some(sql),
            _ => None,
        }
    }

    pub fn as_ucast(&self) -> Option<&serde_json::Value> {
        match self {
            Query::Ucast(document) => Some(document),
            _ => None,
        }
    }
}

impl Filters {
    pub(super) fn push(&mut self, target: &str, variant: &str, query: Query) {
        self.filters
            .insert((target.to_string(), variant.to_string()), query);
    }

    /// Returns the query compiled for `target` and `variant`.
    pub fn get(&self, target: &str, variant: &str) -> Option<&Query> {
        self.filters.get(&(
            target.to_ascii_lowercase(),
            variant.to_ascii_lowercase(),
        ))
    }

    /// Returns the first compiled query. Intended for pipelines with a
    /// single target.
    pub fn one(&self) -> Option<&Query> {
        self.filters.values().next()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Query)> {
        self.filters
            .iter()
            .map(|((target, variant), query)| (target.as_str(), variant.as_str(), query))
    }
}
