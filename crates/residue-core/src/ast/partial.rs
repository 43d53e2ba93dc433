use super::{Body, Module};

/// The result of partially evaluating a query.
///
/// Each body is one way of satisfying the original query; the bodies are
/// alternatives. An empty list of bodies means the query can never be
/// satisfied, whereas an empty body is satisfied unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialQueries {
    pub queries: Vec<Body>,

    /// Rules the bodies still refer to. Only used for diagnostics.
    pub support: Vec<Module>,
}

impl PartialQueries {
    pub fn new(queries: impl IntoIterator<Item = Body>) -> PartialQueries {
        PartialQueries {
            queries: queries.into_iter().collect(),
            support: vec![],
        }
    }

    pub fn with_support(mut self, support: impl IntoIterator<Item = Module>) -> PartialQueries {
        self.support.extend(support);
        self
    }
}
