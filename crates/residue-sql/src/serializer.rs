#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod params;
pub use params::{Inline, Params, Placeholder};

// Fragment serializers
mod node;
mod pattern;
mod value;

use residue_core::{ucast::Filter, Result};

/// Renders a constraint tree as a SQL `WHERE` clause.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serializes `filter` to a `WHERE` clause. The `Always` sentinel has no
    /// condition and serializes to the empty string.
    pub fn serialize(&self, filter: &Filter, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let Filter::Node(node) = filter else {
            return Ok(ret);
        };

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        let f = &mut fmt;
        fmt!(f, "WHERE " node);

        tracing::trace!(flavor = ?self.flavor, sql = %ret, "serialized filter");
        Ok(ret)
    }

    /// Serializes `filter` with every literal inlined.
    pub fn serialize_inline(&self, filter: &Filter) -> Result<String> {
        self.serialize(filter, &mut Inline)
    }
}
