//! The portable constraint tree.
//!
//! A backend-agnostic condition over the unknown document: field nodes
//! compare one field against a value, compound nodes combine children with
//! `and`, `or` or `not`. [`Filter::Always`] stands for a condition that holds
//! unconditionally. It is distinct from any node, in particular from an empty
//! conjunction.

mod filter;
pub use filter::Filter;

mod node;
pub use node::{CompoundNode, FieldNode, Node};

mod op;
pub use op::{CompoundOp, FieldOp};

mod value;
pub use value::{FieldValue, Value};
