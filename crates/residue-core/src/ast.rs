//! The term model of partial-evaluation output.
//!
//! Partial evaluation of a policy leaves a disjunction of conjunctive query
//! bodies over the unknown document, plus support modules holding rules the
//! bodies still refer to. These types describe that output; they are produced
//! by the host engine and consumed read-only by the checker and translator.

mod body;
pub use body::Body;

mod expr;
pub use expr::{Every, Expr, ExprTerms, With};

mod location;
pub use location::Location;

mod module;
pub use module::{Module, Rule};

mod partial;
pub use partial::PartialQueries;

mod reference;
pub use reference::Ref;

mod term;
pub use term::{Call, Term, TermValue};

/// Name of the variable rooting the input document.
pub const INPUT_ROOT: &str = "input";

/// Name of the variable rooting the data document.
pub const DATA_ROOT: &str = "data";

/// Package segment under `data` holding rules generated by partial evaluation.
pub const PARTIAL_NAMESPACE: &str = "partial";
