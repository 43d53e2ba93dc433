#[macro_use]
mod macros;

pub mod ast;

pub mod constraint;
pub use constraint::{Constraint, ConstraintSet, Feature};

pub mod diagnostic;
pub use diagnostic::{Diagnostic, Results};

mod error;
pub use error::Error;

pub mod ucast;

/// A Result type alias that uses Residue's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
