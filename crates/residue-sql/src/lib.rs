pub mod serializer;
pub use serializer::{Inline, Params, Placeholder, Serializer};
