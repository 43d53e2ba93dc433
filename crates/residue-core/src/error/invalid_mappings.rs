use super::Error;

/// Error when a translation table has the wrong shape, e.g. a per-dialect
/// entry that is not an object.
#[derive(Debug)]
pub(super) struct InvalidMappings {
    message: Box<str>,
}

impl std::error::Error for InvalidMappings {}

impl core::fmt::Display for InvalidMappings {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mappings: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid mappings error.
    pub fn invalid_mappings(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMappings(InvalidMappings {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid mappings error.
    pub fn is_invalid_mappings(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidMappings(_))
    }
}
