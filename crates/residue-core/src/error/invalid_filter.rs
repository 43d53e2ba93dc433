use super::Error;

/// Error when a constraint tree cannot be rendered, e.g. `in` with a scalar
/// value or a pattern operator with a non-string argument.
#[derive(Debug)]
pub(super) struct InvalidFilter {
    message: Box<str>,
}

impl std::error::Error for InvalidFilter {}

impl core::fmt::Display for InvalidFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid filter: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid filter error.
    pub fn invalid_filter(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFilter(InvalidFilter {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid filter error.
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidFilter(_))
    }
}
