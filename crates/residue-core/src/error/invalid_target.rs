use super::Error;

/// Error when a target/variant pair names no known backend.
///
/// This is a caller configuration mistake, not a property of the policy being
/// compiled, so it is returned as soon as constraints are constructed.
#[derive(Debug)]
pub(super) struct InvalidTarget {
    target: Box<str>,
    variant: Box<str>,
}

impl std::error::Error for InvalidTarget {}

impl core::fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid target: unsupported target {:?} with variant {:?}",
            self.target, self.variant
        )
    }
}

impl Error {
    /// Creates an invalid target error for an unknown `(target, variant)` pair.
    pub fn invalid_target(target: impl Into<String>, variant: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTarget(InvalidTarget {
            target: target.into().into(),
            variant: variant.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid target error.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidTarget(_))
    }
}
