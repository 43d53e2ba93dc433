use super::Error;

/// Error when the translator refuses an expression.
///
/// The translator does not explain itself in detail: every input it refuses
/// is expected to be rejected by the checker first, which reports why.
#[derive(Debug)]
pub(super) struct Untranslatable {
    reason: Box<str>,
}

impl std::error::Error for Untranslatable {}

impl core::fmt::Display for Untranslatable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot translate expression: {}", self.reason)
    }
}

impl Error {
    /// Creates an untranslatable expression error.
    pub fn untranslatable(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Untranslatable(Untranslatable {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an untranslatable expression error.
    pub fn is_untranslatable(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Untranslatable(_))
    }
}
