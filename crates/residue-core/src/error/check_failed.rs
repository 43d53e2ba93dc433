use super::Error;
use crate::diagnostic::{Diagnostic, Results};

/// Error when the checker reported at least one diagnostic.
///
/// Carries every diagnostic of the pass so callers can surface all
/// incompatibilities at once.
#[derive(Debug)]
pub(super) struct CheckFailed {
    results: Results,
}

impl std::error::Error for CheckFailed {}

impl core::fmt::Display for CheckFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "check failed: {}", self.results)
    }
}

impl Error {
    /// Creates a check failed error from the checker's results.
    pub fn check_failed(results: Results) -> Error {
        Error::from(super::ErrorKind::CheckFailed(CheckFailed { results }))
    }

    /// Returns `true` if this error is a check failed error.
    pub fn is_check_failed(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::CheckFailed(_))
    }

    /// Returns the diagnostics carried by a check failed error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self.root().kind() {
            super::ErrorKind::CheckFailed(err) => err.results.as_slice(),
            _ => &[],
        }
    }
}
