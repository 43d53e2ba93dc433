use std::fmt;

/// Why one or more backends reject an operator or feature.
///
/// Holds one message per rejecting backend, so that a caller targeting
/// several backends sees all of them at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    messages: Vec<String>,
}

impl Unsupported {
    pub(crate) fn new(message: String) -> Unsupported {
        Unsupported {
            messages: vec![message],
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Merges the rejections of several backends. Returns `None` when there
    /// are none.
    pub(crate) fn join(rejections: impl IntoIterator<Item = Unsupported>) -> Option<Unsupported> {
        let messages: Vec<_> = rejections.into_iter().flat_map(|u| u.messages).collect();
        if messages.is_empty() {
            None
        } else {
            Some(Unsupported { messages })
        }
    }
}

impl std::error::Error for Unsupported {}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}
