use super::{Term, TermValue, DATA_ROOT, INPUT_ROOT};

use std::{fmt, ops};

/// A path into a document: a rooting variable followed by key terms.
///
/// ```text
/// input.fruits.name        // input document, table `fruits`, column `name`
/// data.partial.__not1_0__  // rule generated by partial evaluation
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ref(Vec<Term>);

impl Ref {
    pub fn new(terms: Vec<Term>) -> Ref {
        assert!(!terms.is_empty(), "references have at least a head");
        Ref(terms)
    }

    /// Parses `a.b.c` into a reference with head variable `a` and string keys
    /// `b` and `c`. Operator names such as `internal.member_2` use the same form.
    pub fn parse_dotted(path: &str) -> Ref {
        let mut segments = path.split('.');
        let head = segments.next().unwrap_or_default();

        let mut terms = vec![Term::var(head)];
        terms.extend(segments.map(Term::string));
        Ref(terms)
    }

    pub fn head(&self) -> &Term {
        &self.0[0]
    }

    /// Returns `true` if the head is the variable `name`.
    pub fn is_rooted_at(&self, name: &str) -> bool {
        self.head().as_var() == Some(name)
    }

    /// Returns `true` if the reference points into the input document.
    pub fn is_input(&self) -> bool {
        self.is_rooted_at(INPUT_ROOT)
    }

    /// Returns `true` if the reference points into the data document.
    pub fn is_data(&self) -> bool {
        self.is_rooted_at(DATA_ROOT)
    }

    /// Returns `true` if `prefix` is a leading subsequence of this reference.
    pub fn has_prefix(&self, prefix: &Ref) -> bool {
        prefix.len() <= self.len()
            && self
                .iter()
                .zip(prefix.iter())
                .all(|(lhs, rhs)| lhs.value == rhs.value)
    }

    /// Returns the keys after the head as strings, or `None` if any key is not
    /// a string.
    pub fn string_keys(&self) -> Option<Vec<&str>> {
        self.0[1..].iter().map(Term::as_str).collect()
    }

    /// Returns a new reference with the head replaced by `head` and the first
    /// `skip` keys dropped, e.g. rebasing `data.partial.x` onto `data`.
    pub fn rebase(&self, head: &str, skip: usize) -> Ref {
        let mut terms = vec![Term::var(head)];
        terms.extend(self.0.iter().skip(1 + skip).cloned());
        Ref(terms)
    }

    /// Compares references by value, ignoring source positions.
    pub fn same_path(&self, other: &Ref) -> bool {
        self.len() == other.len() && self.has_prefix(other)
    }
}

impl ops::Deref for Ref {
    type Target = [Term];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Ref {
    type IntoIter = std::slice::Iter<'a, Term>;
    type Item = &'a Term;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((head, keys)) = self.0.split_first() else {
            return Ok(());
        };
        match &head.value {
            TermValue::Var(name) => f.write_str(name)?,
            _ => write!(f, "{head}")?,
        }

        for key in keys {
            match &key.value {
                TermValue::String(s) if is_identifier(s) => write!(f, ".{s}")?,
                _ => write!(f, "[{key}]")?,
            }
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_keys_use_dots() {
        assert!(is_identifier("member_2"));
        assert!(is_identifier("_x"));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }

    #[test]
    #[should_panic(expected = "references have at least a head")]
    fn empty_reference_is_rejected() {
        Ref::new(vec![]);
    }

    #[test]
    fn rebase_drops_partial_namespace() {
        let path = Ref::parse_dotted("data.partial.filters.other");
        assert_eq!(path.rebase("data", 1).to_string(), "data.filters.other");
    }
}
