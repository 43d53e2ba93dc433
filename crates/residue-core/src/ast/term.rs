use super::{Location, Ref};

use serde_json::Number;
use std::fmt;

/// A single operand of an expression, with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub value: TermValue,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TermValue {
    /// The `null` literal
    Null,

    /// A boolean literal
    Bool(bool),

    /// A numeric literal
    Number(Number),

    /// A string literal
    String(String),

    /// A variable. Partial evaluation leaves unbound wildcards as variables.
    Var(String),

    /// A path into a document
    Ref(Ref),

    /// An array literal
    Array(Vec<Term>),

    /// A set literal
    Set(Vec<Term>),

    /// An object literal, in source order
    Object(Vec<(Term, Term)>),

    /// A call used as an operand of another call
    Call(Call),
}

/// A function call: the operator reference followed by its operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Call(pub Vec<Term>);

impl Term {
    pub fn new(value: TermValue) -> Term {
        Term {
            value,
            location: None,
        }
    }

    pub fn null() -> Term {
        Term::new(TermValue::Null)
    }

    pub fn bool(value: bool) -> Term {
        Term::new(TermValue::Bool(value))
    }

    pub fn number(value: impl Into<Number>) -> Term {
        Term::new(TermValue::Number(value.into()))
    }

    /// Creates a floating point number term. Non-finite values become `null`.
    pub fn float(value: f64) -> Term {
        Term::new(Number::from_f64(value).map_or(TermValue::Null, TermValue::Number))
    }

    pub fn string(value: impl Into<String>) -> Term {
        Term::new(TermValue::String(value.into()))
    }

    pub fn var(name: impl Into<String>) -> Term {
        Term::new(TermValue::Var(name.into()))
    }

    pub fn reference(reference: Ref) -> Term {
        Term::new(TermValue::Ref(reference))
    }

    pub fn array(items: impl IntoIterator<Item = Term>) -> Term {
        Term::new(TermValue::Array(items.into_iter().collect()))
    }

    pub fn set(items: impl IntoIterator<Item = Term>) -> Term {
        Term::new(TermValue::Set(items.into_iter().collect()))
    }

    pub fn object(entries: impl IntoIterator<Item = (Term, Term)>) -> Term {
        Term::new(TermValue::Object(entries.into_iter().collect()))
    }

    /// Creates a call term, e.g. a nested call operand.
    pub fn call(operator: &str, operands: impl IntoIterator<Item = Term>) -> Term {
        let mut terms = vec![Term::reference(Ref::parse_dotted(operator))];
        terms.extend(operands);
        Term::new(TermValue::Call(Call(terms)))
    }

    /// Attaches a source position to the term.
    pub fn at(mut self, location: Location) -> Term {
        self.location = Some(location);
        self
    }

    pub fn as_reference(&self) -> Option<&Ref> {
        match &self.value {
            TermValue::Ref(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            TermValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_var(&self) -> Option<&str> {
        match &self.value {
            TermValue::Var(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_ref(&self) -> bool {
        matches!(self.value, TermValue::Ref(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self.value, TermValue::Var(_))
    }

    pub fn is_call(&self) -> bool {
        matches!(self.value, TermValue::Call(_))
    }

    /// Returns `true` for `null`, booleans, numbers and strings.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.value,
            TermValue::Null | TermValue::Bool(_) | TermValue::Number(_) | TermValue::String(_)
        )
    }

    /// Returns `true` if no variable, reference or call occurs in the term.
    pub fn is_ground(&self) -> bool {
        match &self.value {
            TermValue::Null | TermValue::Bool(_) | TermValue::Number(_) | TermValue::String(_) => {
                true
            }
            TermValue::Var(_) | TermValue::Ref(_) | TermValue::Call(_) => false,
            TermValue::Array(items) | TermValue::Set(items) => items.iter().all(Term::is_ground),
            TermValue::Object(entries) => entries
                .iter()
                .all(|(key, value)| key.is_ground() && value.is_ground()),
        }
    }
}

impl From<Ref> for Term {
    fn from(value: Ref) -> Self {
        Term::reference(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::string(value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::number(value)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::bool(value)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl fmt::Display for TermValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermValue::Null => f.write_str("null"),
            TermValue::Bool(value) => write!(f, "{value}"),
            TermValue::Number(value) => write!(f, "{value}"),
            TermValue::String(value) => write!(f, "{value:?}"),
            TermValue::Var(name) => f.write_str(name),
            TermValue::Ref(reference) => write!(f, "{reference}"),
            TermValue::Array(items) => {
                f.write_str("[")?;
                write_list(f, items)?;
                f.write_str("]")
            }
            TermValue::Set(items) if items.is_empty() => f.write_str("set()"),
            TermValue::Set(items) => {
                f.write_str("{")?;
                write_list(f, items)?;
                f.write_str("}")
            }
            TermValue::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            TermValue::Call(call) => write!(f, "{call}"),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((operator, operands)) = self.0.split_first() else {
            return Ok(());
        };
        write!(f, "{operator}(")?;
        write_list(f, operands)?;
        f.write_str(")")
    }
}

pub(super) fn write_list(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{term}")?;
    }
    Ok(())
}
