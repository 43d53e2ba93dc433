use super::{term::write_list, Body, Location, Ref, Term};

use std::fmt;

/// One conjunct of a query body.
///
/// # Examples
///
/// ```text
/// gt(input.fruits.price, 10)          // call
/// not equal(input.fruits.name, "a")   // negated call
/// data.partial.__not1_0__             // bare term
/// every x in input.xs { neq(x, 1) }   // every block
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub terms: ExprTerms,

    /// True when the expression is prefixed by `not`.
    pub negated: bool,

    /// `with` modifiers attached to the expression.
    pub with: Vec<With>,

    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprTerms {
    /// Operator reference followed by operands
    Call(Vec<Term>),

    /// A single term evaluated for truthiness
    Term(Term),

    /// An `every` block
    Every(Every),
}

/// A `with <target> as <value>` modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub target: Term,
    pub value: Term,
}

/// An `every key, value in domain { body }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Every {
    pub key: Option<Term>,
    pub value: Term,
    pub domain: Term,
    pub body: Body,
}

impl Expr {
    pub fn new(terms: ExprTerms) -> Expr {
        Expr {
            terms,
            negated: false,
            with: vec![],
            location: None,
        }
    }

    /// Creates a call expression, e.g. `Expr::call("gt", [lhs, rhs])`.
    pub fn call(operator: &str, operands: impl IntoIterator<Item = Term>) -> Expr {
        let mut terms = vec![Term::reference(Ref::parse_dotted(operator))];
        terms.extend(operands);
        Expr::new(ExprTerms::Call(terms))
    }

    pub fn term(term: impl Into<Term>) -> Expr {
        Expr::new(ExprTerms::Term(term.into()))
    }

    pub fn every(every: Every) -> Expr {
        Expr::new(ExprTerms::Every(every))
    }

    /// Prefixes the expression with `not`.
    pub fn negate(mut self) -> Expr {
        self.negated = true;
        self
    }

    /// Attaches a `with target as value` modifier.
    pub fn with_modifier(mut self, target: impl Into<Term>, value: impl Into<Term>) -> Expr {
        self.with.push(With {
            target: target.into(),
            value: value.into(),
        });
        self
    }

    /// Attaches a source position to the expression.
    pub fn at(mut self, location: Location) -> Expr {
        self.location = Some(location);
        self
    }

    pub fn is_call(&self) -> bool {
        matches!(self.terms, ExprTerms::Call(_))
    }

    pub fn is_every(&self) -> bool {
        matches!(self.terms, ExprTerms::Every(_))
    }

    /// Returns the operator term of a call expression.
    pub fn operator(&self) -> Option<&Term> {
        match &self.terms {
            ExprTerms::Call(terms) => terms.first(),
            _ => None,
        }
    }

    /// Returns the operator of a call expression as a reference.
    pub fn operator_ref(&self) -> Option<&Ref> {
        self.operator().and_then(Term::as_reference)
    }

    /// Returns the operator name of a call expression, e.g. `internal.member_2`.
    pub fn operator_name(&self) -> Option<String> {
        self.operator_ref().map(ToString::to_string)
    }

    /// Returns the operands of a call expression.
    pub fn operands(&self) -> &[Term] {
        match &self.terms {
            ExprTerms::Call(terms) if !terms.is_empty() => &terms[1..],
            _ => &[],
        }
    }

    /// Returns the `i`-th operand of a call expression.
    pub fn operand(&self, i: usize) -> Option<&Term> {
        self.operands().get(i)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("not ")?;
        }

        match &self.terms {
            ExprTerms::Call(terms) => {
                if let Some((operator, operands)) = terms.split_first() {
                    write!(f, "{operator}(")?;
                    write_list(f, operands)?;
                    f.write_str(")")?;
                }
            }
            ExprTerms::Term(term) => write!(f, "{term}")?,
            ExprTerms::Every(every) => write!(f, "{every}")?,
        }

        for with in &self.with {
            write!(f, " with {} as {}", with.target, with.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Every {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("every ")?;
        if let Some(key) = &self.key {
            write!(f, "{key}, ")?;
        }
        write!(f, "{} in {} {{ {} }}", self.value, self.domain, self.body)
    }
}
