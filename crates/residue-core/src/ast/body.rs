use super::Expr;

use std::{fmt, ops};

/// A conjunction of expressions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body(Vec<Expr>);

impl Body {
    pub fn new(exprs: Vec<Expr>) -> Body {
        Body(exprs)
    }
}

impl From<Vec<Expr>> for Body {
    fn from(value: Vec<Expr>) -> Self {
        Body(value)
    }
}

impl FromIterator<Expr> for Body {
    fn from_iter<T: IntoIterator<Item = Expr>>(iter: T) -> Self {
        Body(iter.into_iter().collect())
    }
}

impl ops::Deref for Body {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Body {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, expr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{expr}")?;
        }
        Ok(())
    }
}
