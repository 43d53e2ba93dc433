use serde::Serialize;
use std::fmt;

/// Operator of a field node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    StartsWith,
    EndsWith,
    Contains,
}

/// Operator of a compound node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundOp {
    And,
    Or,
    Not,
}

impl FieldOp {
    /// Maps a policy-language operator name to a field operator.
    pub fn from_builtin(name: &str) -> Option<FieldOp> {
        use crate::constraint::builtin;

        Some(match name {
            builtin::EQ | builtin::EQUAL => FieldOp::Eq,
            builtin::NEQ => FieldOp::Ne,
            builtin::LT => FieldOp::Lt,
            builtin::LTE => FieldOp::Lte,
            builtin::GT => FieldOp::Gt,
            builtin::GTE => FieldOp::Gte,
            builtin::MEMBER => FieldOp::In,
            builtin::STARTS_WITH => FieldOp::StartsWith,
            builtin::ENDS_WITH => FieldOp::EndsWith,
            builtin::CONTAINS => FieldOp::Contains,
            _ => return None,
        })
    }

    /// Returns the operator that keeps the meaning when the operands swap
    /// sides: `5 < f` is `f > 5`. Equality and inequality are symmetric.
    /// Pattern and membership operators have no mirror.
    pub fn flip(self) -> Option<FieldOp> {
        use FieldOp::*;

        match self {
            Eq | Ne => Some(self),
            Lt => Some(Gt),
            Gt => Some(Lt),
            Lte => Some(Gte),
            Gte => Some(Lte),
            In | StartsWith | EndsWith | Contains => None,
        }
    }

    pub fn is_invertible(self) -> bool {
        self.flip().is_some()
    }

    pub fn as_str(self) -> &'static str {
        use FieldOp::*;

        match self {
            Eq => "eq",
            Ne => "ne",
            Lt => "lt",
            Lte => "lte",
            Gt => "gt",
            Gte => "gte",
            In => "in",
            StartsWith => "startswith",
            EndsWith => "endswith",
            Contains => "contains",
        }
    }
}

impl fmt::Display for FieldOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CompoundOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CompoundOp::And => "and",
            CompoundOp::Or => "or",
            CompoundOp::Not => "not",
        }
    }
}

impl fmt::Display for CompoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
