//! Partial-evaluation bodies to constraint trees.
//!
//! Bodies are alternatives and become an `or`; the expressions of a body are
//! conjuncts and become an `and`. The translator refuses anything it cannot
//! represent exactly rather than returning a partial tree. It does not explain
//! refusals to the user, that is the checker's job.

use crate::mappings::Mappings;

use residue_core::{
    ast::{Body, Expr, ExprTerms, Ref, Term, TermValue},
    constraint::builtin,
    err,
    ucast::{FieldOp, FieldValue, Filter, Node, Value},
    Constraint, Error, Feature, Result,
};

use indexmap::IndexMap;

/// Translates partial-evaluation bodies for one target.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    mappings: &'a Mappings,

    /// When set, features the backend lacks are refused.
    constraint: Option<&'a Constraint>,
}

impl<'a> Translator<'a> {
    pub fn new(mappings: &'a Mappings) -> Translator<'a> {
        Translator {
            mappings,
            constraint: None,
        }
    }

    pub fn with_constraint(mut self, constraint: &'a Constraint) -> Translator<'a> {
        self.constraint = Some(constraint);
        self
    }

    /// Translates a disjunction of bodies.
    ///
    /// No bodies, or any body that holds unconditionally, yields
    /// [`Filter::Always`]. Any body failing to translate fails the whole
    /// disjunction.
    pub fn bodies(&self, bodies: &[Body]) -> Result<Filter> {
        let mut nodes = Vec::with_capacity(bodies.len());
        let mut always = bodies.is_empty();

        for (i, body) in bodies.iter().enumerate() {
            match self.body(body).map_err(|e| e.context(err!("body {i}")))? {
                Filter::Always => always = true,
                Filter::Node(node) => nodes.push(node),
            }
        }

        if always {
            return Ok(Filter::Always);
        }
        Ok(Filter::or_from_vec(nodes))
    }

    /// Translates a conjunction of expressions. An empty body holds
    /// unconditionally.
    pub fn body(&self, body: &Body) -> Result<Filter> {
        let nodes = body
            .iter()
            .map(|expr| self.expr(expr))
            .collect::<Result<Vec<_>>>()?;
        Ok(Filter::and_from_vec(nodes))
    }

    /// Translates a single expression.
    pub fn expr(&self, expr: &Expr) -> Result<Node> {
        if !expr.with.is_empty() {
            return Err(refuse(expr, "\"with\" modifiers are not translatable"));
        }

        let ExprTerms::Call(_) = &expr.terms else {
            return Err(refuse(expr, "not a call"));
        };

        let Some(name) = expr.operator_name() else {
            return Err(refuse(expr, "operator is not a reference"));
        };

        let Some(mut op) = FieldOp::from_builtin(&name) else {
            return Err(refuse(
                expr,
                format!("unsupported operator `{}`", builtin::humanize(&name)),
            ));
        };

        let [lhs, rhs] = expr.operands() else {
            return Err(refuse(expr, "expected two operands"));
        };

        // The unknown is the input reference; with both sides input references
        // the right one is a field reference value.
        let (unknown, known) = match (input_ref(lhs), input_ref(rhs)) {
            (Some(unknown), _) => (unknown, rhs),
            (None, Some(unknown)) => {
                op = op.flip().ok_or_else(|| {
                    refuse(expr, format!("`{name}` requires the unknown operand first"))
                })?;
                (unknown, lhs)
            }
            (None, None) => return Err(refuse(expr, "no operand refers to the input")),
        };

        let field = self.field_name(expr, unknown)?;

        let (op, value) = match &known.value {
            TermValue::Ref(reference) => {
                self.require(expr, Feature::FieldRef)?;
                if !reference.is_input() {
                    return Err(refuse(expr, format!("invalid reference operand {reference}")));
                }
                (op, FieldValue::FieldRef(self.field_name(expr, reference)?))
            }
            TermValue::Var(_) if op == FieldOp::Eq => {
                self.require(expr, Feature::ExistenceRef)?;
                (FieldOp::Ne, FieldValue::Null)
            }
            TermValue::Var(name) => {
                return Err(refuse(expr, format!("unbound variable {name}")));
            }
            TermValue::Call(_) => return Err(refuse(expr, "operand is a nested call")),
            _ => (
                op,
                FieldValue::literal(to_value(known).map_err(|reason| refuse(expr, reason))?),
            ),
        };

        let node = Node::field(op, field, value);
        if expr.negated {
            return Ok(Node::not(node));
        }
        Ok(node)
    }

    fn field_name(&self, expr: &Expr, reference: &Ref) -> Result<String> {
        match reference.string_keys() {
            Some(keys) if !keys.is_empty() => Ok(self.mappings.field_name(&keys)),
            _ => Err(refuse(
                expr,
                format!("reference {reference} is not a field path"),
            )),
        }
    }

    fn require(&self, expr: &Expr, feature: Feature) -> Result<()> {
        let Some(constraint) = self.constraint else {
            return Ok(());
        };
        constraint
            .assert_feature(feature)
            .map_err(|unsupported| refuse(expr, unsupported.to_string()))
    }
}

fn input_ref(term: &Term) -> Option<&Ref> {
    term.as_reference().filter(|reference| reference.is_input())
}

/// Converts a ground term to a portable value.
fn to_value(term: &Term) -> std::result::Result<Value, String> {
    Ok(match &term.value {
        TermValue::Null => Value::Null,
        TermValue::Bool(value) => Value::Bool(*value),
        TermValue::Number(value) => Value::Number(value.clone()),
        TermValue::String(value) => Value::String(value.clone()),
        TermValue::Array(items) | TermValue::Set(items) => {
            Value::List(items.iter().map(to_value).collect::<std::result::Result<_, _>>()?)
        }
        TermValue::Object(entries) => {
            let mut object = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                let Some(key) = key.as_str() else {
                    return Err(format!("object key {key} is not a string"));
                };
                object.insert(key.to_string(), to_value(value)?);
            }
            Value::Object(object)
        }
        TermValue::Var(_) | TermValue::Ref(_) | TermValue::Call(_) => {
            return Err(format!("operand {term} is not ground"));
        }
    })
}

fn refuse(expr: &Expr, reason: impl Into<String>) -> Error {
    let reason = reason.into();
    tracing::trace!(%expr, %reason, "refusing to translate expression");
    Error::untranslatable(reason)
}
