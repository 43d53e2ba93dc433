//! Static checks of partial-evaluation results against backend capabilities.
//!
//! Every expression of every body goes through two checks: the statement
//! shape (`with`, `not`, `every`, bare references) and the builtin call
//! (operator, operands, features). Each check reports at most one diagnostic
//! per expression, and checking always continues with the next expression so
//! that a single pass surfaces every problem.

use crate::mappings::Shorts;

use residue_core::{
    ast::{
        Body, Expr, ExprTerms, Module, PartialQueries, Ref, Term, TermValue, DATA_ROOT,
        PARTIAL_NAMESPACE,
    },
    constraint::builtin,
    ConstraintSet, Diagnostic, Feature, Results,
};

/// Checks `pq` against `constraints`, permitting the two-segment input
/// references named in `shorts`.
pub fn check(pq: &PartialQueries, constraints: &ConstraintSet, shorts: &Shorts) -> Results {
    let mut checker = Checker::new(constraints, shorts);
    for body in &pq.queries {
        checker.query(body, &pq.support);
    }

    let results = checker.into_results();
    tracing::debug!(
        queries = pq.queries.len(),
        diagnostics = results.len(),
        "checked partial queries"
    );
    results
}

pub struct Checker<'a> {
    constraints: &'a ConstraintSet,
    shorts: &'a Shorts,
    results: Results,
}

impl<'a> Checker<'a> {
    pub fn new(constraints: &'a ConstraintSet, shorts: &'a Shorts) -> Checker<'a> {
        Checker {
            constraints,
            shorts,
            results: Results::new(),
        }
    }

    /// Checks every expression of a body.
    pub fn query(&mut self, body: &Body, support: &[Module]) {
        for expr in body {
            let checks = [self.check_call(expr, support), self.check_builtin(expr)];
            for diagnostic in checks.into_iter().filter_map(Result::err) {
                self.results.push(diagnostic);
            }
        }
    }

    pub fn into_results(self) -> Results {
        self.results
    }

    fn check_call(&self, expr: &Expr, support: &[Module]) -> Result<(), Diagnostic> {
        let location = expr.location.clone();

        if !expr.with.is_empty() {
            return Err(Diagnostic::new("\"with\" not permitted").at(location));
        }

        if expr.negated {
            if !expr.is_call() {
                return Err(Diagnostic::new("\"not\" not permitted").at(location));
            }
            return self
                .constraints
                .assert_feature(Feature::Not)
                .map_err(|err| {
                    Diagnostic::new(format!("\"not\" not permitted: {err}")).at(location)
                });
        }

        match &expr.terms {
            ExprTerms::Call(_) => Ok(()),
            ExprTerms::Every(_) => Err(Diagnostic::new("\"every\" not permitted").at(location)),
            ExprTerms::Term(Term {
                value: TermValue::Ref(reference),
                ..
            }) if reference.is_data() => Err(data_ref(expr, reference, support)),
            ExprTerms::Term(_) => Err(Diagnostic::new(format!("invalid statement \"{expr}\""))
                .at(location)
                .with_details(format!("try `{expr} != false`"))),
        }
    }

    fn check_builtin(&self, expr: &Expr) -> Result<(), Diagnostic> {
        // Already reported by the statement check.
        if !expr.with.is_empty() {
            return Ok(());
        }

        let Some(op) = expr.operator() else {
            return Ok(());
        };
        let location = op.location.clone().or_else(|| expr.location.clone());

        let Some(reference) = op.as_reference() else {
            return Err(Diagnostic::new(format!("invalid builtin `{op}`")).at(location));
        };
        let name = reference.to_string();

        let two_refs_ok = builtin::is_comparison(&name);
        let unknown_must_be_first = builtin::is_directional(&name);

        if name == builtin::MEMBER_WITH_KEY {
            return Err(Diagnostic::new("invalid use of \"... in ...\"").at(location));
        }

        if !two_refs_ok && !unknown_must_be_first {
            if reference.is_data() {
                return Err(
                    Diagnostic::new(format!("invalid data reference \"{expr}\""))
                        .at(expr.location.clone())
                        .with_details(format!("has function \"{reference}(...)\" an `else`?")),
                );
            }
            return Err(Diagnostic::new(format!("invalid builtin `{op}`")).at(location));
        }

        self.constraints.assert_builtin(&name).map_err(|err| {
            Diagnostic::new(format!(
                "invalid builtin `{}`: {err}",
                builtin::humanize(&name)
            ))
            .at(location.clone())
        })?;

        // Every permitted builtin takes two operands.
        for i in 0..2 {
            self.check_operand(op, expr.operand(i))?;
        }
        let operands = &expr.operands()[..2];

        let refs = operands.iter().filter(|operand| operand.is_ref()).count();
        if refs == 2 {
            self.constraints
                .assert_feature(Feature::FieldRef)
                .map_err(|err| {
                    Diagnostic::new(format!("reference to field: {err}")).at(location.clone())
                })?;
        }

        if is_existence_check(&name, operands) {
            return self
                .constraints
                .assert_feature(Feature::ExistenceRef)
                .map_err(|err| {
                    Diagnostic::new(format!("existence of field: {err}")).at(location)
                });
        }

        if unknown_must_be_first {
            if !operands[0].is_ref() {
                return Err(Diagnostic::new(format!("rhs of {op} must be known")).at(location));
            }
            return Ok(());
        }

        let scalar = operands.iter().any(Term::is_scalar);
        if !scalar && !(two_refs_ok && refs == 2) {
            return Err(Diagnostic::new("both rhs and lhs non-scalar/non-ground").at(location));
        }
        Ok(())
    }

    fn check_operand(&self, op: &Term, operand: Option<&Term>) -> Result<(), Diagnostic> {
        let Some(operand) = operand else {
            return Err(Diagnostic::new(format!("{op}: missing operand")).at(op.location.clone()));
        };

        match &operand.value {
            TermValue::Call(call) => {
                let location = op
                    .location
                    .clone()
                    .or_else(|| call.0.first().and_then(|t| t.location.clone()));
                Err(Diagnostic::new(format!("{op}: nested call operand: {call}")).at(location))
            }
            TermValue::Ref(reference) if self.is_field(reference) => Ok(()),
            TermValue::Ref(reference) => {
                let location = op.location.clone().or_else(|| operand.location.clone());
                Err(Diagnostic::new(format!("{op}: invalid ref operand: {reference}")).at(location))
            }
            _ => Ok(()),
        }
    }

    /// `input.table.column`, or `input.short` for a registered short alias.
    /// Every key must be a string.
    fn is_field(&self, reference: &Ref) -> bool {
        if !reference.is_input() {
            return false;
        }
        match reference.string_keys().as_deref() {
            Some([_table, _column]) => true,
            Some([short]) => self.shorts.contains(*short),
            _ => false,
        }
    }
}

/// An equality between an input reference and a bare variable, in either
/// order, tests whether the field is present.
fn is_existence_check(name: &str, operands: &[Term]) -> bool {
    if name != builtin::EQ && name != builtin::EQUAL {
        return false;
    }
    match operands {
        [lhs, rhs] => {
            (lhs.is_var() && is_input_ref(rhs)) || (rhs.is_var() && is_input_ref(lhs))
        }
        _ => false,
    }
}

fn is_input_ref(term: &Term) -> bool {
    term.as_reference().is_some_and(Ref::is_input)
}

/// Diagnoses a bare reference into the data document.
///
/// References to rules generated by partial evaluation are explained by
/// looking the rule up in the support modules: a default rule, or a rule
/// defined more than once, cannot be reduced to a single condition.
fn data_ref(expr: &Expr, reference: &Ref, support: &[Module]) -> Diagnostic {
    let partial = Ref::new(vec![Term::var(DATA_ROOT), Term::string(PARTIAL_NAMESPACE)]);

    if reference.has_prefix(&partial) {
        let location = reference.last().and_then(|t| t.location.clone());
        return match support_hint(reference, support) {
            Some(hint) => Diagnostic::new(hint).at(location),
            None => Diagnostic::new(format!("invalid data reference \"{expr}\"")).at(location),
        };
    }

    Diagnostic::new(format!("invalid data reference \"{expr}\""))
        .at(expr.location.clone())
        .with_details(format!("has rule \"{reference}\" an `else`?"))
}

fn support_hint(reference: &Ref, support: &[Module]) -> Option<String> {
    for module in support {
        let mut count = 0;
        for rule in &module.rules {
            if !rule.path.same_path(reference) {
                continue;
            }
            count += 1;

            let path = rule.path.rebase(DATA_ROOT, 1);
            if rule.default {
                return Some(format!("use of default rule in {path}"));
            }
            if count > 1 {
                return Some(format!("use of multi-value rule in {path}"));
            }
        }
    }
    None
}
