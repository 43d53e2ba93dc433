//! Operator names of the policy language that filters can express.

/// Unification, `a = b`
pub const EQ: &str = "eq";

/// Comparison, `a == b`
pub const EQUAL: &str = "equal";

pub const NEQ: &str = "neq";
pub const LT: &str = "lt";
pub const LTE: &str = "lte";
pub const GT: &str = "gt";
pub const GTE: &str = "gte";

pub const STARTS_WITH: &str = "startswith";
pub const ENDS_WITH: &str = "endswith";
pub const CONTAINS: &str = "contains";

/// Set membership, `a in b`
pub const MEMBER: &str = "internal.member_2";

/// Keyed membership, `k, v in b`. Never expressible as a filter.
pub const MEMBER_WITH_KEY: &str = "internal.member_3";

/// Returns `true` for equality, inequality and ordering operators.
pub fn is_comparison(name: &str) -> bool {
    matches!(name, EQ | EQUAL | NEQ | LT | LTE | GT | GTE)
}

/// Returns `true` for operators whose first operand must be the unknown
/// field: the pattern operators and set membership.
pub fn is_directional(name: &str) -> bool {
    matches!(name, STARTS_WITH | ENDS_WITH | CONTAINS | MEMBER)
}

/// Replaces internal operator names with what a policy author wrote.
pub fn humanize(name: &str) -> &str {
    match name {
        MEMBER => "in",
        name => name,
    }
}
