use super::{pattern::Pattern, value::Scalar, Comma, Delimited, Formatter, Params, ToSql};

use residue_core::{
    ucast::{CompoundNode, CompoundOp, FieldNode, FieldOp, FieldValue, Node, Value},
    Error, Result,
};

impl ToSql for &Node {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Node::Field(node) => node.to_sql(f),
            Node::Compound(node) => node.to_sql(f),
        }
    }
}

impl ToSql for &CompoundNode {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match (self.op(), self.children()) {
            (CompoundOp::And, children) => fmt!(f, "(" Delimited(children, " AND ") ")"),
            (CompoundOp::Or, children) => fmt!(f, "(" Delimited(children, " OR ") ")"),
            (CompoundOp::Not, [child]) => fmt!(f, "NOT " child),
            (CompoundOp::Not, _) => {
                return Err(Error::invalid_filter(
                    "compound expression \"not\" requires exactly one value",
                ))
            }
        }
        Ok(())
    }
}

impl ToSql for &FieldNode {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let field = self.field.as_str();

        match (self.op, &self.value) {
            (FieldOp::Eq, FieldValue::Null) => fmt!(f, field " IS NULL"),
            (FieldOp::Ne, FieldValue::Null) => fmt!(f, field " IS NOT NULL"),
            (op, FieldValue::Null) => {
                return Err(Error::invalid_filter(format!(
                    "null value can only be used with \"eq\" or \"ne\", not \"{op}\""
                )))
            }
            (FieldOp::In, FieldValue::Literal(Value::List(items))) if items.is_empty() => {
                fmt!(f, "0 = 1")
            }
            (FieldOp::In, FieldValue::Literal(Value::List(items))) => {
                fmt!(f, field " IN (" Comma(items.iter().map(Scalar)) ")")
            }
            (FieldOp::In, _) => {
                return Err(Error::invalid_filter(
                    "field operator \"in\" requires a list",
                ))
            }
            (op @ (FieldOp::StartsWith | FieldOp::EndsWith | FieldOp::Contains), value) => {
                fmt!(f, Pattern { op, field, value })
            }
            (op, value) => fmt!(f, field " " binary_op(op) " " value),
        }
        Ok(())
    }
}

fn binary_op(op: FieldOp) -> &'static str {
    match op {
        FieldOp::Eq => "=",
        FieldOp::Ne => "<>",
        FieldOp::Gt => ">",
        FieldOp::Gte => ">=",
        FieldOp::Lt => "<",
        FieldOp::Lte => "<=",
        FieldOp::In | FieldOp::StartsWith | FieldOp::EndsWith | FieldOp::Contains => {
            unreachable!("not a binary operator: {op}")
        }
    }
}
