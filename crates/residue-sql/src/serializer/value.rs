use super::{Flavor, Formatter, Params, ToSql};

use residue_core::{
    ucast::{FieldValue, Value},
    Error, Result,
};

/// A literal in scalar position.
pub(super) struct Scalar<'a>(pub(super) &'a Value);

impl ToSql for Scalar<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Value::Null => fmt!(f, "NULL"),
            Value::List(_) | Value::Object(_) => {
                return Err(Error::invalid_filter(
                    "composite value used where a scalar is expected",
                ))
            }
            value => match f.params.push(value) {
                Some(placeholder) => fmt!(f, placeholder),
                None => inline(value, f),
            },
        }
        Ok(())
    }
}

impl ToSql for &FieldValue {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            FieldValue::Literal(value) => fmt!(f, Scalar(value)),
            // Raw column name
            FieldValue::FieldRef(field) => fmt!(f, field),
            FieldValue::Null => fmt!(f, "NULL"),
        }
        Ok(())
    }
}

fn inline<P: Params>(value: &Value, f: &mut Formatter<'_, P>) {
    let flavor = f.serializer.flavor;

    match value {
        Value::Bool(value) => f.dst.push_str(match (flavor, value) {
            (Flavor::Sqlserver, true) => "1",
            (Flavor::Sqlserver, false) => "0",
            (_, true) => "TRUE",
            (_, false) => "FALSE",
        }),
        Value::Number(value) => f.dst.push_str(&value.to_string()),
        Value::String(value) => quote(value, f.serializer.is_mysql(), f.dst),
        Value::Null | Value::List(_) | Value::Object(_) => f.dst.push_str("NULL"),
    }
}

/// Writes a single-quoted string literal. MySQL reads backslash escapes in
/// string literals; the other flavors double the quote.
fn quote(value: &str, backslash_escapes: bool, dst: &mut String) {
    dst.push('\'');
    for c in value.chars() {
        match c {
            '\'' if backslash_escapes => dst.push_str("\\'"),
            '\\' if backslash_escapes => dst.push_str("\\\\"),
            '\'' => dst.push_str("''"),
            c => dst.push(c),
        }
    }
    dst.push('\'');
}
