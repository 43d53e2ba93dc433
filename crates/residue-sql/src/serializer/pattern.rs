use super::{value::Scalar, Flavor, Formatter, Params, ToSql};

use residue_core::{
    ucast::{FieldOp, FieldValue, Value},
    Error, Result,
};

/// A `startswith`, `endswith` or `contains` comparison.
pub(super) struct Pattern<'a> {
    pub(super) op: FieldOp,
    pub(super) field: &'a str,
    pub(super) value: &'a FieldValue,
}

impl ToSql for Pattern<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let FieldValue::Literal(value @ Value::String(text)) = self.value else {
            return Err(Error::invalid_filter(format!(
                "\"{}\" pattern requires a string argument",
                self.op
            )));
        };

        if f.serializer.flavor == Flavor::SqliteInternal {
            let function = match self.op {
                FieldOp::StartsWith => "internal_startswith(",
                FieldOp::EndsWith => "internal_endswith(",
                _ => "internal_contains(",
            };
            fmt!(f, function self.field ", " Scalar(value) ")");
            return Ok(());
        }

        let escaped = escape(text);
        let pattern = match self.op {
            FieldOp::StartsWith => format!("{escaped}%"),
            FieldOp::EndsWith => format!("%{escaped}"),
            _ => format!("%{escaped}%"),
        };
        fmt!(f, self.field " LIKE " Scalar(&Value::String(pattern)));
        Ok(())
    }
}

/// Escapes the `LIKE` wildcards and the escape character itself.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '_' | '%') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
