use indexmap::IndexMap;
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::Number;

/// A literal in the constraint tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null, only as an element of a list or object
    Null,

    Bool(bool),

    Number(Number),

    String(String),

    /// Arrays and sets alike
    List(Vec<Value>),

    /// Object with keys in source order
    Object(IndexMap<String, Value>),
}

/// The right-hand side of a field node.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A literal value
    Literal(Value),

    /// Another field of the unknown document
    FieldRef(String),

    /// Explicit null: `eq` tests for absence, `ne` for presence.
    Null,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl FieldValue {
    /// Wraps a literal; a null literal becomes the explicit null marker.
    pub fn literal(value: impl Into<Value>) -> FieldValue {
        match value.into() {
            Value::Null => FieldValue::Null,
            value => FieldValue::Literal(value),
        }
    }

    pub fn field(name: impl Into<String>) -> FieldValue {
        FieldValue::FieldRef(name.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Number(value) => value.serialize(serializer),
            Value::String(value) => serializer.serialize_str(value),
            Value::List(items) => serializer.collect_seq(items),
            Value::Object(entries) => serializer.collect_map(entries),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Literal(value) => value.serialize(serializer),
            FieldValue::FieldRef(field) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("field", field)?;
                map.end()
            }
            FieldValue::Null => serializer.serialize_unit(),
        }
    }
}
