use super::{CompoundOp, FieldOp, FieldValue};

use serde::Serialize;

/// A node of the constraint tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Field(FieldNode),
    Compound(CompoundNode),
}

/// Compares one field of the unknown document against a value.
///
/// ```text
/// {op: gt, field: "users.age", value: 18}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldNode {
    #[serde(rename = "operator")]
    pub op: FieldOp,

    /// Dotted field path, e.g. `table.column`
    pub field: String,

    pub value: FieldValue,
}

/// Combines child nodes. Always has at least one child; `not` has exactly one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundNode {
    #[serde(rename = "operator")]
    op: CompoundOp,

    #[serde(rename = "value")]
    children: Vec<Node>,
}

impl Node {
    pub fn field(op: FieldOp, field: impl Into<String>, value: FieldValue) -> Node {
        Node::Field(FieldNode {
            op,
            field: field.into(),
            value,
        })
    }

    /// Creates a conjunction. Returns `None` when `children` is empty, since an
    /// empty conjunction is not a node.
    pub fn and(children: Vec<Node>) -> Option<Node> {
        Node::compound(CompoundOp::And, children)
    }

    /// Creates a disjunction. Returns `None` when `children` is empty.
    pub fn or(children: Vec<Node>) -> Option<Node> {
        Node::compound(CompoundOp::Or, children)
    }

    /// Negates a node.
    pub fn not(child: Node) -> Node {
        Node::Compound(CompoundNode {
            op: CompoundOp::Not,
            children: vec![child],
        })
    }

    fn compound(op: CompoundOp, children: Vec<Node>) -> Option<Node> {
        if children.is_empty() {
            return None;
        }
        Some(Node::Compound(CompoundNode { op, children }))
    }

    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            Node::Field(node) => Some(node),
            Node::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundNode> {
        match self {
            Node::Compound(node) => Some(node),
            Node::Field(_) => None,
        }
    }
}

impl CompoundNode {
    pub fn op(&self) -> CompoundOp {
        self.op
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl From<FieldNode> for Node {
    fn from(value: FieldNode) -> Self {
        Node::Field(value)
    }
}
