use super::Node;

use serde::{ser::SerializeMap, Serialize, Serializer};

/// A translated condition, or the sentinel for "no condition at all".
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// The condition holds unconditionally.
    Always,

    Node(Node),
}

impl Filter {
    /// Conjunction of `nodes`: no nodes hold unconditionally, a single node
    /// stands for itself.
    pub fn and_from_vec(nodes: Vec<Node>) -> Filter {
        Filter::from_vec(nodes, Node::and)
    }

    /// Disjunction of `nodes`, collapsing the same way as
    /// [`and_from_vec`](Filter::and_from_vec).
    pub fn or_from_vec(nodes: Vec<Node>) -> Filter {
        Filter::from_vec(nodes, Node::or)
    }

    fn from_vec(mut nodes: Vec<Node>, combine: fn(Vec<Node>) -> Option<Node>) -> Filter {
        if nodes.len() == 1 {
            return nodes.pop().map_or(Filter::Always, Filter::Node);
        }
        combine(nodes).map_or(Filter::Always, Filter::Node)
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Filter::Always)
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Filter::Always => None,
            Filter::Node(node) => Some(node),
        }
    }

    /// Returns the UCAST JSON document; `Always` is the empty object.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<Node> for Filter {
    fn from(value: Node) -> Self {
        Filter::Node(value)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::Always => serializer.serialize_map(Some(0))?.end(),
            Filter::Node(node) => node.serialize(serializer),
        }
    }
}
