//! Node representation for nested, untyped documents.
//!
//! Every value nodequill works with is a [`Node`]: a scalar (null, boolean,
//! number, string), an ordered sequence, or a string-keyed mapping that keeps
//! its insertion order for iteration.
//!
//! # Example
//!
//! ```
//! use nodequill::document::node::{Node, Number};
//! use indexmap::IndexMap;
//!
//! let mut user = IndexMap::new();
//! user.insert("name".to_string(), Node::from("Alice"));
//! user.insert("age".to_string(), Node::Number(Number::Integer(30)));
//!
//! let root = Node::Mapping(user);
//! assert!(root.is_container());
//! assert_eq!(root.get("name").and_then(Node::as_str), Some("Alice"));
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// A number as it appeared in the source document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

/// A value in a nested document.
///
/// Sequences are addressed by canonical decimal indices (`"0"`, `"12"`),
/// mappings by their string keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    /// Ordered list of nodes
    Sequence(Vec<Node>),
    /// String-keyed nodes in insertion order
    Mapping(IndexMap<String, Node>),
}

impl Node {
    /// Returns true for sequences and mappings.
    ///
    /// ```
    /// use nodequill::Node;
    ///
    /// assert!(Node::Sequence(vec![]).is_container());
    /// assert!(!Node::from(42).is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Sequence(_) | Node::Mapping(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Number of children of a container; scalars have none.
    pub fn len(&self) -> usize {
        match self {
            Node::Sequence(items) => items.len(),
            Node::Mapping(map) => map.len(),
            _ => 0,
        }
    }

    /// Returns true when the node has no children (always true for scalars).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a direct child by key.
    ///
    /// Mappings match the key exactly. Sequences accept a canonical decimal
    /// index (`"0"`, `"7"`, but not `"07"` or `"+7"`). Scalars have no
    /// children.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(map) => map.get(key),
            Node::Sequence(items) => parse_index(key).and_then(|idx| items.get(idx)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`Node::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self {
            Node::Mapping(map) => map.get_mut(key),
            Node::Sequence(items) => parse_index(key).and_then(move |idx| items.get_mut(idx)),
            _ => None,
        }
    }

    /// Iterates over the direct children in their natural order.
    pub fn children(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        match self {
            Node::Sequence(items) => Box::new(items.iter()),
            Node::Mapping(map) => Box::new(map.values()),
            _ => Box::new(std::iter::empty()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the node's shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Boolean(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

/// Parses a canonical sequence index.
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

impl fmt::Display for Node {
    /// Scalars render bare; containers render as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Boolean(b) => write!(f, "{}", b),
            Node::Number(n) => write!(f, "{}", n),
            Node::String(s) => write!(f, "{}", s),
            Node::Sequence(_) | Node::Mapping(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Boolean(b) => serializer.serialize_bool(*b),
            Node::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Node::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Node::String(s) => serializer.serialize_str(s),
            Node::Sequence(items) => serializer.collect_seq(items),
            Node::Mapping(map) => serializer.collect_map(map),
        }
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Boolean(b)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Number(Number::Integer(i))
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Number(Number::Integer(i64::from(i)))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Number(Number::Float(f))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<IndexMap<String, Node>> for Node {
    fn from(map: IndexMap<String, Node>) -> Self {
        Node::Mapping(map)
    }
}
