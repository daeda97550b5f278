//! Field access for sortable records.
//!
//! The sorter never inspects record types directly. It starts from each
//! record and calls [`Field::project`] once per key segment; the two
//! [`Field`] variants (a nested record or a node) each know how to step one
//! level down.
//!
//! Plain structs become sortable by implementing [`Record`]:
//!
//! ```
//! use nodequill::sort::{Field, Record};
//!
//! struct Team {
//!     hierarchy: i64,
//! }
//!
//! struct Player {
//!     name: String,
//!     team: Team,
//! }
//!
//! impl Record for Team {
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "hierarchy" => Some(Field::value(self.hierarchy)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Record for Player {
//!     fn field(&self, name: &str) -> Option<Field<'_>> {
//!         match name {
//!             "name" => Some(Field::value(self.name.as_str())),
//!             "team" => Some(Field::Record(&self.team)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use crate::document::node::Node;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::HashMap;

/// Something with named fields that the column sorter can read.
pub trait Record {
    /// Returns the field called `name`, or `None` if the record has no such
    /// field.
    fn field(&self, name: &str) -> Option<Field<'_>>;
}

/// The value of one record field.
pub enum Field<'a> {
    /// A nested record, projected further through [`Record::field`]
    Record(&'a dyn Record),
    /// A node, borrowed from the record or built on the fly
    Node(Cow<'a, Node>),
}

impl<'a> Field<'a> {
    /// Wraps an owned value, such as a struct's scalar field.
    pub fn value(value: impl Into<Node>) -> Self {
        Field::Node(Cow::Owned(value.into()))
    }

    /// Steps one level down to the field or key called `name`.
    pub fn project(&self, name: &str) -> Option<Field<'a>> {
        match self {
            Field::Record(record) => {
                let record: &'a dyn Record = *record;
                record.field(name)
            }
            Field::Node(Cow::Borrowed(node)) => {
                let node: &'a Node = *node;
                node.get(name).map(Field::from)
            }
            Field::Node(Cow::Owned(node)) => node.get(name).cloned().map(Field::value),
        }
    }

    /// Returns the node at this field, or `None` for a nested record.
    pub fn into_node(self) -> Option<Cow<'a, Node>> {
        match self {
            Field::Record(_) => None,
            Field::Node(node) => Some(node),
        }
    }
}

impl<'a> From<&'a Node> for Field<'a> {
    fn from(node: &'a Node) -> Self {
        Field::Node(Cow::Borrowed(node))
    }
}

impl Record for Node {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.get(name).map(Field::from)
    }
}

impl Record for IndexMap<String, Node> {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.get(name).map(Field::from)
    }
}

impl Record for HashMap<String, Node> {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.get(name).map(Field::from)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        (**self).field(name)
    }
}
