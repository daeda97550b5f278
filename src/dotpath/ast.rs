//! Parsed form of dot-path expressions.

use super::parser;
use crate::document::node::Node;
use std::fmt;

/// One step of a dot-path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal mapping key or sequence index (`name`, `0`)
    Key(String),
    /// `*` - try every child, keep the first that matches downstream
    Wildcard,
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Wildcard => write!(f, "*"),
        }
    }
}

/// A dot-path such as `users.*.address.city`, split into segments.
///
/// A `DotPath` always holds at least one segment. Parse once with
/// [`DotPath::parse`] and call [`DotPath::resolve`] as often as needed.
///
/// ```
/// use nodequill::{DotPath, Node};
/// use nodequill::dotpath::Segment;
///
/// let path = DotPath::parse("users.*.name");
/// assert_eq!(path.segments()[1], Segment::Wildcard);
/// assert_eq!(path.to_string(), "users.*.name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    segments: Vec<Segment>,
}

impl DotPath {
    /// Parses a raw path string. See [`parser::parse`] for the normalization
    /// rules.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: parser::parse(raw),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolves the path against `root`, returning the first match.
    pub fn resolve<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        super::resolver::search(&self.segments, root)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
