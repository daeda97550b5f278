use super::ast::{DotPath, Segment};
use crate::document::node::Node;

/// Resolves a dot-path against `root` and returns the first match.
///
/// `None` means the path does not exist. Trailing wildcards are dropped
/// before lookup, and a path that runs past a scalar (or an empty container)
/// returns that value instead of failing.
///
/// ```
/// use nodequill::{resolve, Node};
/// use nodequill::document::parser::parse_document;
///
/// let root = parse_document("a: [{name: x}, {name: y}]").unwrap();
/// assert_eq!(resolve("a.*.name", &root), Some(&Node::from("x")));
/// assert_eq!(resolve("a.*.missing", &root), None);
/// ```
pub fn resolve<'a>(path: &str, root: &'a Node) -> Option<&'a Node> {
    DotPath::parse(path).resolve(root)
}

/// Recursive descent over the remaining segments.
pub(crate) fn search<'a>(segments: &[Segment], node: &'a Node) -> Option<&'a Node> {
    let (current, rest) = segments.split_first()?;

    let key = match current {
        Segment::Wildcard => {
            return node.children().find_map(|child| search(rest, child));
        }
        Segment::Key(key) => key,
    };

    let value = lookup(node, key)?;

    if rest.is_empty() {
        return Some(value);
    }

    if value.is_container() && !value.is_empty() {
        return search(rest, value);
    }

    // Overshooting into a leaf returns the leaf.
    Some(value)
}

/// Direct child lookup; a null value counts as absent.
fn lookup<'a>(node: &'a Node, key: &str) -> Option<&'a Node> {
    node.get(key).filter(|value| !value.is_null())
}

/// Finds `key` anywhere in the tree.
///
/// The current node is checked first, then each container child in order,
/// depth first. Null values count as absent, like in [`resolve`].
///
/// ```
/// use nodequill::{deep_search, Node};
/// use nodequill::document::parser::parse_document;
///
/// let root = parse_document("a: {b: {c: 9}}").unwrap();
/// assert_eq!(deep_search("c", &root), Some(&Node::from(9)));
/// assert_eq!(deep_search("z", &root), None);
/// ```
pub fn deep_search<'a>(key: &str, root: &'a Node) -> Option<&'a Node> {
    if let Some(found) = lookup(root, key) {
        return Some(found);
    }

    root.children()
        .filter(|child| child.is_container())
        .find_map(|child| deep_search(key, child))
}
