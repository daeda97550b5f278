//! Command helpers behind the `nodequill` binary.
//!
//! These turn command-line arguments into lookups and sort specs, and report
//! failures as `anyhow` errors with user-facing messages.

use crate::config::Config;
use crate::document::node::Node;
use crate::dotpath::{deep_search, resolve, DotPath, Segment};
use crate::sort::{parse_column, CompareMode, SortSpec};
use anyhow::{bail, Context, Result};
use log::debug;

/// Value at a dot-path, or an error naming the path.
pub fn get<'a>(root: &'a Node, path: &str) -> Result<&'a Node> {
    resolve(path, root).with_context(|| format!("Path '{}' not found", path))
}

/// First value stored under `key` at any depth, or an error naming the key.
pub fn find<'a>(root: &'a Node, key: &str) -> Result<&'a Node> {
    deep_search(key, root).with_context(|| format!("Key '{}' not found", key))
}

/// Builds the sort spec from `--by` arguments, in the order given.
///
/// Bare keys use the configured default mode. `case_insensitive` in the
/// config applies to string and natural columns only.
pub fn build_spec(columns: &[String], config: &Config) -> Result<SortSpec> {
    let default_mode = config.compare_mode();
    let mut spec = SortSpec::new();

    for arg in columns {
        let (key, mut directive) = parse_column(arg, default_mode)?;
        if config.case_insensitive
            && matches!(directive.mode, CompareMode::String | CompareMode::Natural)
        {
            directive.case_insensitive = true;
        }
        debug!("Column '{}' => {}", key, directive);
        if spec.insert(key.clone(), directive).is_some() {
            bail!("Sort column '{}' given more than once", key);
        }
    }

    Ok(spec)
}

/// Finds the sequence to sort by following literal path segments.
///
/// Without a path the document root itself must be a sequence.
pub fn sequence_at<'a>(root: &'a mut Node, path: Option<&str>) -> Result<&'a mut Vec<Node>> {
    let mut node = root;

    if let Some(path) = path {
        let parsed = DotPath::parse(path);
        if parsed.segments().iter().any(Segment::is_wildcard) {
            bail!("Wildcards are not supported in --at '{}'", path);
        }
        for segment in parsed.segments() {
            if let Segment::Key(key) = segment {
                node = node
                    .get_mut(key)
                    .with_context(|| format!("Path '{}' not found at '{}'", path, key))?;
            }
        }
    }

    let kind = node.kind();
    node.as_sequence_mut()
        .with_context(|| format!("Expected a sequence to sort, found a {}", kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_document;
    use crate::sort::SortDirective;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_reports_missing_path() {
        let root = parse_document("a: {b: 1}\n").unwrap();
        assert_eq!(get(&root, "a.b").unwrap(), &Node::from(1));

        let err = get(&root, "a.c").unwrap_err();
        assert_eq!(err.to_string(), "Path 'a.c' not found");
    }

    #[test]
    fn test_find_reports_missing_key() {
        let root = parse_document("outer: {inner: {id: 7}}\n").unwrap();
        assert_eq!(find(&root, "id").unwrap(), &Node::from(7));
        assert_eq!(find(&root, "nope").unwrap_err().to_string(), "Key 'nope' not found");
    }

    #[test]
    fn test_build_spec_keeps_argument_order() {
        let spec = build_spec(&args(&["team.rank=desc", "name"]), &Config::default()).unwrap();
        let keys: Vec<_> = spec.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["team.rank", "name"]);
        assert_eq!(spec["team.rank"], SortDirective::descending());
        assert_eq!(spec["name"], SortDirective::ascending());
    }

    #[test]
    fn test_build_spec_uses_configured_default_mode() {
        let config = Config {
            default_mode: "natural".to_string(),
            ..Config::default()
        };
        let spec = build_spec(&args(&["file", "size=numeric"]), &config).unwrap();
        assert_eq!(spec["file"].mode, CompareMode::Natural);
        assert_eq!(spec["size"].mode, CompareMode::Numeric);
    }

    #[test]
    fn test_build_spec_case_insensitive_only_for_text_modes() {
        let config = Config {
            case_insensitive: true,
            ..Config::default()
        };
        let spec = build_spec(
            &args(&["a=string", "b=natural", "c=numeric", "d"]),
            &config,
        )
        .unwrap();

        assert!(spec["a"].case_insensitive);
        assert!(spec["b"].case_insensitive);
        assert!(!spec["c"].case_insensitive);
        assert!(!spec["d"].case_insensitive);
    }

    #[test]
    fn test_build_spec_rejects_duplicate_column() {
        let err = build_spec(&args(&["name", "name=desc"]), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("given more than once"));
    }

    #[test]
    fn test_build_spec_rejects_bad_directive() {
        assert!(build_spec(&args(&["name=sideways"]), &Config::default()).is_err());
    }

    #[test]
    fn test_sequence_at_root() {
        let mut root = parse_document("[3, 1, 2]").unwrap();
        assert_eq!(sequence_at(&mut root, None).unwrap().len(), 3);
    }

    #[test]
    fn test_sequence_at_follows_keys_and_indices() {
        let mut root = parse_document("groups:\n  - {items: [a, b]}\n").unwrap();
        let items = sequence_at(&mut root, Some("groups.0.items")).unwrap();
        assert_eq!(items, &vec![Node::from("a"), Node::from("b")]);
    }

    #[test]
    fn test_sequence_at_rejects_wildcard() {
        let mut root = parse_document("groups:\n  - {items: [a]}\n").unwrap();
        let err = sequence_at(&mut root, Some("groups.*.items")).unwrap_err();
        assert!(err.to_string().contains("Wildcards are not supported"));
    }

    #[test]
    fn test_sequence_at_missing_path() {
        let mut root = parse_document("a: {b: []}\n").unwrap();
        let err = sequence_at(&mut root, Some("a.c")).unwrap_err();
        assert_eq!(err.to_string(), "Path 'a.c' not found at 'c'");
    }

    #[test]
    fn test_sequence_at_requires_sequence() {
        let mut root = parse_document("a: {b: 1}\n").unwrap();
        let err = sequence_at(&mut root, Some("a")).unwrap_err();
        assert_eq!(err.to_string(), "Expected a sequence to sort, found a mapping");

        let mut scalar = parse_document("5").unwrap();
        assert!(sequence_at(&mut scalar, None).is_err());
    }
}
