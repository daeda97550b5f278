//! Conversion from `serde_yaml` / `serde_json` values into [`Node`] trees.
//!
//! YAML is parsed with `serde_yaml`, which also accepts JSON documents, so
//! [`parse_document`] handles both formats. JSON-only input can go through
//! [`parse_json`] to get `serde_json`'s stricter diagnostics.
//!
//! # Example
//!
//! ```
//! use nodequill::document::parser::parse_document;
//!
//! let root = parse_document("name: Alice\ntags: [a, b]\n").unwrap();
//! assert_eq!(root.get("name").and_then(|n| n.as_str()), Some("Alice"));
//! ```

use super::node::{Node, Number};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Parses YAML (or JSON) text into a node tree.
///
/// # Errors
///
/// Returns an error if the text is not a valid YAML document.
pub fn parse_document(text: &str) -> Result<Node> {
    let value: YamlValue = serde_yaml::from_str(text).context("Failed to parse YAML")?;
    Ok(from_yaml(&value))
}

/// Parses JSON text into a node tree.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON.
pub fn parse_json(text: &str) -> Result<Node> {
    let value: JsonValue = serde_json::from_str(text).context("Failed to parse JSON")?;
    Ok(from_json(&value))
}

/// Converts a `serde_yaml` value into a node.
///
/// Non-string mapping keys are rendered to their scalar text (`1`, `true`,
/// `null`); tagged values are unwrapped to their inner value.
pub fn from_yaml(value: &YamlValue) -> Node {
    match value {
        YamlValue::Null => Node::Null,
        YamlValue::Bool(b) => Node::Boolean(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Number(Number::Integer(i))
            } else {
                Node::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        YamlValue::String(s) => Node::String(s.clone()),
        YamlValue::Sequence(items) => Node::Sequence(items.iter().map(from_yaml).collect()),
        YamlValue::Mapping(map) => {
            let mut fields = IndexMap::with_capacity(map.len());
            for (key, child) in map {
                fields.insert(yaml_key_to_string(key), from_yaml(child));
            }
            Node::Mapping(fields)
        }
        YamlValue::Tagged(tagged) => from_yaml(&tagged.value),
    }
}

fn yaml_key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::Tagged(tagged) => yaml_key_to_string(&tagged.value),
        // Complex keys have no natural string form; fall back to their YAML text.
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Converts a `serde_json` value into a node.
pub fn from_json(value: &JsonValue) -> Node {
    match value {
        JsonValue::Null => Node::Null,
        JsonValue::Bool(b) => Node::Boolean(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Number(Number::Integer(i))
            } else {
                Node::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
            }
        }
        JsonValue::String(s) => Node::String(s.clone()),
        JsonValue::Array(items) => Node::Sequence(items.iter().map(from_json).collect()),
        JsonValue::Object(map) => Node::Mapping(
            map.iter()
                .map(|(key, child)| (key.clone(), from_json(child)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_document("42").unwrap(), Node::from(42));
        assert_eq!(parse_document("4.5").unwrap(), Node::from(4.5));
        assert_eq!(parse_document("true").unwrap(), Node::from(true));
        assert_eq!(parse_document("~").unwrap(), Node::Null);
        assert_eq!(parse_document("hello").unwrap(), Node::from("hello"));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let root = parse_document("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        match root {
            Node::Mapping(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            _ => panic!("Expected mapping"),
        }
    }

    #[test]
    fn test_parse_non_string_keys() {
        let root = parse_document("1: one\ntrue: yes\n").unwrap();
        assert_eq!(root.get("1"), Some(&Node::from("one")));
        assert_eq!(root.get("true"), Some(&Node::from("yes")));
    }

    #[test]
    fn test_parse_tagged_value_unwraps() {
        let root = parse_document("value: !custom 5\n").unwrap();
        assert_eq!(root.get("value"), Some(&Node::from(5)));
    }

    #[test]
    fn test_parse_json_through_yaml() {
        let root = parse_document(r#"{"a": [1, 2, {"b": null}]}"#).unwrap();
        let a = root.get("a").unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.get("2").and_then(|n| n.get("b")), Some(&Node::Null));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_document("key: [unclosed");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse YAML"));
    }

    #[test]
    fn test_from_json_matches_yaml_shape() {
        let json_node = from_json(&json!({"n": 1, "f": 1.5, "s": "x", "l": [true, null]}));
        let yaml_node = parse_document("n: 1\nf: 1.5\ns: x\nl: [true, null]\n").unwrap();
        assert_eq!(json_node, yaml_node);
    }

    #[test]
    fn test_parse_json_preserves_key_order() {
        let text = r#"{"zeta": {"name": "first"}, "alpha": {"name": "second"}}"#;
        let root = parse_json(text).unwrap();
        match &root {
            Node::Mapping(map) => {
                let keys: Vec<_> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["zeta", "alpha"]);
            }
            _ => panic!("Expected mapping"),
        }
        assert_eq!(
            crate::dotpath::resolve("*.name", &root),
            crate::dotpath::resolve("*.name", &parse_document(text).unwrap())
        );
    }

    #[test]
    fn test_parse_json_rejects_yaml_only_syntax() {
        assert!(parse_json("key: value").is_err());
        assert_eq!(parse_json("[1]").unwrap(), Node::Sequence(vec![Node::from(1)]));
    }
}
