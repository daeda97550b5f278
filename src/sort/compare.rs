//! Value comparison for each [`CompareMode`].

use super::directive::CompareMode;
use crate::document::node::{Node, Number};
use std::borrow::Cow;
use std::cmp::Ordering;

/// A column value coerced once for its comparison mode.
///
/// Numeric and text coercions happen when the key is built, so sorting a
/// column compares prepared keys without further allocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Regular(Cow<'a, Node>),
    Numeric(f64),
    String(Cow<'a, str>),
    Natural(Cow<'a, str>),
}

impl<'a> SortKey<'a> {
    pub fn new(value: Cow<'a, Node>, mode: CompareMode, case_insensitive: bool) -> Self {
        match mode {
            CompareMode::Regular => SortKey::Regular(value),
            CompareMode::Numeric => SortKey::Numeric(to_number(&value)),
            CompareMode::String => SortKey::String(text_key(value, case_insensitive)),
            CompareMode::Natural => SortKey::Natural(text_key(value, case_insensitive)),
        }
    }

    /// Compares two keys, ascending.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Regular(a), SortKey::Regular(b)) => compare_regular(a, b),
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.as_bytes().cmp(b.as_bytes()),
            (SortKey::Natural(a), SortKey::Natural(b)) => natural_cmp(a, b),
            // keys of one column always share a mode
            _ => Ordering::Equal,
        }
    }
}

/// Compares two nodes under `mode`, ascending.
pub fn compare(a: &Node, b: &Node, mode: CompareMode, case_insensitive: bool) -> Ordering {
    let a = SortKey::new(Cow::Borrowed(a), mode, case_insensitive);
    let b = SortKey::new(Cow::Borrowed(b), mode, case_insensitive);
    a.compare(&b)
}

/// Rank of each shape when values of different shapes meet.
fn rank(node: &Node) -> u8 {
    match node {
        Node::Null => 0,
        Node::Boolean(_) => 1,
        Node::Number(_) => 2,
        Node::String(_) => 3,
        Node::Sequence(_) => 4,
        Node::Mapping(_) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x.cmp(y),
        _ => a.as_f64().total_cmp(&b.as_f64()),
    }
}

fn compare_regular(a: &Node, b: &Node) -> Ordering {
    match (a, b) {
        (Node::Number(x), Node::Number(y)) => compare_numbers(x, y),
        (Node::Boolean(x), Node::Boolean(y)) => x.cmp(y),
        (Node::String(x), Node::String(y)) => match (numeric_string(x), numeric_string(y)) {
            (Some(p), Some(q)) => p.total_cmp(&q),
            _ => x.as_bytes().cmp(y.as_bytes()),
        },
        (Node::Number(x), Node::String(s)) => match numeric_string(s) {
            Some(q) => x.as_f64().total_cmp(&q),
            None => rank(a).cmp(&rank(b)),
        },
        (Node::String(s), Node::Number(y)) => match numeric_string(s) {
            Some(p) => p.total_cmp(&y.as_f64()),
            None => rank(a).cmp(&rank(b)),
        },
        (Node::Sequence(x), Node::Sequence(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y)
                .map(|(p, q)| compare_regular(p, q))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        (Node::Mapping(x), Node::Mapping(y)) => x.len().cmp(&y.len()).then_with(|| {
            x.iter()
                .zip(y)
                .map(|((k1, v1), (k2, v2))| k1.cmp(k2).then_with(|| compare_regular(v1, v2)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        }),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Value of a string that is entirely numeric (surrounding whitespace
/// allowed), such as `" 12"`, `"-3.5"` or `"1e3"`.
fn numeric_string(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if numeric_prefix_len(trimmed) != trimmed.len() || trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Length of the longest numeric prefix of `s` (sign, digits, fraction,
/// exponent). Zero when `s` does not start with a number.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if digits > 0 || end > frac_start {
            digits += end - frac_start;
            pos = end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let exp_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            pos = end;
        }
    }

    pos
}

/// Numeric coercion: leading number of a string, 1 for `true`, else 0.
fn to_number(node: &Node) -> f64 {
    match node {
        Node::Number(n) => n.as_f64(),
        Node::Boolean(true) => 1.0,
        Node::String(s) => {
            let trimmed = s.trim_start();
            let len = numeric_prefix_len(trimmed);
            trimmed[..len].parse().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// String coercion: `true` is `"1"`; `false`, null and containers are empty.
fn sort_string(node: &Node, case_insensitive: bool) -> Cow<'_, str> {
    let text: Cow<'_, str> = match node {
        Node::String(s) => Cow::Borrowed(s.as_str()),
        Node::Number(n) => Cow::Owned(n.to_string()),
        Node::Boolean(true) => Cow::Borrowed("1"),
        _ => Cow::Borrowed(""),
    };
    if case_insensitive {
        Cow::Owned(text.to_lowercase())
    } else {
        text
    }
}

fn text_key(value: Cow<'_, Node>, case_insensitive: bool) -> Cow<'_, str> {
    match value {
        Cow::Borrowed(node) => sort_string(node, case_insensitive),
        Cow::Owned(node) => Cow::Owned(sort_string(&node, case_insensitive).into_owned()),
    }
}

/// Natural-order comparison: digit runs compare by numeric value.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (run_a, next_i) = digit_run(a, i);
            let (run_b, next_j) = digit_run(b, j);
            let ord = run_a
                .len()
                .cmp(&run_b.len())
                .then_with(|| run_a.cmp(run_b));
            if ord.is_ne() {
                return ord;
            }
            i = next_i;
            j = next_j;
        } else {
            let ord = a[i].cmp(&b[j]);
            if ord.is_ne() {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Returns the digit run starting at `start` without leading zeros, and the
/// index just past the run.
fn digit_run(bytes: &[u8], start: usize) -> (&[u8], usize) {
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut significant = start;
    while significant + 1 < end && bytes[significant] == b'0' {
        significant += 1;
    }
    (&bytes[significant..end], end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Node {
        Node::from(text)
    }

    #[test]
    fn test_regular_numbers() {
        assert_eq!(compare_regular(&Node::from(2), &Node::from(10)), Ordering::Less);
        assert_eq!(compare_regular(&Node::from(2.5), &Node::from(2)), Ordering::Greater);
    }

    #[test]
    fn test_regular_numeric_strings_compare_as_numbers() {
        assert_eq!(compare_regular(&s("9"), &s("10")), Ordering::Less);
        assert_eq!(compare_regular(&s("abc"), &s("abd")), Ordering::Less);
        assert_eq!(compare_regular(&Node::from(10), &s("9")), Ordering::Greater);
    }

    #[test]
    fn test_regular_mixed_shapes_use_rank() {
        assert_eq!(compare_regular(&Node::Null, &Node::from(false)), Ordering::Less);
        assert_eq!(compare_regular(&Node::from(5), &s("five")), Ordering::Less);
        assert_eq!(
            compare_regular(&s("z"), &Node::Sequence(vec![])),
            Ordering::Less
        );
    }

    #[test]
    fn test_regular_sequences_by_length_then_items() {
        let short = Node::Sequence(vec![Node::from(9)]);
        let long = Node::Sequence(vec![Node::from(1), Node::from(1)]);
        assert_eq!(compare_regular(&short, &long), Ordering::Less);

        let a = Node::Sequence(vec![Node::from(1), Node::from(2)]);
        let b = Node::Sequence(vec![Node::from(1), Node::from(3)]);
        assert_eq!(compare_regular(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_numeric_mode_coerces() {
        let mode = CompareMode::Numeric;
        assert_eq!(compare(&s("12abc"), &s("3"), mode, false), Ordering::Greater);
        assert_eq!(compare(&s("abc"), &Node::from(0), mode, false), Ordering::Equal);
        assert_eq!(compare(&Node::from(true), &Node::from(0.5), mode, false), Ordering::Greater);
    }

    #[test]
    fn test_string_mode_is_bytewise() {
        let mode = CompareMode::String;
        assert_eq!(compare(&s("10"), &s("9"), mode, false), Ordering::Less);
        assert_eq!(compare(&Node::from(10), &Node::from(9), mode, false), Ordering::Less);
        assert_eq!(compare(&s("B"), &s("a"), mode, false), Ordering::Less);
        assert_eq!(compare(&s("B"), &s("a"), mode, true), Ordering::Greater);
    }

    #[test]
    fn test_natural_mode() {
        let mode = CompareMode::Natural;
        assert_eq!(compare(&s("img2"), &s("img10"), mode, false), Ordering::Less);
        assert_eq!(compare(&s("img010"), &s("img10"), mode, false), Ordering::Equal);
        assert_eq!(compare(&s("a"), &s("ab"), mode, false), Ordering::Less);
        assert_eq!(compare(&s("File1"), &s("file2"), mode, true), Ordering::Less);
    }

    #[test]
    fn test_sort_key_coerces_once() {
        let key = SortKey::new(Cow::Owned(Node::from(12)), CompareMode::String, false);
        assert_eq!(key, SortKey::String(Cow::Borrowed("12")));

        let text = s("Apple");
        let key = SortKey::new(Cow::Borrowed(&text), CompareMode::Natural, true);
        assert_eq!(key, SortKey::Natural(Cow::Borrowed("apple")));

        let key = SortKey::new(Cow::Borrowed(&text), CompareMode::String, false);
        assert!(matches!(key, SortKey::String(Cow::Borrowed("Apple"))));

        let key = SortKey::new(Cow::Owned(s("7 days")), CompareMode::Numeric, false);
        assert_eq!(key, SortKey::Numeric(7.0));
    }

    #[test]
    fn test_sort_key_compare_matches_compare() {
        let values = [s("b10"), s("B9"), Node::from(3), Node::Null, Node::from(true)];
        for mode in [
            CompareMode::Regular,
            CompareMode::Numeric,
            CompareMode::String,
            CompareMode::Natural,
        ] {
            for a in &values {
                for b in &values {
                    let ka = SortKey::new(Cow::Owned(a.clone()), mode, true);
                    let kb = SortKey::new(Cow::Borrowed(b), mode, true);
                    assert_eq!(ka.compare(&kb), compare(a, b, mode, true));
                }
            }
        }
    }

    #[test]
    fn test_numeric_prefix_len() {
        assert_eq!(numeric_prefix_len("12abc"), 2);
        assert_eq!(numeric_prefix_len("-1.5e3x"), 6);
        assert_eq!(numeric_prefix_len("1e"), 1);
        assert_eq!(numeric_prefix_len(".5"), 2);
        assert_eq!(numeric_prefix_len("."), 0);
        assert_eq!(numeric_prefix_len("abc"), 0);
    }

    #[test]
    fn test_numeric_string_rejects_partial_and_special() {
        assert_eq!(numeric_string(" 42 "), Some(42.0));
        assert_eq!(numeric_string("42abc"), None);
        assert_eq!(numeric_string("inf"), None);
        assert_eq!(numeric_string(""), None);
    }
}
