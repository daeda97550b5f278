//! Dot-path string parsing.

use super::ast::Segment;

/// The wildcard segment marker.
pub const WILDCARD: &str = "*";

/// Trims a raw path the way lookups expect it.
///
/// Trailing `*` and whitespace characters go first, then trailing dots. A
/// trailing wildcard therefore names the parent path (`a.b.*` is `a.b`).
/// Only one round is applied, so `a.*.*` keeps its inner wildcard as `a.*`.
pub fn normalize(raw: &str) -> &str {
    raw.trim_end_matches(|c: char| c == '*' || c.is_whitespace())
        .trim_end_matches('.')
}

/// Splits a raw path into segments after [`normalize`].
///
/// The result is never empty: a path that normalizes to nothing yields a
/// single empty key, which only matches a mapping holding an empty key.
pub fn parse(raw: &str) -> Vec<Segment> {
    normalize(raw)
        .split('.')
        .map(|part| {
            if part == WILDCARD {
                Segment::Wildcard
            } else {
                Segment::Key(part.to_string())
            }
        })
        .collect()
}
