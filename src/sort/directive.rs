//! Sort directives: direction plus comparison mode for one column.
//!
//! Directives can be built in code or parsed from text. The text form is a
//! colon-separated list of tokens, in any order:
//!
//! - `asc` / `ascending`, `desc` / `descending`
//! - `regular`, `numeric`, `string`, `natural`
//! - `ci` / `case-insensitive` (for `string` and `natural`)
//!
//! ```
//! use nodequill::{CompareMode, SortDirective, SortOrder};
//!
//! let directive: SortDirective = "desc:natural:ci".parse().unwrap();
//! assert_eq!(directive.order, SortOrder::Descending);
//! assert_eq!(directive.mode, CompareMode::Natural);
//! assert!(directive.case_insensitive);
//! ```

use super::compare::SortKey;
use super::error::SortError;
use crate::document::node::Node;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordered mapping from column key to directive. The first entry is the
/// primary key, later entries break ties.
pub type SortSpec = IndexMap<String, SortDirective>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How two column values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    /// Type-aware comparison; numeric-looking strings compare as numbers
    #[default]
    Regular,
    /// Both sides coerced to numbers
    Numeric,
    /// Both sides rendered as strings, compared byte-wise
    String,
    /// Strings with embedded digit runs compared by value (`img2 < img10`)
    Natural,
}

impl FromStr for CompareMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(CompareMode::Regular),
            "numeric" => Ok(CompareMode::Numeric),
            "string" => Ok(CompareMode::String),
            "natural" => Ok(CompareMode::Natural),
            other => Err(SortError::InvalidDirective(
                s.to_string(),
                format!("unknown comparison mode '{}'", other),
            )),
        }
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompareMode::Regular => "regular",
            CompareMode::Numeric => "numeric",
            CompareMode::String => "string",
            CompareMode::Natural => "natural",
        };
        write!(f, "{}", name)
    }
}

/// Direction and comparison mode for one sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortDirective {
    pub order: SortOrder,
    pub mode: CompareMode,
    /// Fold case before comparing; only affects `String` and `Natural`
    pub case_insensitive: bool,
}

impl SortDirective {
    pub fn ascending() -> Self {
        Self::default()
    }

    pub fn descending() -> Self {
        Self {
            order: SortOrder::Descending,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn ignoring_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Prepares a column value for comparison under this directive.
    pub fn key<'a>(&self, value: Cow<'a, Node>) -> SortKey<'a> {
        SortKey::new(value, self.mode, self.case_insensitive)
    }

    /// Compares two prepared keys, honoring the direction.
    pub fn compare_keys(&self, a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
        let ordering = a.compare(b);
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Compares two column values under this directive.
    pub fn compare(&self, a: &Node, b: &Node) -> Ordering {
        self.compare_keys(&self.key(Cow::Borrowed(a)), &self.key(Cow::Borrowed(b)))
    }
}

impl From<SortOrder> for SortDirective {
    fn from(order: SortOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }
}

impl From<CompareMode> for SortDirective {
    fn from(mode: CompareMode) -> Self {
        Self::ascending().with_mode(mode)
    }
}

impl FromStr for SortDirective {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut directive = SortDirective::default();
        for token in s.split(':').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "asc" | "ascending" => directive.order = SortOrder::Ascending,
                "desc" | "descending" => directive.order = SortOrder::Descending,
                "ci" | "case-insensitive" => directive.case_insensitive = true,
                _ => {
                    directive.mode = token.parse().map_err(|_| {
                        SortError::InvalidDirective(
                            s.to_string(),
                            format!("unknown token '{}'", token),
                        )
                    })?
                }
            }
        }
        Ok(directive)
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match self.order {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };
        write!(f, "{}:{}", order, self.mode)?;
        if self.case_insensitive {
            write!(f, ":ci")?;
        }
        Ok(())
    }
}

/// Parses a `key[=directive]` column argument.
///
/// A bare key sorts ascending with `default_mode`.
pub fn parse_column(
    arg: &str,
    default_mode: CompareMode,
) -> Result<(String, SortDirective), SortError> {
    let (key, directive) = match arg.split_once('=') {
        Some((key, text)) => {
            let mut directive = SortDirective::default().with_mode(default_mode);
            let parsed: SortDirective = text.parse()?;
            directive.order = parsed.order;
            directive.case_insensitive = parsed.case_insensitive;
            if text.split(':').any(|t| t.trim().parse::<CompareMode>().is_ok()) {
                directive.mode = parsed.mode;
            }
            (key, directive)
        }
        None => (arg, SortDirective::default().with_mode(default_mode)),
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(SortError::InvalidDirective(
            arg.to_string(),
            "empty column key".to_string(),
        ));
    }
    Ok((key.to_string(), directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_directive() {
        let directive: SortDirective = "".parse().unwrap();
        assert_eq!(directive, SortDirective::ascending());
    }

    #[test]
    fn test_parse_order_and_mode() {
        let directive: SortDirective = "desc:numeric".parse().unwrap();
        assert_eq!(directive.order, SortOrder::Descending);
        assert_eq!(directive.mode, CompareMode::Numeric);
        assert!(!directive.case_insensitive);
    }

    #[test]
    fn test_parse_mode_only_is_ascending() {
        let directive: SortDirective = "STRING".parse().unwrap();
        assert_eq!(directive, SortDirective::from(CompareMode::String));
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = "asc:sideways".parse::<SortDirective>().unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }

    #[test]
    fn test_display_round_trips() {
        let directive = SortDirective::descending()
            .with_mode(CompareMode::Natural)
            .ignoring_case();
        assert_eq!(directive.to_string(), "desc:natural:ci");
        assert_eq!(directive.to_string().parse::<SortDirective>().unwrap(), directive);
    }

    #[test]
    fn test_parse_column_bare_key_uses_default_mode() {
        let (key, directive) = parse_column("team.rank", CompareMode::Numeric).unwrap();
        assert_eq!(key, "team.rank");
        assert_eq!(directive.mode, CompareMode::Numeric);
        assert_eq!(directive.order, SortOrder::Ascending);
    }

    #[test]
    fn test_parse_column_keeps_default_mode_when_only_order_given() {
        let (_, directive) = parse_column("age=desc", CompareMode::Numeric).unwrap();
        assert_eq!(directive.order, SortOrder::Descending);
        assert_eq!(directive.mode, CompareMode::Numeric);

        let (_, directive) = parse_column("age=desc:string", CompareMode::Numeric).unwrap();
        assert_eq!(directive.mode, CompareMode::String);
    }

    #[test]
    fn test_parse_column_rejects_empty_key() {
        assert!(parse_column("=asc", CompareMode::Regular).is_err());
    }

    #[test]
    fn test_descending_reverses() {
        let a = Node::from(1);
        let b = Node::from(2);
        assert_eq!(SortDirective::ascending().compare(&a, &b), Ordering::Less);
        assert_eq!(SortDirective::descending().compare(&a, &b), Ordering::Greater);
    }
}
