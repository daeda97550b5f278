//! NodeQuill - path lookup and column sorting for nested YAML/JSON data.
//!
//! The crate is organized around two independent primitives:
//!
//! - [`dotpath`] resolves dotted paths such as `users.*.name` against a
//!   [`Node`] tree and searches for keys at any depth.
//! - [`sort`] orders a slice of records by several (possibly nested) columns
//!   at once, each with its own direction and comparison mode.
//!
//! The [`document`], [`file`] and [`config`] modules provide the node model,
//! YAML/JSON loading, and user configuration used by the `nodequill` binary,
//! and [`cli`] holds the binary's argument handling.

pub mod cli;
pub mod config;
pub mod document;
pub mod dotpath;
pub mod file;
pub mod sort;

pub use document::node::{Node, Number};
pub use dotpath::{deep_search, resolve, DotPath};
pub use sort::{sort_by_columns, CompareMode, Record, SortDirective, SortError, SortOrder, SortSpec};
