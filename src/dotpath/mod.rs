//! Dot-path lookup over [`Node`](crate::Node) trees.
//!
//! # Supported Syntax
//!
//! - `key` - mapping key
//! - `0`, `12` - sequence index
//! - `a.b.c` - nested access
//! - `a.*.name` - wildcard: the first child of `a` that has a `name`
//!
//! Trailing `*`, whitespace and `.` characters are ignored, so `a.*` looks up
//! `a`. Missing keys yield `None`; a path that continues past a scalar yields
//! the scalar.
//!
//! [`deep_search`] is a separate, path-free lookup of a key at any depth.

pub mod ast;
pub mod parser;
pub mod resolver;

pub use ast::{DotPath, Segment};
pub use resolver::{deep_search, resolve};
