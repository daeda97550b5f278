//! File I/O for documents.
//!
//! This module loads YAML/JSON documents from disk or stdin (optionally
//! gzip-compressed) and writes node trees back out.

pub mod loader;
pub mod saver;
