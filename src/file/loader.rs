//! Document loading from files and stdin.
//!
//! Files ending in `.gz` are decompressed transparently. The format is taken
//! from the extension under any `.gz` suffix: `.json` is parsed as JSON,
//! everything else as YAML (which also accepts JSON).

use crate::document::node::Node;
use crate::document::parser::{parse_document, parse_json};
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Loads and parses a YAML or JSON file.
///
/// # Examples
///
/// ```no_run
/// use nodequill::file::loader::load_file;
///
/// let root = load_file("players.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - The file ends in `.gz` but is not valid gzip data
/// - The contents are not valid YAML (or JSON for `.json` files)
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    let path = path.as_ref();

    let content = if is_gzipped(path) {
        read_gzipped_file(path)?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file '{}'", path.display()))?
    };

    debug!("Loaded {} bytes from {}", content.len(), path.display());

    if is_json(path) {
        parse_json(&content).with_context(|| format!("Invalid JSON in '{}'", path.display()))
    } else {
        parse_document(&content).with_context(|| format!("Invalid YAML in '{}'", path.display()))
    }
}

/// Loads and parses a document from standard input.
///
/// Gzip input is detected by its magic bytes.
///
/// # Errors
///
/// Returns an error if reading stdin fails, the data is not valid UTF-8
/// (after decompression), or it does not parse as YAML/JSON.
pub fn load_from_stdin() -> Result<Node> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    load_from_bytes(&buffer)
}

/// Parses raw document bytes, decompressing them first if they are gzip.
pub fn load_from_bytes(bytes: &[u8]) -> Result<Node> {
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8")?
    };
    parse_document(&content)
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Checks for a `.json` extension, looking under a `.gz` suffix.
fn is_json(path: &Path) -> bool {
    let name = path.to_string_lossy().to_ascii_lowercase();
    let base = name.strip_suffix(".gz").unwrap_or(&name);
    base.ends_with(".json")
}

fn read_gzipped_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open gzipped file '{}'", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_looks_under_gz() {
        assert!(is_json(Path::new("data.json")));
        assert!(is_json(Path::new("data.JSON.gz")));
        assert!(!is_json(Path::new("data.yaml.gz")));
        assert!(!is_json(Path::new("json")));
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("a.yaml.gz")));
        assert!(!is_gzipped(Path::new("a.yaml")));
    }

    #[test]
    fn test_load_from_bytes_plain() {
        let root = load_from_bytes(b"a: 1\n").unwrap();
        assert_eq!(root.get("a"), Some(&Node::from(1)));
    }

    #[test]
    fn test_load_from_bytes_rejects_invalid_utf8() {
        let result = load_from_bytes(&[0xff, 0xfe, 0x00]);
        assert!(result.is_err());
    }
}
