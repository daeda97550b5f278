//! Document output: rendering to YAML/JSON text and saving to files.

use crate::document::node::Node;
use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Serialization format for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Picks the format from a file name (`.json`, optionally gzipped, is
    /// JSON; anything else is YAML).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path.as_ref().to_string_lossy().to_ascii_lowercase();
        let base = name.strip_suffix(".gz").unwrap_or(&name);
        if base.ends_with(".json") {
            OutputFormat::Json
        } else {
            OutputFormat::Yaml
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format '{}' (expected yaml or json)", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Renders a node as YAML or pretty-printed JSON, ending with a newline.
pub fn render(node: &Node, format: OutputFormat) -> Result<String> {
    let mut text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(node).context("Failed to serialize YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(node).context("Failed to serialize JSON")?
        }
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Writes a rendered node to `writer`.
pub fn write_node<W: Write>(writer: &mut W, node: &Node, format: OutputFormat) -> Result<()> {
    let text = render(node, format)?;
    writer
        .write_all(text.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

/// Saves a node to `path`, gzip-compressing when the name ends in `.gz`.
///
/// The data goes to a temporary file first and is then renamed over the
/// target, so the target is never left partially written.
///
/// # Errors
///
/// Returns an error if serialization, writing, compression, or the final
/// rename fails.
pub fn save_file<P: AsRef<Path>>(path: P, node: &Node, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let text = render(node, format)?;
    let compress = path.to_string_lossy().ends_with(".gz");
    write_file_atomic(path, text.as_bytes(), compress)
}

fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_document;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("out.json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("out.json.gz"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("out.yml"), OutputFormat::Yaml);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_json_keeps_key_order() {
        let node = parse_document("b: 1\na: [true, null]\n").unwrap();
        let text = render(&node, OutputFormat::Json).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_yaml_parses_back() {
        let node = parse_document("name: x\nitems:\n  - 1\n  - 2.5\n").unwrap();
        let text = render(&node, OutputFormat::Yaml).unwrap();
        assert_eq!(parse_document(&text).unwrap(), node);
    }
}
