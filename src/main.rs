use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::{Path, PathBuf};

use nodequill::cli::{build_spec, find, get, sequence_at};
use nodequill::config::Config;
use nodequill::document::node::Node;
use nodequill::file::loader::{load_file, load_from_stdin};
use nodequill::file::saver::{save_file, write_node, OutputFormat};
use nodequill::sort::sort_by_columns;

/// NodeQuill - dot-path lookup and column sorting for YAML/JSON documents
#[derive(Parser)]
#[command(name = "nodequill")]
#[command(version)]
#[command(about = "Dot-path lookup and multi-key sorting for YAML/JSON", long_about = None)]
struct Cli {
    /// Output format: yaml or json (default: from config, or the output file's extension)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a dot-path such as `users.*.name`
    Get {
        path: String,
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the first value stored under KEY at any depth
    Find {
        key: String,
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Sort a sequence of records by one or more columns
    Sort {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Sort column as KEY[=DIRECTIVE], e.g. `team.rank=desc:numeric`; repeat for tie-breakers
        #[arg(short, long = "by", required = true)]
        by: Vec<String>,

        /// Dot-path of the sequence to sort (default: the document root)
        #[arg(long)]
        at: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let format = match (&cli.format, &cli.output) {
        (Some(name), _) => name.parse::<OutputFormat>()?,
        (None, Some(path)) => OutputFormat::from_path(path),
        (None, None) => config.output_format(),
    };

    let result = match cli.command {
        Command::Get { path, file } => {
            let root = load_input(file.as_deref())?;
            get(&root, &path)?.clone()
        }
        Command::Find { key, file } => {
            let root = load_input(file.as_deref())?;
            find(&root, &key)?.clone()
        }
        Command::Sort { file, by, at } => {
            let mut root = load_input(file.as_deref())?;
            let spec = build_spec(&by, &config)?;

            let records = sequence_at(&mut root, at.as_deref())?;
            if sort_by_columns(records, &spec)? {
                info!("Sorted {} records by {} columns", records.len(), spec.len());
            } else {
                info!("Nothing to sort");
            }
            root
        }
    };

    match &cli.output {
        Some(path) => save_file(path, &result, format)
            .with_context(|| format!("Failed to save '{}'", path.display())),
        None => write_node(&mut io::stdout().lock(), &result, format),
    }
}

fn load_input(file: Option<&Path>) -> Result<Node> {
    match file {
        Some(path) => load_file(path),
        None => load_from_stdin(),
    }
}
