//! `jesson` CLI: check, compact and inspect JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compact a document (stdin → stdout)
//! echo '{ "id": 11252353308968154646 }' | jesson compact
//!
//! # Compact from file to file
//! jesson compact -i data.json -o data.min.json
//!
//! # Validate only
//! jesson check -i data.json
//!
//! # Show the token stream or the syntax tree
//! jesson tokens -i data.json
//! jesson tree -i data.json
//!
//! # Debug logging to stderr
//! jesson -v compact -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jesson_core::Limits;
use std::io::{self, Read};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jesson",
    version,
    about = "Strict JSON codec with exact big integers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum nesting depth of objects and arrays
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Log parse and stringify details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-stringify a document without whitespace, keeping string escapes as written
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a document and report whether it is valid
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the token stream, one token per line
    Tokens {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the syntax tree
    Tree {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let limits = build_limits(cli.max_depth);
    debug!(max_depth = limits.max_nesting_depth, "resolved limits");

    match cli.command {
        Commands::Compact { input, output } => {
            let text = read_input(input.as_deref())?;
            let started = Instant::now();
            let tree =
                jesson_core::parse_tree_with(&text, &limits).context("Failed to parse JSON")?;
            debug!(elapsed = ?started.elapsed(), "parsed");

            let started = Instant::now();
            let compact = jesson_core::stringify_node(&tree);
            debug!(elapsed = ?started.elapsed(), bytes = compact.len(), "stringified");

            write_output(output.as_deref(), &compact)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            jesson_core::parse_tree_with(&text, &limits)
                .context("Failed to parse JSON")?;
            println!("ok");
        }
        Commands::Tokens { input } => {
            let text = read_input(input.as_deref())?;
            let started = Instant::now();
            let tokens = jesson_core::tokenize(&text).context("Failed to tokenize JSON")?;
            debug!(count = tokens.len(), elapsed = ?started.elapsed(), "tokenized");

            let listing: String = tokens.iter().map(|token| format!("{token}\n")).collect();
            write_output(None, &listing)?;
        }
        Commands::Tree { input } => {
            let text = read_input(input.as_deref())?;
            let tree = jesson_core::parse_tree_with(&text, &limits)
                .context("Failed to parse JSON")?;
            println!("{tree:#?}");
        }
    }

    Ok(())
}

/// Logs go to stderr so piped stdout stays clean. `RUST_LOG` overrides `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_limits(max_depth: Option<usize>) -> Limits {
    match max_depth {
        Some(depth) => Limits::default().with_max_nesting_depth(depth),
        None => Limits::default(),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    info!(source = path.unwrap_or("<stdin>"), bytes = text.len(), "read input");
    Ok(text)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
