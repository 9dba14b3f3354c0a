//! Segment Trie CLI - Main entrypoint.
//!
//! Loads a flat key/value data file into a segment trie and runs a single
//! query against it, printing the result as JSON on stdout. Logs go to
//! stderr.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use segment_trie::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use segment_trie::error::{SegtrieError, SegtrieResult};
use segment_trie::loader;

/// Command line arguments for the `segtrie` tool.
#[derive(Parser, Debug)]
#[clap(name = "segtrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the data file (TOML or JSON) holding key/value entries
    #[clap(short, long, value_parser)]
    data: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    #[clap(flatten)]
    Query(Query),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Subcommands that run against a loaded data file.
#[derive(Subcommand, Debug)]
enum Query {
    /// Print the value stored under a key
    Get {
        /// Key to look up
        key: String,
    },

    /// Print whether a value is stored under a key
    Has {
        /// Key to check
        key: String,
    },

    /// Print all entries matching a wildcard pattern
    Match {
        /// Pattern where the wildcard token matches exactly one segment
        pattern: String,
    },

    /// Print all stored patterns matching a concrete key
    Matched {
        /// Key to test against the stored patterns
        key: String,
    },

    /// Print every entry
    Map,

    /// Print the number of entries
    Len,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> SegtrieResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SegtrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Pretty-prints a serializable value as JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> SegtrieResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs a query command against the data file.
fn run_query(config: &AppConfig, data: Option<PathBuf>, query: Query) -> SegtrieResult<()> {
    let data = data.ok_or_else(|| {
        SegtrieError::Custom("a data file is required for this command (use --data)".to_string())
    })?;
    let trie = loader::load_trie(&data, &config.trie)?;

    match query {
        Query::Get { key } => print_json(&trie.get(&key)),
        Query::Has { key } => print_json(&trie.has(&key)),
        Query::Match { pattern } => {
            let matches: BTreeMap<_, _> = trie.match_pattern(&pattern).into_iter().collect();
            info!(pattern = %pattern, matches = matches.len(), "pattern matched");
            print_json(&matches)
        }
        Query::Matched { key } => {
            let patterns: BTreeMap<_, _> = trie.matching_patterns(&key).into_iter().collect();
            print_json(&patterns)
        }
        Query::Map => {
            let entries: BTreeMap<_, _> = trie.to_map().into_iter().collect();
            print_json(&entries)
        }
        Query::Len => print_json(&trie.len()),
    }
}

/// Main entry point for the application.
fn main() -> SegtrieResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command {
        Command::GenConfig { output } => {
            let default_config = AppConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| SegtrieError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            eprintln!("Default configuration written to {}", output.display());
            Ok(())
        }
        Command::Validate => {
            let config = config_loader.load()?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            print_json(&config)
        }
        Command::Query(query) => {
            let config = config_loader.load()?;
            init_logging(&config.log)?;
            run_query(&config, args.data, query)
        }
    }
}
