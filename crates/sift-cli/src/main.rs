use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sift_scanner::ScanOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Sift: small in-memory TF-IDF text search.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// File extension to index when a directory is given (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_value = "txt", global = true)]
    extensions: Vec<String>,

    /// Index every file in given directories, whatever its extension
    #[arg(long, global = true)]
    all_files: bool,

    /// Include hidden files and directories when scanning
    #[arg(long, global = true)]
    hidden: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Index documents and rank them against a query
    Search {
        /// Free-text query
        query: String,

        /// Files or directories to index
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Maximum number of results (0 = all)
        #[arg(short = 'n', long, default_value_t = 0)]
        max_results: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Index documents and list them in ingestion order
    List {
        /// Files or directories to index
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Index documents and print corpus statistics
    Stats {
        /// Files or directories to index
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Number of most frequent terms to show
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Jsonl,
    Json,
}

impl Cli {
    fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: if self.all_files {
                Vec::new()
            } else {
                self.extensions
                    .iter()
                    .map(|e| e.trim_start_matches('.').to_string())
                    .collect()
            },
            include_hidden: self.hidden,
        }
    }

    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match &cli.command {
        Command::Search {
            query,
            paths,
            max_results,
            format,
        } => commands::search::run(&cli, query, paths, *max_results, *format),
        Command::List { paths } => commands::list::run(&cli, paths),
        Command::Stats { paths, top } => commands::stats::run(&cli, paths, *top),
    }
}
