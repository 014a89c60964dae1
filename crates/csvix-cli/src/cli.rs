//! CLI argument definitions for csvix.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use csvix_search::DEFAULT_BATCH_SIZE;

#[derive(Parser)]
#[command(
    name = "csvix",
    version,
    about = "Load a CSV file into a search-engine index",
    long_about = "Load a CSV file into an OpenSearch-compatible index.\n\n\
                  Infers a field mapping from the data, creates or recreates\n\
                  the target index, and bulk-loads documents in batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a CSV file into an index.
    Load(LoadArgs),
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the source CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target index name.
    #[arg(long = "index", value_name = "NAME")]
    pub index: String,

    /// Search engine host.
    #[arg(long = "host", env = "OPENSEARCH_HOST", default_value = "localhost")]
    pub host: String,

    /// Search engine port.
    #[arg(long = "port", env = "OPENSEARCH_PORT", default_value_t = 9200)]
    pub port: u16,

    /// Username for basic authentication.
    #[arg(long = "user", env = "OPENSEARCH_USERNAME", default_value = "admin")]
    pub user: String,

    /// Password for basic authentication.
    #[arg(long = "password", env = "OPENSEARCH_ADMIN_PASSWORD")]
    pub password: Option<String>,

    /// Column whose values are reinterpreted as timestamps.
    #[arg(long = "time-field", value_name = "COLUMN")]
    pub time_field: Option<String>,

    /// Maximum documents per bulk request.
    #[arg(long = "batch-size", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Delete and recreate the index before loading.
    ///
    /// WARNING: destroys every document already in the index.
    #[arg(long = "recreate")]
    pub recreate: bool,

    /// Connect over plain HTTP instead of HTTPS.
    #[arg(long = "no-tls")]
    pub no_tls: bool,

    /// Verify TLS certificates.
    ///
    /// Off by default so that local single-node engines with self-signed
    /// certificates work out of the box.
    #[arg(long = "verify-certs")]
    pub verify_certs: bool,

    /// Number of primary shards for a newly created index.
    #[arg(long = "shards", default_value_t = 1)]
    pub shards: u32,

    /// Number of replicas for a newly created index.
    #[arg(long = "replicas", default_value_t = 0)]
    pub replicas: u32,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
