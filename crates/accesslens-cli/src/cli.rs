use crate::{DEFAULT_LOG_FILE, LOG_FILE_ENV, OutputFormat};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "accesslens")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Endpoint, burst and user agent reports for web server access logs",
    long_about = "accesslens reads an access log with ISO-8601 timestamps, client addresses, \
                  quoted request lines and user agents, and reports endpoint frequency, \
                  per-client request bursts and browser categories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct LogArg {
    /// Path to the access log
    #[arg(value_name = "FILE", env = LOG_FILE_ENV, default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count requests per endpoint and per HTTP method
    Endpoints {
        #[command(flatten)]
        log: LogArg,
    },

    /// Count requests each client made shortly after its first request
    Clients {
        #[command(flatten)]
        log: LogArg,

        /// Window length in seconds, measured inclusively from the first request
        #[arg(long, value_name = "SECONDS", default_value_t = 10.0)]
        window: f64,
    },

    /// Count requests per user agent category
    Agents {
        #[command(flatten)]
        log: LogArg,
    },

    /// Run every report from a single pass over the log
    Report {
        #[command(flatten)]
        log: LogArg,

        /// Window length in seconds, measured inclusively from the first request
        #[arg(long, value_name = "SECONDS", default_value_t = 10.0)]
        window: f64,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}
