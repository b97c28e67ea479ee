use clap::ValueEnum;

pub mod cli;
pub mod commands;
pub mod render;

/// Log file analysed when no path is given on the command line or in the
/// environment
pub const DEFAULT_LOG_FILE: &str = "../NodeJsApp.log";

/// Environment variable that overrides [`DEFAULT_LOG_FILE`]
pub const LOG_FILE_ENV: &str = "ACCESSLENS_LOG_FILE";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Table,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
        }
    }
}
