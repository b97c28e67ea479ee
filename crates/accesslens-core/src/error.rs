use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Log file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timestamp on line {line}: {value}")]
    InvalidTimestamp { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
