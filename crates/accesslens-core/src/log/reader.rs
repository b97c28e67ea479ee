use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// An access log loaded into memory, one entry per line
#[derive(Debug, Clone, Default)]
pub struct LogFile {
    pub source: Option<PathBuf>,
    pub lines: Vec<String>,
}

impl LogFile {
    /// Iterate lines paired with their 1-based line number
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.as_str()))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct LogReader;

impl LogReader {
    /// Read every line of the log file at the given path.
    ///
    /// The whole file is read before anything is returned, so a read failure
    /// part way through never yields a partial log.
    pub fn from_file(path: &Path) -> Result<LogFile> {
        tracing::debug!("Reading log file from: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        tracing::info!("Read {} lines from {}", lines.len(), path.display());

        Ok(LogFile {
            source: Some(path.to_path_buf()),
            lines,
        })
    }

    /// Split in-memory log content into lines
    pub fn from_str(content: &str) -> LogFile {
        tracing::debug!("Reading log from string");

        LogFile {
            source: None,
            lines: content.lines().map(str::to_string).collect(),
        }
    }
}
