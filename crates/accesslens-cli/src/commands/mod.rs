pub mod agents;
pub mod clients;
pub mod completion;
pub mod endpoints;
pub mod report;

use accesslens_core::log::{LogFile, LogReader};
use anyhow::Result;
use std::path::Path;

/// Read the whole log up front; a failure here means no report is printed
fn load_log(file: &Path) -> Result<LogFile> {
    tracing::debug!("Reading log file: {}", file.display());
    Ok(LogReader::from_file(file)?)
}
