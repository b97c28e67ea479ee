mod extract;
mod reader;
mod types;

pub use extract::{LineExtractor, TIMESTAMP_FORMAT, parse_timestamp};
pub use reader::{LogFile, LogReader};
pub use types::*;
