use accesslens_core::Error as CoreError;
use accesslens_core::analysis::LineObserver;
use accesslens_core::log::{ClientMatch, LineExtractor};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Every timestamp seen per client address, in file order.
///
/// Duplicates are kept. Nothing is ever removed during a run.
#[derive(Debug, Clone, Default)]
pub struct ClientHistory {
    clients: HashMap<String, Vec<DateTime<Utc>>>,
    skipped: usize,
}

impl ClientHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a timestamp to the client's history
    pub fn record(&mut self, address: &str, timestamp: DateTime<Utc>) {
        match self.clients.get_mut(address) {
            Some(timestamps) => timestamps.push(timestamp),
            None => {
                self.clients.insert(address.to_string(), vec![timestamp]);
            }
        }
    }

    /// Extract and record the client of one log line.
    ///
    /// Lines that do not match are ignored. Lines whose timestamp cannot be
    /// parsed are skipped with a warning carrying the 1-based line number.
    pub fn ingest_line(&mut self, line_no: usize, line: &str) {
        match LineExtractor::client(line) {
            ClientMatch::Matched(hit) => self.record(hit.address, hit.timestamp),
            ClientMatch::Malformed { timestamp } => {
                self.skipped += 1;
                let err = CoreError::InvalidTimestamp {
                    line: line_no,
                    value: timestamp.to_string(),
                };
                tracing::warn!("Skipping line: {}", err);
            }
            ClientMatch::NoMatch => {}
        }
    }

    pub fn get(&self, address: &str) -> Option<&[DateTime<Utc>]> {
        self.clients.get(address).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DateTime<Utc>])> {
        self.clients
            .iter()
            .map(|(address, timestamps)| (address.as_str(), timestamps.as_slice()))
    }

    /// Number of distinct clients
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Lines dropped because of an unparseable timestamp
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl LineObserver for ClientHistory {
    fn observe(&mut self, line_no: usize, line: &str) {
        self.ingest_line(line_no, line);
    }
}
