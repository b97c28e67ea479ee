mod endpoints;
mod tally;

pub use endpoints::{EndpointAnalyzer, EndpointCounter};
pub use tally::{Tally, TallyEntry, TallyStats, TopEntry, percentage};

use crate::log::{LineExtractor, LogFile};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointStats {
    pub endpoints: TallyStats,
    pub methods: TallyStats,
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, log: &LogFile) -> crate::Result<Self::Output>;
}

/// Per-line accumulator, so several reports can share one pass over a log
pub trait LineObserver {
    fn observe(&mut self, line_no: usize, line: &str);
}

/// Feed every line of `log` to each observer in turn
pub fn scan(log: &LogFile, observers: &mut [&mut dyn LineObserver]) {
    for (line_no, line) in log.numbered_lines() {
        for observer in observers.iter_mut() {
            observer.observe(line_no, line);
        }
    }
}

/// Counts lines where every extraction pass produced a full record
#[derive(Debug, Default)]
pub struct RecordCounter {
    pub complete: usize,
}

impl LineObserver for RecordCounter {
    fn observe(&mut self, _line_no: usize, line: &str) {
        if LineExtractor::extract(line).is_some() {
            self.complete += 1;
        }
    }
}
