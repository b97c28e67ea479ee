//! Per-client burst detection.
//!
//! Runs in two phases. The [`ClientHistory`] collector first scans the whole
//! log and groups timestamps by client address. Only then does
//! [`BurstAnalyzer`] sort each client's timestamps and count how many follow
//! the first request within the [`BurstWindow`]. Clients never interact, so
//! each history is scanned independently.

mod collector;
mod window;

pub use collector::ClientHistory;
pub use window::BurstWindow;

use accesslens_core::analysis::{Analyzer, LineObserver};
use accesslens_core::log::LogFile;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BurstResult {
    pub client_address: String,
    /// Requests after the first one that fell inside the window
    pub burst_count: usize,
    pub first_request_time: Option<DateTime<Utc>>,
    pub total_requests: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurstReport {
    pub window_secs: f64,
    /// Ordered by burst count descending, then client address ascending
    pub results: Vec<BurstResult>,
    pub total_clients: usize,
    pub clients_with_bursts: usize,
    pub most_active: Option<BurstResult>,
}

pub struct BurstAnalyzer {
    window: BurstWindow,
}

impl BurstAnalyzer {
    pub fn new(window: BurstWindow) -> Self {
        Self { window }
    }

    /// Compute one result per collected client
    pub fn evaluate(&self, history: &ClientHistory) -> BurstReport {
        let mut results: Vec<BurstResult> = history
            .iter()
            .map(|(address, timestamps)| {
                let (burst_count, first_request_time) = self.window.count(timestamps);
                BurstResult {
                    client_address: address.to_string(),
                    burst_count,
                    first_request_time,
                    total_requests: timestamps.len(),
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.burst_count
                .cmp(&a.burst_count)
                .then_with(|| a.client_address.cmp(&b.client_address))
        });

        let clients_with_bursts = results.iter().filter(|r| r.burst_count > 0).count();
        let most_active = results.first().filter(|r| r.burst_count > 0).cloned();

        tracing::info!(
            "Burst analysis complete: {} clients, {} with requests in window",
            results.len(),
            clients_with_bursts
        );

        BurstReport {
            window_secs: self.window.as_secs_f64(),
            total_clients: results.len(),
            clients_with_bursts,
            most_active,
            results,
        }
    }
}

impl Default for BurstAnalyzer {
    fn default() -> Self {
        Self::new(BurstWindow::default())
    }
}

impl Analyzer for BurstAnalyzer {
    type Output = BurstReport;

    fn analyze(&self, log: &LogFile) -> accesslens_core::Result<Self::Output> {
        tracing::debug!(
            "Analyzing request bursts with a {}s window",
            self.window.as_secs_f64()
        );

        let mut history = ClientHistory::new();
        for (line_no, line) in log.numbered_lines() {
            history.observe(line_no, line);
        }

        Ok(self.evaluate(&history))
    }
}
