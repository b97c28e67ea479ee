use super::{Analyzer, EndpointStats, LineObserver, Tally};
use crate::Result;
use crate::log::{LineExtractor, LogFile};

/// Running endpoint and method tallies
#[derive(Debug, Default)]
pub struct EndpointCounter {
    endpoints: Tally,
    methods: Tally,
}

impl EndpointCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> EndpointStats {
        EndpointStats {
            endpoints: self.endpoints.stats(),
            methods: self.methods.stats(),
        }
    }
}

impl LineObserver for EndpointCounter {
    fn observe(&mut self, _line_no: usize, line: &str) {
        if let Some(request) = LineExtractor::request(line) {
            self.endpoints.increment(request.path);
            self.methods.increment(request.method.as_str());
        }
    }
}

pub struct EndpointAnalyzer;

impl Analyzer for EndpointAnalyzer {
    type Output = EndpointStats;

    fn analyze(&self, log: &LogFile) -> Result<Self::Output> {
        tracing::debug!("Analyzing endpoint statistics");

        let mut counter = EndpointCounter::new();
        for (line_no, line) in log.numbered_lines() {
            counter.observe(line_no, line);
        }
        let stats = counter.finish();

        tracing::info!(
            "Endpoint analysis complete: {} requests, {} endpoints",
            stats.endpoints.total,
            stats.endpoints.unique
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogReader;

    #[test]
    fn test_counts_endpoints_and_methods() {
        let log = LogReader::from_str(concat!(
            "2024-03-01T12:00:00.000Z 10.0.0.1 \"GET /api/users HTTP/1.1\" 200 \"curl\"\n",
            "2024-03-01T12:00:01.000Z 10.0.0.2 \"POST /api/users HTTP/1.1\" 201 \"curl\"\n",
            "2024-03-01T12:00:02.000Z 10.0.0.1 \"GET /health HTTP/1.1\" 200 \"curl\"\n",
            "not a log line\n",
        ));

        let stats = EndpointAnalyzer.analyze(&log).unwrap();

        assert_eq!(stats.endpoints.total, 3);
        assert_eq!(stats.endpoints.unique, 2);
        assert_eq!(stats.endpoints.entries[0].key, "/api/users");
        assert_eq!(stats.endpoints.entries[0].count, 2);

        let top = stats.endpoints.top.unwrap();
        assert_eq!(top.key, "/api/users");
        assert!((top.percentage - 200.0 / 3.0).abs() < 1e-9);

        assert_eq!(stats.methods.entries[0].key, "GET");
        assert_eq!(stats.methods.entries[0].count, 2);
        assert_eq!(stats.methods.entries[1].key, "POST");
    }

    #[test]
    fn test_line_without_client_still_counts_endpoint() {
        let log = LogReader::from_str("\"DELETE /items/7 HTTP/2\"");
        let stats = EndpointAnalyzer.analyze(&log).unwrap();
        assert_eq!(stats.endpoints.total, 1);
        assert_eq!(stats.methods.entries[0].key, "DELETE");
    }

    #[test]
    fn test_empty_log() {
        let stats = EndpointAnalyzer.analyze(&LogFile::default()).unwrap();
        assert_eq!(stats.endpoints.total, 0);
        assert!(stats.endpoints.top.is_none());
        assert!(stats.methods.entries.is_empty());
    }
}
