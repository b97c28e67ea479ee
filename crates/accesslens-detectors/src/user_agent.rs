use accesslens_core::Result;
use accesslens_core::analysis::{Analyzer, LineObserver, Tally, TallyStats};
use accesslens_core::log::{LineExtractor, LogFile};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UserAgentCategory {
    ChromeMac,
    ChromeWindows,
    ChromeLinux,
    ChromeOther,
    Safari,
    Firefox,
    Edge,
    Other,
}

impl UserAgentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserAgentCategory::ChromeMac => "Chrome (Mac)",
            UserAgentCategory::ChromeWindows => "Chrome (Windows)",
            UserAgentCategory::ChromeLinux => "Chrome (Linux)",
            UserAgentCategory::ChromeOther => "Chrome (Other)",
            UserAgentCategory::Safari => "Safari",
            UserAgentCategory::Firefox => "Firefox",
            UserAgentCategory::Edge => "Edge",
            UserAgentCategory::Other => "Other",
        }
    }

    /// Classify a raw user agent string.
    ///
    /// Checks are case-sensitive substring tests applied in priority order.
    /// Chromium-based Edge also advertises Chrome and Safari, so it lands in
    /// a Chrome bucket.
    pub fn classify(user_agent: &str) -> Self {
        let chrome = user_agent.contains("Chrome");
        let safari = user_agent.contains("Safari");

        if chrome && safari {
            if user_agent.contains("Macintosh") {
                UserAgentCategory::ChromeMac
            } else if user_agent.contains("Windows") {
                UserAgentCategory::ChromeWindows
            } else if user_agent.contains("Linux") {
                UserAgentCategory::ChromeLinux
            } else {
                UserAgentCategory::ChromeOther
            }
        } else if safari && !chrome {
            UserAgentCategory::Safari
        } else if user_agent.contains("Firefox") {
            UserAgentCategory::Firefox
        } else if user_agent.contains("Edge") {
            UserAgentCategory::Edge
        } else {
            UserAgentCategory::Other
        }
    }
}

impl fmt::Display for UserAgentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running user agent category tally
#[derive(Debug, Default)]
pub struct UserAgentCounter {
    categories: Tally,
}

impl UserAgentCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> TallyStats {
        self.categories.stats()
    }
}

impl LineObserver for UserAgentCounter {
    fn observe(&mut self, _line_no: usize, line: &str) {
        if let Some(user_agent) = LineExtractor::user_agent(line) {
            self.categories
                .increment(UserAgentCategory::classify(user_agent).as_str());
        }
    }
}

pub struct UserAgentAnalyzer;

impl Analyzer for UserAgentAnalyzer {
    type Output = TallyStats;

    fn analyze(&self, log: &LogFile) -> Result<Self::Output> {
        tracing::debug!("Categorizing user agents");

        let mut counter = UserAgentCounter::new();
        for (line_no, line) in log.numbered_lines() {
            counter.observe(line_no, line);
        }
        let stats = counter.finish();

        tracing::info!(
            "User agent analysis complete: {} requests, {} categories",
            stats.total,
            stats.unique
        );

        Ok(stats)
    }
}
