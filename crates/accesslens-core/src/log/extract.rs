use super::types::{ClientHit, ClientMatch, HttpMethod, LogRecord, RequestLine};
use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

/// Millisecond-precision ISO-8601 UTC, e.g. `2024-03-01T12:00:00.000Z`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

lazy_static! {
    static ref CLIENT_PATTERN: Regex =
        Regex::new(r"(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z) (\d+\.\d+\.\d+\.\d+)").unwrap();
    static ref REQUEST_PATTERN: Regex =
        Regex::new(r#""(GET|POST|PUT|DELETE|PATCH|OPTIONS) ([^ ]*) HTTP"#).unwrap();
    static ref USER_AGENT_PATTERN: Regex = Regex::new(r#""([^"]*)"$"#).unwrap();
}

/// Field extraction for the fixed access log line shape.
///
/// Each pass is independent, so a line may yield a request line but no
/// client, or a user agent but nothing else. A pass that does not match is
/// `None`/`NoMatch`, never an error.
pub struct LineExtractor;

impl LineExtractor {
    /// Extract the timestamp and client address pair
    pub fn client(line: &str) -> ClientMatch<'_> {
        let Some(caps) = CLIENT_PATTERN.captures(line) else {
            return ClientMatch::NoMatch;
        };

        let (Some(raw_ts), Some(address)) = (caps.get(1), caps.get(2)) else {
            return ClientMatch::NoMatch;
        };

        match parse_timestamp(raw_ts.as_str()) {
            Some(timestamp) => ClientMatch::Matched(ClientHit {
                timestamp,
                address: address.as_str(),
            }),
            None => ClientMatch::Malformed {
                timestamp: raw_ts.as_str(),
            },
        }
    }

    /// Extract the method and path from the quoted request line
    pub fn request(line: &str) -> Option<RequestLine<'_>> {
        let caps = REQUEST_PATTERN.captures(line)?;
        let method = caps.get(1)?.as_str().parse::<HttpMethod>().ok()?;
        let path = caps.get(2)?.as_str();
        Some(RequestLine { method, path })
    }

    /// Extract the final double-quoted field on the line
    pub fn user_agent(line: &str) -> Option<&str> {
        USER_AGENT_PATTERN
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Run every pass and build a full record when all of them match
    pub fn extract(line: &str) -> Option<LogRecord> {
        let ClientMatch::Matched(hit) = Self::client(line) else {
            return None;
        };
        let request = Self::request(line)?;
        let user_agent = Self::user_agent(line)?;

        Some(LogRecord {
            timestamp: hit.timestamp,
            client_address: hit.address.to_string(),
            method: request.method,
            path: request.path.to_string(),
            user_agent: user_agent.to_string(),
        })
    }
}

/// Strictly parse a log timestamp, rejecting impossible dates and times
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
