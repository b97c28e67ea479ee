use accesslens_core::analysis::{TallyStats, TopEntry};
use accesslens_detectors::BurstReport;
use anyhow::Result;
use console::style;
use serde::Serialize;

const RULE_WIDTH: usize = 30;
const WIDE_RULE_WIDTH: usize = 60;

pub fn print_heading(file_label: &str) {
    println!("Analyzing log file: {}", file_label);
}

/// Two-column table, rows already sorted by count
pub fn print_tally_table(key_header: &str, value_header: &str, stats: &TallyStats) {
    println!("\n{}", style(format!("{} | {}", key_header, value_header)).bold());
    println!("{}", "-".repeat(RULE_WIDTH));
    for entry in &stats.entries {
        println!("{} | {}", entry.key, entry.count);
    }
}

pub fn print_summary_heading() {
    println!("\n{}", style("Summary:").bold());
}

/// `Label: key (N requests, P.P%)`
pub fn print_top_line(label: &str, top: &TopEntry) {
    println!(
        "{}: {} ({} requests, {:.1}%)",
        label,
        style(&top.key).green(),
        top.count,
        top.percentage
    );
}

/// Burst table plus its summary block
pub fn print_burst_report(report: &BurstReport) {
    println!(
        "\n{}",
        style(format!(
            "IP Address | Requests within {}-second window after first request",
            report.window_secs
        ))
        .bold()
    );
    println!("{}", "-".repeat(WIDE_RULE_WIDTH));
    for result in &report.results {
        println!("{} | {}", result.client_address, result.burst_count);
    }

    print_summary_heading();
    println!("Total unique IPs: {}", report.total_clients);
    println!(
        "IPs with multiple requests in window: {}",
        report.clients_with_bursts
    );
    if let Some(ref active) = report.most_active {
        println!(
            "Most active IP: {} with {} requests in window",
            style(&active.client_address).yellow(),
            active.burst_count
        );
    }
}

/// `Key,Count` rows for the table format
pub fn print_tally_csv(key_header: &str, stats: &TallyStats) {
    println!("{},Count", key_header);
    for entry in &stats.entries {
        println!("{},{}", entry.key, entry.count);
    }
}

pub fn print_burst_csv(report: &BurstReport) {
    println!("Client,Burst Count,Total Requests,First Request");
    for result in &report.results {
        let first = result
            .first_request_time
            .map(|ts| ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
            .unwrap_or_default();
        println!(
            "{},{},{},{}",
            result.client_address, result.burst_count, result.total_requests, first
        );
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
