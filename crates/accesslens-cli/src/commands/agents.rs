use super::load_log;
use crate::OutputFormat;
use crate::render;
use accesslens_core::analysis::{Analyzer, TallyStats};
use accesslens_detectors::UserAgentAnalyzer;
use anyhow::Result;
use std::path::Path;

/// Analyze a log file and return user agent category counts
pub fn analyze_agents(file: &Path) -> Result<TallyStats> {
    let log = load_log(file)?;
    Ok(UserAgentAnalyzer.analyze(&log)?)
}

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!("Analyzing user agents in: {}", file.display());

    if format == OutputFormat::Pretty {
        render::print_heading(&file.display().to_string());
    }

    let stats = analyze_agents(file)?;

    match format {
        OutputFormat::Json => render::print_json(&stats)?,
        OutputFormat::Table => output_table(&stats),
        OutputFormat::Pretty => output_pretty(&stats),
    }

    Ok(())
}

pub(crate) fn output_pretty(stats: &TallyStats) {
    render::print_tally_table("User Agent Type", "Request Count", stats);

    render::print_summary_heading();
    println!("Total requests: {}", stats.total);
    println!("Unique user agent types: {}", stats.unique);
    if let Some(ref top) = stats.top {
        render::print_top_line("Most common user agent", top);
    }
}

pub(crate) fn output_table(stats: &TallyStats) {
    render::print_tally_csv("User Agent Type", stats);
    println!();
    println!("Metric,Value");
    println!("Total Requests,{}", stats.total);
    println!("Unique User Agent Types,{}", stats.unique);
}
