use super::load_log;
use crate::OutputFormat;
use crate::render;
use accesslens_core::analysis::{Analyzer, EndpointAnalyzer, EndpointStats};
use anyhow::Result;
use std::path::Path;

/// Analyze a log file and return endpoint and method tallies
pub fn analyze_endpoints(file: &Path) -> Result<EndpointStats> {
    let log = load_log(file)?;
    Ok(EndpointAnalyzer.analyze(&log)?)
}

pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!("Analyzing endpoints in: {}", file.display());

    if format == OutputFormat::Pretty {
        render::print_heading(&file.display().to_string());
    }

    let stats = analyze_endpoints(file)?;

    match format {
        OutputFormat::Json => render::print_json(&stats)?,
        OutputFormat::Table => output_table(&stats),
        OutputFormat::Pretty => output_pretty(&stats),
    }

    Ok(())
}

pub(crate) fn output_pretty(stats: &EndpointStats) {
    render::print_tally_table("Endpoint", "Request Count", &stats.endpoints);
    render::print_tally_table("HTTP Method", "Request Count", &stats.methods);

    render::print_summary_heading();
    println!("Total requests: {}", stats.endpoints.total);
    println!("Unique endpoints: {}", stats.endpoints.unique);
    if let Some(ref top) = stats.endpoints.top {
        render::print_top_line("Most accessed endpoint", top);
    }
}

pub(crate) fn output_table(stats: &EndpointStats) {
    render::print_tally_csv("Endpoint", &stats.endpoints);
    println!();
    render::print_tally_csv("Method", &stats.methods);
    println!();
    println!("Metric,Value");
    println!("Total Requests,{}", stats.endpoints.total);
    println!("Unique Endpoints,{}", stats.endpoints.unique);
}
