use super::load_log;
use crate::OutputFormat;
use crate::render;
use accesslens_core::analysis::Analyzer;
use accesslens_detectors::{BurstAnalyzer, BurstReport, BurstWindow};
use anyhow::Result;
use std::path::Path;

/// Analyze a log file and return per-client burst counts
pub fn analyze_clients(file: &Path, window_secs: f64) -> Result<BurstReport> {
    let analyzer = BurstAnalyzer::new(BurstWindow::from_secs(window_secs)?);
    let log = load_log(file)?;
    Ok(analyzer.analyze(&log)?)
}

pub fn execute(file: &Path, window_secs: f64, format: OutputFormat) -> Result<()> {
    tracing::info!("Analyzing client bursts in: {}", file.display());

    if format == OutputFormat::Pretty {
        render::print_heading(&file.display().to_string());
    }

    let report = analyze_clients(file, window_secs)?;

    match format {
        OutputFormat::Json => render::print_json(&report)?,
        OutputFormat::Table => output_table(&report),
        OutputFormat::Pretty => render::print_burst_report(&report),
    }

    Ok(())
}

pub(crate) fn output_table(report: &BurstReport) {
    render::print_burst_csv(report);
    println!();
    println!("Metric,Value");
    println!("Window (seconds),{}", report.window_secs);
    println!("Total Clients,{}", report.total_clients);
    println!("Clients With Bursts,{}", report.clients_with_bursts);
}
