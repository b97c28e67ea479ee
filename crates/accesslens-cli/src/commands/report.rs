use super::{agents, clients, endpoints, load_log};
use crate::OutputFormat;
use crate::render;
use accesslens_core::analysis::{
    EndpointCounter, EndpointStats, LineObserver, RecordCounter, TallyStats, scan,
};
use accesslens_detectors::{
    BurstAnalyzer, BurstReport, BurstWindow, ClientHistory, UserAgentCounter,
};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Every report produced from one read of the log
#[derive(Debug, Clone, Serialize)]
pub struct AccessReport {
    pub lines: usize,
    /// Lines where timestamp, client, request line and user agent all parsed
    pub complete_records: usize,
    pub endpoints: EndpointStats,
    pub clients: BurstReport,
    pub user_agents: TallyStats,
}

/// Tally endpoints, agents and client histories line by line, then run the
/// burst analysis once the whole log has been seen
pub fn analyze_log(file: &Path, window_secs: f64) -> Result<AccessReport> {
    let analyzer = BurstAnalyzer::new(BurstWindow::from_secs(window_secs)?);
    let log = load_log(file)?;

    let mut endpoint_counter = EndpointCounter::new();
    let mut agent_counter = UserAgentCounter::new();
    let mut history = ClientHistory::new();
    let mut records = RecordCounter::default();
    let mut observers: [&mut dyn LineObserver; 4] = [
        &mut endpoint_counter,
        &mut agent_counter,
        &mut history,
        &mut records,
    ];
    scan(&log, &mut observers);

    if history.skipped() > 0 {
        tracing::warn!(
            "{} lines skipped because of unparseable timestamps",
            history.skipped()
        );
    }

    Ok(AccessReport {
        lines: log.len(),
        complete_records: records.complete,
        endpoints: endpoint_counter.finish(),
        clients: analyzer.evaluate(&history),
        user_agents: agent_counter.finish(),
    })
}

pub fn execute(file: &Path, window_secs: f64, format: OutputFormat) -> Result<()> {
    tracing::info!("Building full report for: {}", file.display());

    if format == OutputFormat::Pretty {
        render::print_heading(&file.display().to_string());
    }

    let report = analyze_log(file, window_secs)?;

    match format {
        OutputFormat::Json => render::print_json(&report)?,
        OutputFormat::Table => {
            endpoints::output_table(&report.endpoints);
            println!();
            clients::output_table(&report.clients);
            println!();
            agents::output_table(&report.user_agents);
        }
        OutputFormat::Pretty => {
            endpoints::output_pretty(&report.endpoints);
            render::print_burst_report(&report.clients);
            agents::output_pretty(&report.user_agents);
        }
    }

    Ok(())
}
