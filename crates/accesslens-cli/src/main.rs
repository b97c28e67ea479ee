use accesslens_cli::cli::{Cli, Commands};
use accesslens_cli::commands;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => Ok(()),
        // A missing or unreadable log is reported, not treated as a crash
        Err(err) => match err.downcast_ref::<accesslens_core::Error>() {
            Some(accesslens_core::Error::Io(cause)) => {
                eprintln!("Error reading file: {}", cause);
                Ok(())
            }
            Some(core_err) => {
                eprintln!("Error: {}", core_err);
                Ok(())
            }
            None => Err(err),
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    tracing::debug!("Output format: {}", format.as_str());

    match cli.command {
        Commands::Endpoints { log } => commands::endpoints::execute(&log.file, format),
        Commands::Clients { log, window } => {
            commands::clients::execute(&log.file, window, format)
        }
        Commands::Agents { log } => commands::agents::execute(&log.file, format),
        Commands::Report { log, window } => commands::report::execute(&log.file, window, format),
        Commands::Completion { shell } => commands::completion::execute(shell),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("accesslens=debug,accesslens_core=debug,accesslens_detectors=debug")
    } else {
        EnvFilter::new("accesslens=info,accesslens_core=warn,accesslens_detectors=warn")
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
