mod adapters;
mod application;
mod cli;
mod markdown;
mod ports;
mod report_generation;
mod shared;

use adapters::outbound::network::BlackDuckClient;
use application::dto::ReportRequest;
use application::factories::{PresenterFactory, PresenterType};
use application::use_cases::GenerateReportUseCase;
use cli::Args;
use shared::error::ExitCode;
use shared::Result;
use std::process;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::RuntimeFailure.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits 2 on invalid input)
    let args = Args::parse_args();

    init_tracing(args.verbose);

    // Wire Ctrl-C to cooperative cancellation of in-flight network calls
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received; cancelling");
            signal_cancel.cancel();
        }
    });

    // Create adapters (Dependency Injection)
    let dashboard_repository = BlackDuckClient::new(&args.blackduck_url, args.blackduck_token)?;

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(dashboard_repository);

    // Execute use case
    let request = ReportRequest::new(args.project_name, args.project_version);
    let response = use_case.execute(request, &cancel).await?;

    // The console report always goes to stdout
    print!("{}", response.console_report);

    // Deliver the markdown report to the configured channel
    let presenter = PresenterFactory::create(PresenterType::from_environment());
    presenter.present(&response.markdown_report)?;

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Crate-level filter used when `RUST_LOG` is not set.
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "blackduck_report=info",
        1 => "blackduck_report=debug",
        _ => "blackduck_report=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "blackduck_report=info");
        assert_eq!(default_filter(1), "blackduck_report=debug");
        assert_eq!(default_filter(2), "blackduck_report=trace");
        assert_eq!(default_filter(7), "blackduck_report=trace");
    }
}
