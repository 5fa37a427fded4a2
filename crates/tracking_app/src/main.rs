mod cli;

use std::env;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use engine_logging::{engine_error, engine_info, engine_warn, LogDestination};
use tracking_engine::{run, ClientSettings, ReqwestTrackingClient, RunError, RunSummary};

use crate::cli::{normalize_args, resolve_credentials, Args, PASSWORD_ENV, USER_ENV};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse_from(normalize_args(env::args_os()));

    let destination = match &args.log_file {
        Some(path) => LogDestination::TerminalAndFile(path.clone()),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(&destination, args.log_level);

    if let Some(seconds) = args.seconds {
        engine_warn!("-s {} is accepted for compatibility and has no effect", seconds);
    }

    let credentials = resolve_credentials(
        &args,
        env::var(USER_ENV).ok(),
        env::var(PASSWORD_ENV).ok(),
    );
    let client = match ReqwestTrackingClient::new(args.endpoints(), ClientSettings::default()) {
        Ok(client) => client,
        Err(err) => {
            engine_error!("cannot build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    let outcome = run(&client, &credentials, &args.file, &mut out).await;
    ExitCode::from(exit_status(&outcome))
}

/// Log how the run ended and map it to a process exit status.
fn exit_status(outcome: &Result<RunSummary, RunError>) -> u8 {
    match outcome {
        Ok(summary) => {
            engine_info!(
                "done: {} batch(es), {} receipt(s), {} line(s) printed, {} receipt check(s) failed, {} date(s) unformatted, {} object(s) without events",
                summary.batches,
                summary.receipts,
                summary.printed,
                summary.failed_receipts,
                summary.unformatted_dates,
                summary.items_without_events
            );
            0
        }
        Err(err) => {
            engine_error!("{}", err);
            1
        }
    }
}
