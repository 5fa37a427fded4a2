use std::io::{self, Write};
use std::path::Path;

use engine_logging::{engine_error, engine_info, engine_warn};
use thiserror::Error;
use tracking_core::{describe, Batch, Receipt, TrackingResult};

use crate::{
    load_batches, ApiError, Authenticator, BearerToken, Credentials, FileReadError, TrackingApi,
};

/// Errors that abort a run. Receipt and date failures never surface here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("authentication failed: {0}")]
    Auth(#[source] ApiError),
    #[error(transparent)]
    FileRead(#[from] FileReadError),
    #[error("batch {batch} of {total} was not accepted: {source}")]
    Submission {
        batch: usize,
        total: usize,
        #[source]
        source: ApiError,
    },
    #[error("cannot write results: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub batches: usize,
    pub receipts: usize,
    pub printed: usize,
    pub failed_receipts: usize,
    pub unformatted_dates: usize,
    pub items_without_events: usize,
}

/// Authenticate once, load the input file, submit every batch, then check
/// every receipt and print one line per tracked item to `out`.
pub async fn run<C, W>(
    client: &C,
    credentials: &Credentials,
    input: &Path,
    out: &mut W,
) -> Result<RunSummary, RunError>
where
    C: Authenticator + TrackingApi + ?Sized,
    W: Write,
{
    let token = client
        .authenticate(credentials)
        .await
        .map_err(RunError::Auth)?;
    engine_info!("authenticated as {:?}", credentials.username);

    let batches = load_batches(input)?;
    engine_info!("loaded {} batch(es) from {:?}", batches.len(), input);

    let receipts = submit_all(client, &batches, &token).await?;

    let mut summary = RunSummary {
        batches: batches.len(),
        receipts: receipts.len(),
        ..RunSummary::default()
    };
    poll_all(client, &receipts, &token, out, &mut summary).await?;
    Ok(summary)
}

/// Submit batches in order. The first rejected batch stops submission.
pub async fn submit_all<A: TrackingApi + ?Sized>(
    api: &A,
    batches: &[Batch],
    token: &BearerToken,
) -> Result<Vec<Receipt>, RunError> {
    let total = batches.len();
    let mut receipts = Vec::with_capacity(total);
    for (index, batch) in batches.iter().enumerate() {
        let receipt = api
            .submit(batch, token)
            .await
            .map_err(|source| RunError::Submission {
                batch: index + 1,
                total,
                source,
            })?;
        engine_info!(
            "batch {}/{} registered ({} codes), receipt: {}",
            index + 1,
            total,
            batch.len(),
            receipt
        );
        receipts.push(receipt);
    }
    Ok(receipts)
}

/// Check each receipt exactly once and print its results.
///
/// A failed check is logged and counted; the remaining receipts are still
/// processed. Only a write failure on `out` stops the loop.
pub async fn poll_all<A, W>(
    api: &A,
    receipts: &[Receipt],
    token: &BearerToken,
    out: &mut W,
    summary: &mut RunSummary,
) -> Result<(), RunError>
where
    A: TrackingApi + ?Sized,
    W: Write,
{
    for receipt in receipts {
        match api.check_receipt(receipt, token).await {
            Ok(results) => {
                if results.is_empty() {
                    engine_warn!("receipt {} returned no objects yet", receipt);
                }
                print_results(&results, out, summary)?;
            }
            Err(err) => {
                engine_error!("receipt {} check failed: {}", receipt, err);
                summary.failed_receipts += 1;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Write one line per item; date failures are logged and the line still printed.
pub fn print_results<W: Write>(
    results: &[TrackingResult],
    out: &mut W,
    summary: &mut RunSummary,
) -> io::Result<()> {
    for item in results {
        let Some(line) = describe(item) else {
            engine_warn!("object {:?} has no events", item.code);
            summary.items_without_events += 1;
            continue;
        };
        if let Some(err) = &line.format_error {
            engine_error!("object {:?}: {}", item.code, err);
            summary.unformatted_dates += 1;
        }
        writeln!(out, "{}", line.text)?;
        summary.printed += 1;
    }
    Ok(())
}
