pub mod add;
pub mod export;
pub mod list;
mod selection;
pub mod verify;

use anyhow::{Context, Result};
use std::future::Future;
use tstamp_runtime::BatchOutcome;

/// Drive a batch to completion on a single-threaded runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

/// Map a batch outcome to the process result.
fn finish(outcome: BatchOutcome) -> Result<()> {
    match outcome {
        BatchOutcome::Completed { total } => {
            tracing::info!(total, "batch finished");
            Ok(())
        }
        BatchOutcome::Failed { file_path, counter } => anyhow::bail!(
            "{} of {} requests failed ({})",
            counter.fail(),
            counter.total(),
            file_path
        ),
        BatchOutcome::ListUnavailable { status, error } => {
            anyhow::bail!("Could not fetch the file list: {} {}", status, error)
        }
        BatchOutcome::NothingSelected => {
            anyhow::bail!("No rows selected; pass --select FILE_ID or --all")
        }
    }
}
