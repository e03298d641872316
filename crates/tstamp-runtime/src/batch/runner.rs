use super::counter::{BatchCounter, Tally};
use crate::config::Endpoints;
use crate::host::{Page, Telemetry, TelemetryExtra};
use crate::transport::{RequestSpec, Transport, TransportError};
use crate::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;
use tracing::{debug, info, warn};
use tstamp_types::{FileRecord, ProviderFiles, VerifyListResponse};

const LIST_GATHERING: &str = "Storage files list gathering ...";
const LIST_FAILED: &str = "Error: Storage files list gathering failed";
const VERIFY_DONE: &str = "Verification (100%) and Refreshing...";
const ADD_LOADING: &str = "Addtimestamp loading ...";
const ADD_DONE: &str = "Added Timestamp (100%) and Refreshing...";
const ADD_FAILED: &str = "Error : Timestamp Add Failed";
const TELEMETRY_MESSAGE: &str = "Timestamp Add Error";

/// How a batch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every request succeeded and the page was reloaded.
    Completed { total: usize },
    /// At least one request failed; `file_path` names the file surfaced to
    /// the user.
    Failed {
        file_path: String,
        counter: BatchCounter,
    },
    /// The verify list could not be fetched.
    ListUnavailable { status: String, error: String },
    /// Nothing was selected, nothing was sent.
    NothingSelected,
}

/// A request together with the file it concerns.
struct Item {
    request: RequestSpec,
    file_path: String,
}

/// Fans a batch out as one request per file and reports progress to the page.
///
/// All requests of a batch are in flight at once. Completions are handled in
/// arrival order on the calling task, which owns the [`BatchCounter`].
pub struct BatchRunner<'a, T: Transport> {
    transport: &'a T,
    page: &'a dyn Page,
    telemetry: &'a dyn Telemetry,
    endpoints: &'a Endpoints,
}

impl<'a, T: Transport> BatchRunner<'a, T> {
    pub fn new(
        transport: &'a T,
        page: &'a dyn Page,
        telemetry: &'a dyn Telemetry,
        endpoints: &'a Endpoints,
    ) -> Self {
        Self {
            transport,
            page,
            telemetry,
            endpoints,
        }
    }

    /// Fetch the per-provider file list and verify every file in it.
    pub async fn run_verify(&self) -> Result<BatchOutcome> {
        let list_url = self.endpoints.require("verify_list")?;
        self.endpoints.require("verify_data")?;

        self.page.set_controls_enabled(false);
        self.page.set_status(LIST_GATHERING);

        let request = RequestSpec::new(self.endpoints.method, list_url);
        let listing = match self.transport.send(&request).await {
            Ok(body) => serde_json::from_value::<VerifyListResponse>(body)
                .map_err(|e| TransportError::parse(e.to_string())),
            Err(err) => Err(err),
        };

        match listing {
            Ok(listing) => self.verify_files(&listing.provider_list).await,
            Err(err) => {
                warn!(url = list_url, status = %err.status, "file list request failed");
                self.telemetry
                    .capture_message(TELEMETRY_MESSAGE, &extra(list_url, &err));
                self.page.set_controls_enabled(true);
                self.page.set_status(LIST_FAILED);
                Ok(BatchOutcome::ListUnavailable {
                    status: err.status,
                    error: err.error,
                })
            }
        }
    }

    /// Verify every file of `groups`, one request each.
    ///
    /// Only the failure that settles the batch is surfaced; earlier failures
    /// are counted silently. When the settling completion is a success, the
    /// most recent failure is surfaced instead.
    pub async fn verify_files(&self, groups: &[ProviderFiles]) -> Result<BatchOutcome> {
        let url = self.endpoints.require("verify_data")?;
        let method = self.endpoints.method;
        let items: Vec<Item> = groups
            .iter()
            .flat_map(|group| {
                group.provider_file_list.iter().map(move |file| Item {
                    request: RequestSpec::new(method, url)
                        .field("provider", group.provider.as_str())
                        .field("file_id", file.file_id.as_str())
                        .field("file_path", file.file_path.as_str())
                        .field("size", file.size.as_str())
                        .field("created", file.created.as_str())
                        .field("modified", file.modified.as_str())
                        .field("file_version", file.file_version.as_str()),
                    file_path: file.file_path.clone(),
                })
            })
            .collect();

        let mut counter = BatchCounter::new(items.len());
        if counter.is_settled() {
            info!("no files to verify");
            self.page.set_status(VERIFY_DONE);
            self.page.reload();
            return Ok(BatchOutcome::Completed { total: 0 });
        }

        let mut last_failure: Option<(String, TransportError)> = None;
        let mut outcome = None;
        let mut in_flight = dispatch(self.transport, items);

        while let Some((item, result)) = in_flight.next().await {
            let tally = match result {
                Ok(_) => {
                    let tally = counter.record_success();
                    self.page.set_status(&format!(
                        "Verification files : {} / {} ...",
                        counter.success(),
                        counter.total()
                    ));
                    if tally == Tally::Succeeded {
                        self.page.set_status(VERIFY_DONE);
                    }
                    tally
                }
                Err(err) => {
                    warn!(file_path = %item.file_path, status = %err.status, "verification failed");
                    last_failure = Some((item.file_path, err));
                    counter.record_failure()
                }
            };

            match tally {
                Tally::Pending => {}
                Tally::Succeeded => {
                    info!(total = counter.total(), "verification complete");
                    self.page.reload();
                    outcome = Some(BatchOutcome::Completed {
                        total: counter.total(),
                    });
                }
                Tally::Exhausted => {
                    if let Some((file_path, err)) = last_failure.take() {
                        self.telemetry.capture_message(
                            &format!("{}: {}", TELEMETRY_MESSAGE, file_path),
                            &extra(url, &err),
                        );
                        self.page.set_controls_enabled(true);
                        self.page.set_status(&format!("Error: {}", file_path));
                        outcome = Some(BatchOutcome::Failed { file_path, counter });
                    }
                }
            }
        }

        outcome.ok_or_else(|| {
            crate::Error::InvalidOperation("verification batch ended unsettled".to_string())
        })
    }

    /// Add a timestamp to each of `records`.
    ///
    /// Every failure is reported as it arrives; outstanding requests are
    /// still drained and counted.
    pub async fn run_add(&self, records: &[&FileRecord]) -> Result<BatchOutcome> {
        if records.is_empty() {
            return Ok(BatchOutcome::NothingSelected);
        }
        let url = self.endpoints.require("add")?;

        self.page.set_controls_enabled(false);
        self.page.set_status(ADD_LOADING);

        let items: Vec<Item> = records
            .iter()
            .map(|record| Item {
                request: RequestSpec::new(self.endpoints.method, url)
                    .field("provider", record.text("provider"))
                    .field("file_id", record.text("file_id"))
                    .field("file_path", record.text("file_path"))
                    .field("file_version", record.text("file_version")),
                file_path: record.text("file_path").to_string(),
            })
            .collect();

        let mut counter = BatchCounter::new(items.len());
        let mut first_failure: Option<String> = None;
        let mut in_flight = dispatch(self.transport, items);

        while let Some((item, result)) = in_flight.next().await {
            match result {
                Ok(_) => {
                    let tally = counter.record_success();
                    self.page.set_status(&format!(
                        "Adding Timestamp files : {} / {} ...",
                        counter.success(),
                        counter.total()
                    ));
                    if tally == Tally::Succeeded {
                        info!(total = counter.total(), "timestamps added");
                        self.page.set_status(ADD_DONE);
                        self.page.reload();
                    }
                }
                Err(err) => {
                    counter.record_failure();
                    warn!(file_path = %item.file_path, status = %err.status, "timestamp add failed");
                    self.telemetry.capture_message(
                        &format!("{}: {}", TELEMETRY_MESSAGE, item.file_path),
                        &extra(url, &err),
                    );
                    self.page.set_controls_enabled(true);
                    self.page.set_status(ADD_FAILED);
                    first_failure.get_or_insert(item.file_path);
                }
            }
        }

        Ok(match first_failure {
            Some(file_path) => BatchOutcome::Failed { file_path, counter },
            None => BatchOutcome::Completed {
                total: counter.total(),
            },
        })
    }
}

type Completion = (Item, std::result::Result<Value, TransportError>);

/// Start one request per item; completions come back in arrival order.
fn dispatch<'t, T: Transport>(
    transport: &'t T,
    items: Vec<Item>,
) -> FuturesUnordered<impl Future<Output = Completion> + 't> {
    items
        .into_iter()
        .map(move |item| async move {
            debug!(url = %item.request.url, file_path = %item.file_path, "dispatching");
            let result = transport.send(&item.request).await;
            (item, result)
        })
        .collect()
}

fn extra(url: &str, err: &TransportError) -> TelemetryExtra {
    TelemetryExtra {
        url: url.to_string(),
        status: err.status.clone(),
        error: err.error.clone(),
    }
}
