//! Recording fakes for the collaborators the runtime drives.
//!
//! Every fake keeps what it was asked to do so tests can assert on the exact
//! sequence of side effects.

use serde_json::{Value, json};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};
use tstamp_runtime::{
    DownloadSink, Notifier, Page, RequestSpec, Severity, Telemetry, TelemetryExtra, Transport,
    TransportError,
};

/// One call made against a [`RecordingPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Status(String),
    Controls(bool),
    Reload,
}

#[derive(Debug, Default)]
pub struct RecordingPage {
    events: Mutex<Vec<PageEvent>>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PageEvent::Status(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<String> {
        self.statuses().pop()
    }

    pub fn reload_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| **event == PageEvent::Reload)
            .count()
    }

    /// State of the action controls after the last toggle, if any.
    pub fn controls_enabled(&self) -> Option<bool> {
        self.events().into_iter().rev().find_map(|event| match event {
            PageEvent::Controls(enabled) => Some(enabled),
            _ => None,
        })
    }
}

impl Page for RecordingPage {
    fn set_status(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(PageEvent::Status(text.to_string()));
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.events.lock().unwrap().push(PageEvent::Controls(enabled));
    }

    fn reload(&self) {
        self.events.lock().unwrap().push(PageEvent::Reload);
    }
}

#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    messages: Mutex<Vec<(String, TelemetryExtra)>>,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, TelemetryExtra)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Telemetry for RecordingTelemetry {
    fn capture_message(&self, message: &str, extra: &TelemetryExtra) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), extra.clone()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(String, String, Severity)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(String, String, Severity)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.notices
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string(), severity));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub content_type: String,
    pub content: String,
}

/// Download sink that keeps files in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<SavedFile>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<SavedFile> {
        self.files.lock().unwrap().clone()
    }
}

impl DownloadSink for MemorySink {
    fn save(
        &self,
        file_name: &str,
        content_type: &str,
        content: &str,
    ) -> tstamp_runtime::Result<()> {
        self.files.lock().unwrap().push(SavedFile {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

/// Transport answering from a script instead of the network.
///
/// Requests are keyed by their `file_path` field, or by URL when they carry
/// none (the verify-list request). Unscripted keys answer `{}`. A delay of
/// `n` makes the response arrive after `n` scheduling rounds, which lets
/// tests fix the order completions are observed in.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, Result<Value, TransportError>>,
    delays: HashMap<String, usize>,
    sent: Mutex<Vec<RequestSpec>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: impl Into<String>, body: Value) -> Self {
        self.responses.insert(key.into(), Ok(body));
        self
    }

    pub fn fail(mut self, key: impl Into<String>, status: &str, error: &str) -> Self {
        self.responses
            .insert(key.into(), Err(TransportError::new(status, error)));
        self
    }

    pub fn delay(mut self, key: impl Into<String>, rounds: usize) -> Self {
        self.delays.insert(key.into(), rounds);
        self
    }

    /// Requests in the order they were handed to the transport.
    pub fn sent(&self) -> Vec<RequestSpec> {
        self.sent.lock().unwrap().clone()
    }

    fn key(request: &RequestSpec) -> String {
        request
            .field_value("file_path")
            .map(str::to_string)
            .unwrap_or_else(|| request.url.clone())
    }
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<Value, TransportError>> {
        self.sent.lock().unwrap().push(request.clone());

        let key = Self::key(request);
        let response = self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(json!({})));
        let rounds = self.delays.get(&key).copied().unwrap_or(0);

        async move {
            for _ in 0..rounds {
                YieldNow(false).await;
            }
            response
        }
    }
}

/// Returns `Pending` once, waking itself so it is polled again.
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
