//! Collaborators the runtime drives but does not own: the page hosting the
//! status line and action controls, the telemetry reporter and the
//! notification utility.

use serde::Serialize;
use std::fmt;

/// The surface a batch reports progress to.
pub trait Page {
    fn set_status(&self, text: &str);
    /// Enable or disable both action controls (verify and add).
    fn set_controls_enabled(&self, enabled: bool);
    fn reload(&self);
}

/// Extra context attached to a telemetry message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TelemetryExtra {
    pub url: String,
    pub status: String,
    pub error: String,
}

/// Fire-and-forget error reporter.
pub trait Telemetry {
    fn capture_message(&self, message: &str, extra: &TelemetryExtra);
}

/// Reports telemetry as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn capture_message(&self, message: &str, extra: &TelemetryExtra) {
        tracing::error!(
            url = %extra.url,
            status = %extra.status,
            error = %extra.error,
            "{}",
            message
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// Non-blocking user notification.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}
