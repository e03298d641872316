pub mod batch;
pub mod config;
pub mod error;
pub mod host;
pub mod ops;
pub mod storage;
pub mod transport;

pub use batch::{BatchCounter, BatchOutcome, BatchRunner, Tally};
pub use config::{Config, Endpoints, ExportSettings, LineEndingSetting, TableSettings};
pub use error::{Error, Result};
pub use host::{Notifier, Page, Severity, Telemetry, TelemetryExtra, TracingTelemetry};
pub use ops::{ExportOutcome, ExportService};
pub use storage::{DirectorySink, DownloadSink};
pub use transport::{HttpMethod, HttpTransport, RequestSpec, Transport, TransportError};
