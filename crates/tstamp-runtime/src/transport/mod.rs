//! One-shot JSON requests against the configured endpoints.

mod http;

pub use http::HttpTransport;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            _ => Err(crate::Error::Config(format!("Unsupported HTTP method: {}", s))),
        }
    }
}

/// A single request: where to send it and the form fields it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Why a request did not produce a JSON document.
///
/// `status` is a short category (`error`, `parsererror`, `timeout`) and
/// `error` the human-readable detail; both end up in telemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub status: String,
    pub error: String,
}

impl TransportError {
    pub fn new(status: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            error: error.into(),
        }
    }

    /// Server answered with a non-success status; `reason` is its reason phrase.
    pub fn http(reason: impl Into<String>) -> Self {
        Self::new("error", reason)
    }

    /// Connection-level failure, no response.
    pub fn network(detail: impl Into<String>) -> Self {
        Self::new("error", detail)
    }

    /// Response body was not JSON.
    pub fn parse(detail: impl Into<String>) -> Self {
        Self::new("parsererror", detail)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.is_empty() {
            write!(f, "{}", self.status)
        } else {
            write!(f, "{}: {}", self.status, self.error)
        }
    }
}

impl std::error::Error for TransportError {}

/// Sends requests and decodes their JSON responses.
///
/// Calls must not wait for each other: the batch runner keeps every request
/// of a batch in flight at once and handles completions in arrival order.
pub trait Transport {
    fn send(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<Value, TransportError>>;
}
