use super::{HttpMethod, RequestSpec, Transport, TransportError};
use serde_json::Value;
use tracing::debug;

/// [`Transport`] backed by a shared `reqwest` client.
///
/// No timeout is configured: a request stays outstanding until the server
/// answers or the connection drops.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> crate::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// GET carries the fields as a query string, every other method as a form body.
    fn build(&self, request: &RequestSpec) -> reqwest::RequestBuilder {
        let url = request.url.as_str();
        match request.method {
            HttpMethod::Get => self.client.get(url).query(&request.fields),
            HttpMethod::Post => self.client.post(url).form(&request.fields),
            HttpMethod::Put => self.client.put(url).form(&request.fields),
            HttpMethod::Patch => self.client.patch(url).form(&request.fields),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &RequestSpec) -> Result<Value, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self
            .build(request)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default();
            return Err(TransportError::http(reason));
        }
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| TransportError::parse(e.to_string()))
    }
}
