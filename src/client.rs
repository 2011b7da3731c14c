//! Executing compiled queries against the scan endpoint.
//!
//! The [`Transport`] trait is the seam to the network; [`HttpTransport`] is
//! the `reqwest` implementation. No retries, no backoff and no timeout are
//! applied here: a failure goes straight back to the caller of
//! [`Screener::scan`].

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::header::{CONTENT_TYPE, COOKIE, USER_AGENT};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Result, ScreenerError};
use crate::query::Query;
use crate::response::{ScanResponse, ScanResult};
use crate::settings::ScreenerConfig;

/// Header name/value pairs sent with a request.
pub type Headers = Vec<(String, String)>;

/// Sends one JSON body and returns the parsed JSON reply.
pub trait Transport {
    fn post_json(&self, url: &str, headers: &[(String, String)], body: String)
        -> impl Future<Output = Result<Value>> + Send;
}

/// Joins a flat cookie mapping into one `Cookie` header value.
pub fn cookie_header(cookies: &BTreeMap<String, String>) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let joined = cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");
    Some(joined)
}

// ------------- HTTP -------------
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, headers: &[(String, String)], body: String) -> Result<Value> {
        let mut request = self.client.post(url).header(CONTENT_TYPE, "application/json").body(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send().await.map_err(|e| {
            warn!(error=%e, url, "request failed");
            ScreenerError::from(e)
        })?;
        let status = response.status();
        if !status.is_success() {
            let text = status.canonical_reason().unwrap_or_default().to_string();
            let detail = response.text().await.unwrap_or_default();
            warn!(code=%status.as_u16(), %text, %detail, "scan rejected");
            return Err(ScreenerError::Transport { status: status.as_u16(), text });
        }
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ScreenerError::MalformedResponse(e.to_string()))
    }
}

// ------------- Screener -------------
/// Runs queries with a given configuration over a transport.
#[derive(Debug, Clone)]
pub struct Screener<T: Transport = HttpTransport> {
    config: ScreenerConfig,
    transport: T,
}

impl Screener<HttpTransport> {
    pub fn new(config: ScreenerConfig) -> Self {
        Self { config, transport: HttpTransport::new() }
    }
}

impl<T: Transport> Screener<T> {
    pub fn with_transport(config: ScreenerConfig, transport: T) -> Self {
        Self { config, transport }
    }
    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn headers(&self) -> Headers {
        let mut headers = vec![(USER_AGENT.as_str().to_string(), self.config.user_agent.clone())];
        if let Some(cookie) = cookie_header(&self.config.cookies) {
            headers.push((COOKIE.as_str().to_string(), cookie));
        }
        headers
    }

    /// Sends the query and returns the service's document untouched.
    pub async fn scan_raw(&self, query: &Query) -> Result<Value> {
        let url = self.config.scan_url(query.primary_market());
        let body = query.to_json()?;
        debug!(%url, bytes = body.len(), "sending scan");
        self.transport.post_json(&url, &self.headers(), body).await
    }

    /// Sends the query and names every returned value after its column.
    pub async fn scan(&self, query: &Query) -> Result<ScanResult> {
        let raw = self.scan_raw(query).await?;
        let response = ScanResponse::from_value(raw)?;
        info!(total = response.total_count, rows = response.data.len(), "scan complete");
        Ok(response.map_columns(query.columns()))
    }
}
