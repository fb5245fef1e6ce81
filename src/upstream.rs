//! HTTP client for the upstream styling service.
//!
//! Every call is a single, independent exchange against the configured base
//! URL. There is no retry: a failed call is reported once and the MCP client
//! decides whether to invoke the tool again.
//!
//! # Error Classification
//!
//! - Timer expiry or a reqwest timeout → `Timeout`
//! - Non-2xx status → `UpstreamHttp`
//! - Any other transport failure → `UpstreamUnreachable`
//! - A body that is not an upstream response object → `MalformedUpstreamResponse`
//!
//! The resource GETs fold all of the above into `ResourceFetch`.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::KnownResource;
use crate::config::ServerConfig;
use crate::error::ProxyError;

/// Timeout for health and resource GETs.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Path of the upstream liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// `User-Agent` sent on every upstream request.
pub const USER_AGENT: &str = concat!("forms-mcp-proxy/", env!("CARGO_PKG_VERSION"));

/// Body returned by the upstream tool endpoints.
///
/// Every field is optional and loosely typed; only `data` and `errorMessage`
/// feed the tool result, and either may hold any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<Value>,
}

impl UpstreamResponse {
    /// `data` rendered as text, if present and non-empty.
    ///
    /// String payloads are returned as-is; other JSON values as compact JSON.
    pub fn data_text(&self) -> Option<String> {
        self.data.as_ref().and_then(value_text)
    }

    /// `errorMessage` rendered as text, with the same rules as [`data_text`](Self::data_text).
    pub fn error_text(&self) -> Option<String> {
        self.error_message.as_ref().and_then(value_text)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Operations the dispatch layer needs from the upstream service.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// POST `body` as JSON to `path`.
    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamResponse, ProxyError>;

    /// Liveness probe. Never fails; any error reads as unhealthy.
    async fn health_check(&self) -> bool;

    /// Fetch one of the introspection resources as raw JSON.
    async fn fetch_resource(&self, resource: KnownResource) -> Result<Value, ProxyError>;
}

/// reqwest-backed upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: config.upstream_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn server_info(&self) -> Result<Value, ProxyError> {
        self.fetch_resource(KnownResource::ServerInfo).await
    }

    pub async fn system_info(&self) -> Result<Value, ProxyError> {
        self.fetch_resource(KnownResource::SystemInfo).await
    }

    async fn post_inner(&self, url: &str, body: &Value) -> Result<UpstreamResponse, ProxyError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_error(e, self.timeout))?;

        let response = ensure_success(response)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_error(e, self.timeout))?;

        serde_json::from_slice(&bytes).map_err(|e| ProxyError::MalformedUpstreamResponse {
            detail: e.to_string(),
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, ProxyError> {
        let response = self
            .client
            .get(url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|e| classify_error(e, PROBE_TIMEOUT))?;

        let response = ensure_success(response)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_error(e, PROBE_TIMEOUT))?;

        serde_json::from_slice(&bytes).map_err(|e| ProxyError::MalformedUpstreamResponse {
            detail: e.to_string(),
        })
    }
}

#[async_trait]
impl UpstreamApi for UpstreamClient {
    #[tracing::instrument(skip(self, body))]
    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamResponse, ProxyError> {
        let url = self.url(path);
        debug!(url = %url, body = %body, "forwarding request to upstream");

        let result = with_deadline(self.timeout, self.post_inner(&url, body)).await;

        match &result {
            Ok(response) => debug!(
                status = ?response.status,
                has_data = response.data.is_some(),
                "received upstream response"
            ),
            Err(e) => warn!(url = %url, error = %e, "upstream request failed"),
        }

        result
    }

    async fn health_check(&self) -> bool {
        let url = self.url(HEALTH_PATH);
        let result = self
            .client
            .get(&url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(resp) => {
                debug!(url = %url, status = %resp.status(), "upstream health check answered");
                resp.status().is_success()
            }
            Err(e) => {
                debug!(url = %url, error = %e, "upstream health check failed");
                false
            }
        }
    }

    async fn fetch_resource(&self, resource: KnownResource) -> Result<Value, ProxyError> {
        let url = self.url(resource.upstream_path());

        with_deadline(PROBE_TIMEOUT, self.get_json(&url))
            .await
            .map_err(|e| ProxyError::ResourceFetch {
                resource: resource.label().to_string(),
                cause: e.to_string(),
            })
    }
}

/// Bound the whole exchange, including body read, by `budget`.
async fn with_deadline<T, F>(budget: Duration, fut: F) -> Result<T, ProxyError>
where
    F: Future<Output = Result<T, ProxyError>>,
{
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => Err(ProxyError::Timeout {
            timeout_ms: budget.as_millis() as u64,
        }),
    }
}

fn classify_error(error: reqwest::Error, budget: Duration) -> ProxyError {
    if error.is_timeout() {
        ProxyError::Timeout {
            timeout_ms: budget.as_millis() as u64,
        }
    } else {
        ProxyError::UpstreamUnreachable {
            cause: error.to_string(),
        }
    }
}

fn ensure_success(response: Response) -> Result<Response, ProxyError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(http_error(status))
    }
}

fn http_error(status: StatusCode) -> ProxyError {
    ProxyError::UpstreamHttp {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> UpstreamResponse {
        serde_json::from_value(value).expect("upstream response parses")
    }

    #[test]
    fn data_text_prefers_strings_verbatim() {
        let response = parse(json!({ "status": "success", "data": "X" }));
        assert_eq!(response.data_text().as_deref(), Some("X"));
        assert_eq!(response.status, Some(json!("success")));
    }

    #[test]
    fn data_text_renders_structured_payloads() {
        let response = parse(json!({ "data": { "css": ".a{}" } }));
        assert_eq!(response.data_text().as_deref(), Some(r#"{"css":".a{}"}"#));
    }

    #[test]
    fn empty_fields_read_as_absent() {
        let response = parse(json!({ "status": "error", "data": "", "errorMessage": "" }));
        assert_eq!(response.data_text(), None);
        assert_eq!(response.error_text(), None);

        let response = parse(json!({ "data": null, "errorMessage": "boom" }));
        assert_eq!(response.data_text(), None);
        assert_eq!(response.error_text().as_deref(), Some("boom"));
    }

    #[test]
    fn loosely_typed_fields_still_parse() {
        let response = parse(json!({ "status": 200, "data": "X" }));
        assert_eq!(response.status, Some(json!(200)));
        assert_eq!(response.data_text().as_deref(), Some("X"));

        let response = parse(json!({ "status": false, "errorMessage": { "code": "E42" } }));
        assert_eq!(response.data_text(), None);
        assert_eq!(response.error_text().as_deref(), Some(r#"{"code":"E42"}"#));
    }

    #[test]
    fn http_error_uses_canonical_reason() {
        assert_eq!(
            http_error(StatusCode::NOT_FOUND),
            ProxyError::UpstreamHttp {
                status: 404,
                status_text: "Not Found".into()
            }
        );
    }

    #[test]
    fn client_trims_trailing_slash() {
        let config = ServerConfig::with_upstream_url("http://localhost:8080/");
        let client = UpstreamClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/health"), "http://localhost:8080/health");
    }

    #[tokio::test]
    async fn deadline_expiry_reports_budget() {
        let result: Result<(), ProxyError> = with_deadline(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        assert_eq!(result, Err(ProxyError::Timeout { timeout_ms: 10 }));
    }
}
