#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use forms_mcp_proxy::catalog::Catalog;
use forms_mcp_proxy::config::ServerConfig;
use forms_mcp_proxy::protocol::{JsonRpcRequest, RpcId};
use forms_mcp_proxy::upstream::UpstreamClient;
use forms_mcp_proxy::ProxyContext;
use serde_json::Value;

/// An address nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn test_config(upstream_url: &str, timeout: Duration) -> ServerConfig {
    ServerConfig {
        upstream_url: upstream_url.to_string(),
        request_timeout: timeout,
        debug: false,
    }
}

pub fn test_client(upstream_url: &str, timeout: Duration) -> UpstreamClient {
    UpstreamClient::new(&test_config(upstream_url, timeout)).unwrap()
}

pub fn test_context(upstream_url: &str, timeout: Duration) -> ProxyContext {
    ProxyContext::new(
        Catalog::builtin().unwrap(),
        Arc::new(test_client(upstream_url, timeout)),
    )
}

pub fn request(id: i64, method: &str, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest::new(Some(RpcId::Number(id)), method, params)
}
