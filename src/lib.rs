//! MCP proxy for Adaptive Form Block styling guidance.
//!
//! Advertises a fixed catalog of tools, resources and prompts over JSON-RPC 2.0
//! stdio and forwards tool calls and resource reads to a single upstream HTTP
//! service, relaying its JSON answers back as text content.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod upstream;

pub mod schema;

use std::sync::Arc;

use catalog::Catalog;
use upstream::UpstreamApi;

/// Everything a request handler can reach. Built once at startup.
#[derive(Clone)]
pub struct ProxyContext {
    pub catalog: Arc<Catalog>,
    pub upstream: Arc<dyn UpstreamApi>,
}

impl ProxyContext {
    pub fn new(catalog: Catalog, upstream: Arc<dyn UpstreamApi>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            upstream,
        }
    }
}
