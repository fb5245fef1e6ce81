use thiserror::Error;

/// Errors raised while resolving or forwarding a single inbound call.
///
/// Catalog-resolution kinds (`UnknownTool`, `UnknownResource`, `UnknownPrompt`)
/// and `ResourceReadFailed` surface to the client as JSON-RPC errors. The
/// upstream kinds are turned into in-band tool content by the tool-call path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP {status}: {status_text}")]
    UpstreamHttp { status: u16, status_text: String },

    #[error("Failed to communicate with upstream server: {cause}")]
    UpstreamUnreachable { cause: String },

    #[error("Malformed upstream response: {detail}")]
    MalformedUpstreamResponse { detail: String },

    #[error("Failed to get {resource}: {cause}")]
    ResourceFetch { resource: String, cause: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Unknown resource: {uri}")]
    UnknownResource { uri: String },

    #[error("Unknown prompt: {name}")]
    UnknownPrompt { name: String },

    #[error("Failed to read resource {uri}: {cause}")]
    ResourceReadFailed { uri: String, cause: String },
}

impl ProxyError {
    /// Stable snake_case name of the error kind, carried in JSON-RPC `data`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::UpstreamHttp { .. } => "upstream_http_error",
            Self::UpstreamUnreachable { .. } => "upstream_unreachable",
            Self::MalformedUpstreamResponse { .. } => "malformed_upstream_response",
            Self::ResourceFetch { .. } => "resource_fetch_error",
            Self::UnknownTool { .. } => "unknown_tool",
            Self::UnknownResource { .. } => "unknown_resource",
            Self::UnknownPrompt { .. } => "unknown_prompt",
            Self::ResourceReadFailed { .. } => "resource_read_failed",
        }
    }

    /// Map to the corresponding JSON-RPC 2.0 error code.
    ///
    /// Unknown catalog names → -32602 (Invalid params)
    /// Everything else      → -32603 (Internal error)
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::UnknownTool { .. } | Self::UnknownResource { .. } | Self::UnknownPrompt { .. } => {
                -32602
            }
            _ => -32603,
        }
    }
}
