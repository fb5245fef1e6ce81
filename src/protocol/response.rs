use serde::Serialize;
use serde_json::json;

use super::request::RpcId;
use crate::error::ProxyError;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// JSON-RPC 2.0 error object (protocol-level errors).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self { code: -32700, message: "Parse error".into(), data: None }
    }

    pub fn invalid_request() -> Self {
        Self { code: -32600, message: "Invalid Request".into(), data: None }
    }

    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self { code: -32600, message: detail.into(), data: None }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self { code: -32602, message: detail.into(), data: None }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self { code: -32603, message: detail.into(), data: None }
    }
}

/// Convert a dispatch failure into a JSON-RPC error.
///
/// The JSON-RPC `code` is derived from the error kind, the `message` is the
/// human-readable error, and `data.kind` names the kind for structured clients.
impl From<ProxyError> for JsonRpcError {
    fn from(err: ProxyError) -> Self {
        Self {
            code: err.json_rpc_code(),
            message: err.to_string(),
            data: Some(json!({ "kind": err.kind() })),
        }
    }
}

// ---------------------------------------------------------------------------
// MCP result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// A `text` content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".into(),
            text: text.into(),
        }
    }
}

/// MCP tool call result wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResult {
    pub content: Vec<TextContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent::new(text)],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent::new(text)],
            is_error: true,
        }
    }
}

/// Soft error: an upstream failure reported as tool content.
impl From<ProxyError> for ToolResult {
    fn from(err: ProxyError) -> Self {
        Self::error(format!("Error: {err}"))
    }
}

/// One document returned by `resources/read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceContents {
    pub uri: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResourceResult {
    pub contents: Vec<ResourceContents>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: TextContent,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: TextContent::new(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetPromptResult {
    pub description: String,
    pub messages: Vec<PromptMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_tool_result_omits_error_flag() {
        let value = serde_json::to_value(ToolResult::text("X")).unwrap();
        assert_eq!(value, json!({ "content": [{ "type": "text", "text": "X" }] }));
    }

    #[test]
    fn soft_error_is_prefixed_and_flagged() {
        let result: ToolResult = ProxyError::Timeout { timeout_ms: 100 }.into();
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["isError"], json!(true));
        assert_eq!(
            value["content"][0]["text"],
            json!("Error: Request timeout after 100ms")
        );
    }

    #[test]
    fn proxy_error_becomes_json_rpc_error_with_kind() {
        let err: JsonRpcError = ProxyError::UnknownTool { name: "nope".into() }.into();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Unknown tool: nope");
        assert_eq!(err.data, Some(json!({ "kind": "unknown_tool" })));
    }

    #[test]
    fn error_response_omits_result() {
        let resp = JsonRpcResponse::error(Some(RpcId::Number(7)), JsonRpcError::parse_error());
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["id"], json!(7));
        assert!(value.get("result").is_none());
        assert_eq!(value["error"]["code"], json!(-32700));
    }
}
