use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::catalog::ToolDefinition;
use crate::error::ProxyError;
use crate::protocol::{ToolCallParams, ToolResult};
use crate::ProxyContext;

/// Text returned when the upstream answers with neither data nor an error message.
pub const NO_DATA_FALLBACK: &str = "No data received";

#[derive(Debug, Serialize)]
pub struct ListToolsResult<'a> {
    pub tools: &'a [ToolDefinition],
}

/// Handle `tools/list`.
pub fn list(ctx: &ProxyContext) -> ListToolsResult<'_> {
    ListToolsResult {
        tools: ctx.catalog.tools(),
    }
}

/// Handle a `tools/call`.
///
/// An unknown tool name is a hard error. Once the endpoint is resolved the
/// call never fails: upstream failures come back as a tool result with
/// `isError: true` and the text `Error: <message>`.
pub async fn call(params: ToolCallParams, ctx: &ProxyContext) -> Result<ToolResult, ProxyError> {
    let path = ctx.catalog.resolve_endpoint(&params.name)?;
    let body = match params.arguments {
        None | Some(Value::Null) => json!({}),
        Some(arguments) => arguments,
    };

    debug!(tool = %params.name, path = %path, arguments = %body, "tool called");

    match ctx.upstream.post(path, &body).await {
        Ok(response) => {
            let text = response
                .data_text()
                .or_else(|| response.error_text())
                .unwrap_or_else(|| NO_DATA_FALLBACK.to_string());
            Ok(ToolResult::text(text))
        }
        Err(err) => {
            warn!(tool = %params.name, error = %err, "tool execution failed");
            Ok(err.into())
        }
    }
}
