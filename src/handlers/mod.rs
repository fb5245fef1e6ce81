pub mod prompts;
pub mod resources;
pub mod tools;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ProxyError;
use crate::protocol::{
    GetPromptParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ReadResourceParams, RpcId, ToolCallParams,
};
use crate::ProxyContext;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, ctx: &ProxyContext) -> Option<JsonRpcResponse> {
    if req.is_notification() {
        debug!(method = %req.method, "notification received");
        return None;
    }

    let id = req.id.clone();

    let response = match req.method.as_str() {
        "initialize" => {
            let params: InitializeParams = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value(v.clone()).ok())
                .unwrap_or_default();
            let client = params.client_info.as_ref();
            info!(
                client_name = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                protocol_version = params.protocol_version.as_deref().unwrap_or("unspecified"),
                "client initializing"
            );

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            JsonRpcResponse::success(id, result)
        }

        "ping" => JsonRpcResponse::success(id, serde_json::json!({})),

        "tools/list" => success(id, &tools::list(ctx)),

        "tools/call" => match parse_params::<ToolCallParams>(req) {
            Ok(params) => respond(id, tools::call(params, ctx).await),
            Err(err) => JsonRpcResponse::error(id, err),
        },

        "resources/list" => success(id, &resources::list(ctx)),

        "resources/read" => match parse_params::<ReadResourceParams>(req) {
            Ok(params) => respond(id, resources::read(params, ctx).await),
            Err(err) => JsonRpcResponse::error(id, err),
        },

        "prompts/list" => success(id, &prompts::list(ctx)),

        "prompts/get" => match parse_params::<GetPromptParams>(req) {
            Ok(params) => respond(id, prompts::get(params, ctx)),
            Err(err) => JsonRpcResponse::error(id, err),
        },

        _ => JsonRpcResponse::error(id, JsonRpcError::method_not_found(&req.method)),
    };

    debug!(
        method = %req.method,
        outcome = if response.is_error() { "failure" } else { "success" },
        "request handled"
    );

    Some(response)
}

fn parse_params<T: DeserializeOwned>(req: &JsonRpcRequest) -> Result<T, JsonRpcError> {
    match &req.params {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            JsonRpcError::invalid_params(format!("Invalid {} params: {e}", req.method))
        }),
        None => Err(JsonRpcError::invalid_params(format!(
            "Missing params for {}",
            req.method
        ))),
    }
}

fn success<T: Serialize>(id: Option<RpcId>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            JsonRpcError::internal_error(format!("Result serialization failed: {e}")),
        ),
    }
}

fn respond<T: Serialize>(id: Option<RpcId>, result: Result<T, ProxyError>) -> JsonRpcResponse {
    match result {
        Ok(value) => success(id, &value),
        Err(err) => JsonRpcResponse::error(id, err.into()),
    }
}
