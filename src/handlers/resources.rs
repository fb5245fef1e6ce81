use serde::Serialize;
use tracing::{debug, error};

use crate::catalog::{ResourceDefinition, JSON_MIME_TYPE};
use crate::error::ProxyError;
use crate::protocol::{ReadResourceParams, ReadResourceResult, ResourceContents};
use crate::ProxyContext;

#[derive(Debug, Serialize)]
pub struct ListResourcesResult<'a> {
    pub resources: &'a [ResourceDefinition],
}

/// Handle `resources/list`.
pub fn list(ctx: &ProxyContext) -> ListResourcesResult<'_> {
    ListResourcesResult {
        resources: ctx.catalog.resources(),
    }
}

/// Handle `resources/read`.
///
/// Fetches the resource from upstream and returns it as pretty-printed JSON.
/// Unlike tool calls, upstream failures here are hard errors.
pub async fn read(
    params: ReadResourceParams,
    ctx: &ProxyContext,
) -> Result<ReadResourceResult, ProxyError> {
    let resource = ctx.catalog.resolve_resource(&params.uri)?;
    debug!(uri = %params.uri, "resource requested");

    let read_failed = |cause: String| ProxyError::ResourceReadFailed {
        uri: params.uri.clone(),
        cause,
    };

    let payload = ctx.upstream.fetch_resource(resource).await.map_err(|e| {
        error!(uri = %params.uri, error = %e, "resource read failed");
        read_failed(e.to_string())
    })?;

    let text = serde_json::to_string_pretty(&payload).map_err(|e| read_failed(e.to_string()))?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContents {
            uri: params.uri.clone(),
            mime_type: JSON_MIME_TYPE.to_string(),
            text,
        }],
    })
}
