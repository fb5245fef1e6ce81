use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::catalog::KnownResource;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::ProxyContext;

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    ctx: ProxyContext,
    initialized: bool,
}

impl McpServer {
    pub fn new(ctx: ProxyContext) -> Self {
        Self {
            ctx,
            initialized: false,
        }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve one newline-delimited JSON-RPC stream until the reader hits EOF.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                debug!("input closed");
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                warn!(bytes = n, limit = MAX_MESSAGE_BYTES, "message too large");
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                ).await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    ).await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    ).await?;
                    continue;
                }
            };

            // Validate jsonrpc version
            if req.jsonrpc != "2.0" {
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                ).await?;
                continue;
            }

            // Initialization gate: only `initialize` is allowed before handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.id.is_none() {
                    continue;
                }
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                ).await?;
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &self.ctx).await {
                write_response(&mut writer, &resp).await?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        Ok(())
    }

    /// Log upstream reachability. Diagnostic only; never fails startup.
    pub async fn probe_upstream(&self) -> bool {
        let upstream = &self.ctx.upstream;
        if !upstream.health_check().await {
            warn!("upstream health check failed - continuing anyway");
            return false;
        }

        info!("upstream is healthy");
        match upstream.fetch_resource(KnownResource::ServerInfo).await {
            Ok(server_info) => info!(
                name = server_info.get("name").and_then(|v| v.as_str()).unwrap_or("unknown"),
                version = server_info.get("version").and_then(|v| v.as_str()).unwrap_or("unknown"),
                "upstream server info"
            ),
            Err(e) => warn!(error = %e, "could not get upstream server info"),
        }
        true
    }
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
