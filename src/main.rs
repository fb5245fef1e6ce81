use std::sync::Arc;

use forms_mcp_proxy::catalog::Catalog;
use forms_mcp_proxy::config::ServerConfig;
use forms_mcp_proxy::logging;
use forms_mcp_proxy::server::McpServer;
use forms_mcp_proxy::upstream::UpstreamClient;
use forms_mcp_proxy::ProxyContext;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let (config, warnings) = ServerConfig::from_env();
    logging::init_logging(config.debug);
    for warning in &warnings {
        warn!(%warning, "unusable configuration value");
    }

    let catalog = match Catalog::builtin() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "catalog validation failed");
            std::process::exit(1);
        }
    };

    let upstream = match UpstreamClient::new(&config) {
        Ok(u) => u,
        Err(e) => {
            error!(error = %e, "failed to build upstream HTTP client");
            std::process::exit(1);
        }
    };

    info!(
        upstream = %config.upstream_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        tools = catalog.tools().len(),
        resources = catalog.resources().len(),
        prompts = catalog.prompts().len(),
        "forms-mcp-proxy starting"
    );

    let mut server = McpServer::new(ProxyContext::new(catalog, Arc::new(upstream)));
    if config.debug {
        server.probe_upstream().await;
    }

    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                error!(error = %e, "fatal error");
                std::process::exit(1);
            }
        }
        signal = shutdown_signal() => {
            info!(signal, "shutting down");
        }
    }

    std::process::exit(0);
}

/// Resolve on SIGINT or SIGTERM, returning the signal name.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                error!(error = %e, "failed to listen for SIGINT");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    }
}
