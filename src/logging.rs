use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Output goes to stderr: stdout carries the JSON-RPC stream. With `debug` set the
/// filter is forced to `debug`, otherwise `RUST_LOG` applies (default `info`).
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
