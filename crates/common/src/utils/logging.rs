use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber with stdout output.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - `LOG_FORMAT=json` switches to structured JSON lines for container logs
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(|| io::stdout());
    let json = std::env::var("LOG_FORMAT").map(|v| v == "json").unwrap_or(false);
    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.compact().try_init();
    }
}
