use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

const DEFAULT_PORT: u16 = 4002;

fn init_logging() {
    dotenv().ok();
    common::utils::logging::init_logging();
    info!(service = "product-service", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "product-service",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "product-service", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "product-service",
        event = "start",
        %service_id,
        pid,
        version,
        "product service starting"
    );

    rt.block_on(async move {
        tokio::select! {
            res = server::run::<models::Product>(DEFAULT_PORT) => {
                if let Err(e) = res {
                    error!(service = "product-service", event = "run_failed", error = %e, "server run returned error");
                    return std::process::ExitCode::FAILURE;
                }
                std::process::ExitCode::SUCCESS
            }
            _ = tokio::signal::ctrl_c() => {
                info!(service = "product-service", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
