use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::Resource;
use store::DocStore;

use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Public entry: build one resource service and run its HTTP server.
///
/// `default_port` applies when neither `PORT` nor the config file provide
/// one, so the two services can coexist on one machine out of the box.
pub async fn run<T: Resource>(default_port: u16) -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::ServiceConfig::load(T::NAME, default_port)?;
    common::env::ensure_data_dir(&cfg.data_path).await?;

    let store = DocStore::<T>::open(&cfg.data_path).await?;

    let app: Router = routes::build_router(Arc::clone(&store), build_cors());

    let addr = cfg.bind_addr()?;
    info!(%addr, resource = T::NAME, data_path = %cfg.data_path, "starting resource service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
