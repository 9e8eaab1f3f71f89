use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::Resource;
use store::DocStore;

use crate::errors::ApiError;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn list<T: Resource>(State(store): State<Arc<DocStore<T>>>) -> Json<Vec<T>> {
    Json(store.list().await)
}

async fn create<T: Resource>(
    State(store): State<Arc<DocStore<T>>>,
    Json(draft): Json<T::Draft>,
) -> Result<Json<T>, ApiError> {
    let record = store.create(draft).await?;
    Ok(Json(record))
}

async fn remove<T: Resource>(
    State(store): State<Arc<DocStore<T>>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Deleting an unknown id is indistinguishable from success on the wire.
    store.remove(&id).await?;
    Ok(Json(serde_json::json!({ "message": format!("{} deleted", T::TITLE) })))
}

/// Build the full service router for one resource type: the three CRUD
/// routes plus health, with CORS and request tracing applied.
pub fn build_router<T: Resource>(store: Arc<DocStore<T>>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(&format!("/{}", T::NAME), get(list::<T>).post(create::<T>))
        .route(&format!("/{}/:id", T::NAME), delete(remove::<T>))
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
