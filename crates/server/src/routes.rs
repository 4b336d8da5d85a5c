use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{
        DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
    },
};
use tracing::Level;

use common::types::Health;
use store::ResourceStore;

pub mod resources;

/// Shared per-process state, injected into every handler. A fresh state
/// with a fresh store can be built per test.
#[derive(Clone)]
pub struct AppState {
    pub store: ResourceStore,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: debug dump, health, and the CRUD
/// surface under `/api`.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(resources::dump_store))
        .route("/health", get(health))
        .route(
            "/api/:resource",
            get(resources::list_items).post(resources::create_item),
        )
        .route(
            "/api/:resource/:id",
            get(resources::get_item)
                .put(resources::update_item)
                .delete(resources::delete_item),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
