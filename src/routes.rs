use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{
        accounts::{contractor_account_handler, worker_account_handler},
        contractor::contractor_handler,
        verification::{contractor_verification_handler, worker_verification_handler},
        worker::worker_handler,
    },
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/thakedar", contractor_handler())
        .nest("/sarmika", worker_handler())
        .nest("/thakedaracc", contractor_account_handler())
        .nest("/sarmikaacc", worker_account_handler())
        .nest("/sermikaverify", worker_verification_handler())
        .nest("/thakedarverify", contractor_verification_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new().route("/health", get(health_check)).merge(api_route)
}
