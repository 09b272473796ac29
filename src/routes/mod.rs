//! Router HTTP
//!
//! Alta, login y health son públicos; el resto pasa por `auth_middleware`.

pub mod capsule_routes;
pub mod client_routes;
pub mod mechanic_routes;
pub mod repair_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{auth_middleware, cors_middleware};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(mechanic_routes::create_mechanic_router())
        .merge(client_routes::create_client_router())
        .merge(vehicle_routes::create_vehicle_router())
        .merge(repair_routes::create_repair_router())
        .merge(capsule_routes::create_capsule_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(mechanic_routes::create_auth_router())
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
