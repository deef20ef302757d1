//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the calculation API, the health probe and the API index
//! under a single Axum router. Unknown paths fall through to a JSON 404 so
//! clients always receive the same envelope shape.

pub mod underfloor;

use axum::Router;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Json;
use axum::routing::{get, post};
use heating::envelope::{Failure, Health};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "Underfloor Heating API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CALCULATE_PATH: &str = "/api/v1/underfloor/calculate";

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(CALCULATE_PATH, post(underfloor::calculate))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `GET /health` — liveness probe.
async fn health() -> Json<Health> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    Json(Health {
        status: "OK".to_owned(),
        service: SERVICE_NAME.to_owned(),
        version: SERVICE_VERSION.to_owned(),
        timestamp,
    })
}

/// `GET /` — endpoint listing and request body reference.
async fn index() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "GET /health",
            "calculate": format!("POST {CALCULATE_PATH}"),
        },
        "requestBody": {
            "area": "number, m², 1 to 1000",
            "cargaTermicaRequerida": "number, W/m², 10 to 150",
            "tipoDeSuelo": heating::FloorType::wire_names(),
            "distanciaAlColector": "number, metres, 0 to 50",
            "distanciaAlimentacion": "optional number, metres from boiler to manifold",
        },
    }))
}

async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<Failure>) {
    tracing::debug!(%method, path = uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Json(Failure::with_message("Not Found", format!("Endpoint {method} {} not found", uri.path()))),
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
