use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod diag;
pub mod error;
pub mod orders;
pub mod plans;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS is wide open, as the original frontend expects
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/test", get(diag::test_database))
        .route("/api/plans", get(plans::list_plans))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/{order_id}", get(orders::get_order))
        .route("/api/orders/{order_id}/pay", post(orders::pay_order))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /
/// Liveness message.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Will Writing Service Backend Running" }))
}
