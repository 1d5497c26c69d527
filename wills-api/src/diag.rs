use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /test
/// Report store connectivity and configuration. This endpoint never fails
/// the request; internal errors come back as descriptive string fields.
pub async fn test_database(State(state): State<AppState>) -> Json<Value> {
    let (database, connection_status, collections) = match state.store.ping().await {
        Ok(()) => match state.store.collection_names().await {
            Ok(names) => (
                "✅ Connected & Working".to_string(),
                "Connected",
                names.into_iter().take(10).collect::<Vec<String>>(),
            ),
            Err(err) => (
                format!("⚠️  Connected but Error: {}", truncate(&err.to_string(), 50)),
                "Connected",
                Vec::new(),
            ),
        },
        Err(_) => (
            "⚠️  Available but not initialized".to_string(),
            "Not Connected",
            Vec::new(),
        ),
    };

    Json(json!({
        "backend": "✅ Running",
        "database": database,
        "database_url": env_presence("DATABASE_URL"),
        "database_name": env_presence("DATABASE_NAME"),
        "connection_status": connection_status,
        "collections": collections,
    }))
}

fn env_presence(name: &str) -> &'static str {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => "✅ Set",
        _ => "❌ Not Set",
    }
}

fn truncate(message: &str, limit: usize) -> String {
    message.chars().take(limit).collect()
}
