use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::db;
use crate::AppState;

/// Health check endpoint
///
/// Reports whether the database answers a trivial query.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match db::ping(&state.db).await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            "disconnected"
        }
    };

    Json(json!({
        "status": if db_status == "connected" { "healthy" } else { "unhealthy" },
        "database": db_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
