//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use dengon_shared::time::timestamp_to_jst_rfc3339;

use crate::{
    infrastructure::dto::http::{ConnectionDetailDto, ConnectionListDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of live connections
pub async fn list_connections(State(state): State<Arc<AppState>>) -> Json<ConnectionListDto> {
    let connections = state.list_connections_usecase.execute().await;

    // Domain Model から DTO への変換
    let connections: Vec<ConnectionDetailDto> = connections
        .into_iter()
        .map(|c| ConnectionDetailDto {
            connected_at: timestamp_to_jst_rfc3339(c.connected_at.value())
                .unwrap_or_else(|| c.connected_at.value().to_string()),
            id: c.id.into_string(),
        })
        .collect();

    Json(ConnectionListDto {
        count: connections.len(),
        connections,
    })
}
