//! HTTP API response bodies.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/connections`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionListDto {
    pub count: usize,
    pub connections: Vec<ConnectionDetailDto>,
}

/// One live connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDetailDto {
    pub id: String,
    /// RFC 3339 (JST)
    pub connected_at: String,
}
