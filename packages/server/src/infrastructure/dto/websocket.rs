//! WebSocket payloads.

use serde::{Deserialize, Serialize};

use crate::domain::ConnectionId;

/// Message type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Connected,
}

/// Sent once to a newly connected client: `{"type":"connected","id":"<id>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedMessage {
    pub r#type: MessageType,
    pub id: String,
}

impl ConnectedMessage {
    pub fn new(id: &ConnectionId) -> Self {
        Self {
            r#type: MessageType::Connected,
            id: id.as_str().to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Render the plain-text relay payload: `[<senderId>]: <content>`
pub fn format_relayed_message(from: &ConnectionId, content: &str) -> String {
    format!("[{}]: {}", from, content)
}
