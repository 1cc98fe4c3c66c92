//! Data Transfer Objects for the WebSocket and HTTP boundaries.

pub mod http;
pub mod websocket;
