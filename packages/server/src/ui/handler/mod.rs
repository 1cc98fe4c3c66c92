//! Request handlers.

mod http;
mod websocket;

pub use http::{health_check, list_connections};
pub use websocket::websocket_handler;
