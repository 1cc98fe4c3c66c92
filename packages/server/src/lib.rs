//! WebSocket message relay library.
//!
//! Every message a client sends is relayed to all other connected clients,
//! tagged with the sender's server-assigned id.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
