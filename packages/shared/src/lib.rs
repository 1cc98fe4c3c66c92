//! Shared utilities for the Dengon relay server.

pub mod logger;
pub mod time;
