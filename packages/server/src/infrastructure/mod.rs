//! Infrastructure layer: registry implementations and wire DTOs.

pub mod dto;
pub mod registry;
