//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::{RegistryError, ValueObjectError};

/// Errors returned by `ConnectClientUseCase`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The client's channel closed before it could be registered
    #[error("Channel closed before the connection was registered")]
    ChannelClosed,

    /// Every generated id collided with a live connection
    #[error("Could not generate an unused connection id after {0} attempts")]
    IdGenerationExhausted(usize),

    #[error("Invalid connection id: {0}")]
    InvalidId(#[from] ValueObjectError),

    #[error("Failed to encode connected notification: {0}")]
    Encode(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
