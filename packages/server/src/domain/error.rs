//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    #[error("ConnectionId cannot exceed {max} characters (got {actual})")]
    ConnectionIdTooLong { max: usize, actual: usize },
}

/// Errors raised by a `ConnectionRegistry` implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A connection with the same id is already registered
    #[error("Connection '{0}' is already registered")]
    DuplicateConnectionId(String),
}

/// Errors raised when pushing a payload into a connection's outbound channel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessagePushError {
    /// The receiving half (the socket's pusher task) is gone
    #[error("Outbound channel of connection '{0}' is closed")]
    ChannelClosed(String),
}
