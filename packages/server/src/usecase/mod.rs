//! UseCase layer: connect, relay, disconnect and listing of connections.

pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod list_connections;
pub mod relay_message;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::ConnectError;
pub use list_connections::ListConnectionsUseCase;
pub use relay_message::{RelayMessageUseCase, RelayOutcome};
