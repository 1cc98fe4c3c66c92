//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, ListConnectionsUseCase, RelayMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    pub list_connections_usecase: Arc<ListConnectionsUseCase>,
}
