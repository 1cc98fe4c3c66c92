//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{domain::ConnectionId, ui::state::AppState};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// The task ends when the client's socket can no longer be written to, or when
/// every sender of the channel is gone (the connection left the registry).
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
        let _ = sender.close().await;
    })
}

/// Spawns a task that reads frames from the client and relays them to everyone else.
///
/// Each frame is relayed before the next one is read, which keeps a sender's
/// messages in order for every recipient.
fn receive_loop(
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
    id: ConnectionId,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error for client {}: {}", id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::info!("Received message from {}: {}", id, text.as_str());
                    state
                        .relay_message_usecase
                        .execute(&id, text.as_str())
                        .await;
                }
                Message::Binary(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    tracing::info!("Received binary message from {}: {}", id, text);
                    state.relay_message_usecase.execute(&id, &text).await;
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => {}
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // The connected notification is queued on tx before registration
    let id = match state.connect_client_usecase.execute(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to register connection: {}", e);
            return;
        }
    };

    let (sender, receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receive_loop(receiver, state.clone(), id.clone());

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Also a no-op when the relay already evicted this connection
    state.disconnect_client_usecase.execute(&id).await;
}
