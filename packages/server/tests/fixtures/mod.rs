//! Test fixtures: an in-process relay server on an ephemeral port and
//! WebSocket client helpers.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use dengon_server::{
    domain::SendFailurePolicy,
    infrastructure::registry::InMemoryConnectionRegistry,
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, ListConnectionsUseCase,
        RelayMessageUseCase,
    },
};
use dengon_shared::time::SystemClock;
use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpListener, sync::oneshot};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// How long a client waits before concluding that nothing will arrive
pub const SILENCE: Duration = Duration::from_millis(300);

/// Helper struct to manage an in-process server lifecycle
pub struct TestServer {
    addr: std::net::SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Start a test server on an ephemeral port
    pub async fn start(policy: SendFailurePolicy) -> Self {
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        let server = Server::new(
            Arc::new(ConnectClientUseCase::new(
                registry.clone(),
                Arc::new(SystemClock),
            )),
            Arc::new(DisconnectClientUseCase::new(registry.clone())),
            Arc::new(RelayMessageUseCase::new(registry.clone(), policy)),
            Arc::new(ListConnectionsUseCase::new(registry)),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(server.serve(listener, async move {
            let _ = rx.await;
        }));

        TestServer {
            addr,
            shutdown: Some(tx),
        }
    }

    /// Get the WebSocket URL for this server
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Get the HTTP base URL for this server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Connect a client and consume its `connected` notification
    ///
    /// Returns the stream and the id assigned by the server.
    pub async fn connect(&self) -> (WsStream, String) {
        let (mut ws, _) = connect_async(self.ws_url())
            .await
            .expect("Failed to connect");
        let first = recv_text(&mut ws).await.expect("No connected message");
        let value: serde_json::Value =
            serde_json::from_str(&first).expect("connected message is not JSON");
        assert_eq!(value["type"], "connected");
        let id = value["id"]
            .as_str()
            .expect("connected message has no id")
            .to_string();
        (ws, id)
    }

    /// Number of connections the server currently reports
    pub async fn connection_count(&self) -> usize {
        let body: serde_json::Value = reqwest::get(format!("{}/api/connections", self.base_url()))
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        body["count"].as_u64().expect("count is not a number") as usize
    }

    /// Poll until the server reports `expected` connections
    pub async fn wait_for_count(&self, expected: usize) {
        for _ in 0..50 {
            if self.connection_count().await == expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Server never reached {} connections", expected);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Send a text frame
pub async fn send_text(ws: &mut WsStream, text: &str) {
    ws.send(Message::Text(text.into()))
        .await
        .expect("Failed to send message");
}

/// Receive the next text frame, or `None` if nothing arrives within `SILENCE`
pub async fn recv_text(ws: &mut WsStream) -> Option<String> {
    loop {
        let msg = tokio::time::timeout(SILENCE, ws.next()).await.ok()??.ok()?;
        match msg {
            Message::Text(text) => return Some(text.as_str().to_string()),
            Message::Ping(_) | Message::Pong(_) => continue,
            _ => return None,
        }
    }
}
