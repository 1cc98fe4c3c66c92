//! InMemory ConnectionRegistry 実装
//!
//! ドメイン層が定義する ConnectionRegistry trait の具体的な実装。
//! `tokio::sync::Mutex<Vec<Connection>>` をインメモリのストアとして使用します。
//!
//! ## 並行性
//!
//! 全ての操作は同じ Mutex を取るため、add / remove とスナップショットが
//! 途中で交差することはありません。ブロードキャストはスナップショットを
//! コピーしてからロックの外で送信します。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRegistry, RegistryError};

/// インメモリ ConnectionRegistry 実装
#[derive(Default)]
pub struct InMemoryConnectionRegistry {
    /// 接続中のクライアント（挿入順は正しさに影響しない）
    connections: Mutex<Vec<Connection>>,
}

impl InMemoryConnectionRegistry {
    /// 新しい空の InMemoryConnectionRegistry を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn add(&self, connection: Connection) -> Result<(), RegistryError> {
        let mut connections = self.connections.lock().await;
        if connections.iter().any(|c| c.id == connection.id) {
            return Err(RegistryError::DuplicateConnectionId(
                connection.id.into_string(),
            ));
        }
        tracing::debug!("Connection '{}' added to registry", connection.id);
        connections.push(connection);
        Ok(())
    }

    async fn remove(&self, id: &ConnectionId) -> bool {
        let mut connections = self.connections.lock().await;
        match connections.iter().position(|c| &c.id == id) {
            Some(index) => {
                connections.swap_remove(index);
                tracing::debug!("Connection '{}' removed from registry", id);
                true
            }
            None => false,
        }
    }

    async fn contains(&self, id: &ConnectionId) -> bool {
        let connections = self.connections.lock().await;
        connections.iter().any(|c| &c.id == id)
    }

    async fn snapshot_except(&self, exclude: &ConnectionId) -> Vec<Connection> {
        let connections = self.connections.lock().await;
        connections
            .iter()
            .filter(|c| &c.id != exclude)
            .cloned()
            .collect()
    }

    async fn snapshot(&self) -> Vec<Connection> {
        let connections = self.connections.lock().await;
        connections.clone()
    }

    async fn count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }
}
