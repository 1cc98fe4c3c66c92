//! UseCase: 接続一覧取得

use std::sync::Arc;

use crate::domain::{Connection, ConnectionRegistry};

/// 接続一覧取得のユースケース
pub struct ListConnectionsUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl ListConnectionsUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// 接続中のクライアントを ID 順で返す
    pub async fn execute(&self) -> Vec<Connection> {
        let mut connections = self.registry.snapshot().await;
        connections.sort_by(|a, b| a.id.cmp(&b.id));
        connections
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        domain::{ConnectionId, Timestamp},
        infrastructure::registry::InMemoryConnectionRegistry,
    };

    #[tokio::test]
    async fn test_list_connections_sorted_by_id() {
        // テスト項目: 接続一覧が ID 順にソートされて返る
        // given (前提条件):
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        for name in ["charlie", "alice", "bob"] {
            let (tx, _rx) = mpsc::unbounded_channel();
            let id = ConnectionId::new(name.to_string()).unwrap();
            registry
                .add(Connection::new(id, tx, Timestamp::new(0)))
                .await
                .unwrap();
        }
        let usecase = ListConnectionsUseCase::new(registry);

        // when (操作):
        let connections = usecase.execute().await;

        // then (期待する結果):
        let ids: Vec<&str> = connections.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["alice", "bob", "charlie"]);
    }

    #[tokio::test]
    async fn test_list_connections_empty() {
        // テスト項目: 接続が無い場合は空のリスト
        let usecase = ListConnectionsUseCase::new(Arc::new(InMemoryConnectionRegistry::new()));
        assert!(usecase.execute().await.is_empty());
    }
}
