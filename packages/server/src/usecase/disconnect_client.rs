//! UseCase: クライアント切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - close と error が同じ接続に対して両方発火しても削除は 1 回だけであることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：接続中のクライアントの切断
//! - エッジケース：同じクライアントの 2 回目の切断、最後のクライアントの切断

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    /// Registry（接続管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// クライアント切断を実行
    ///
    /// # Returns
    ///
    /// この呼び出しで削除した場合は `true`、既に削除済みだった場合は `false`（何もしない）
    pub async fn execute(&self, id: &ConnectionId) -> bool {
        let removed = self.registry.remove(id).await;
        if removed {
            tracing::info!(
                "Client disconnected: {}, Remaining clients: {}",
                id,
                self.registry.count().await
            );
        } else {
            tracing::debug!("Client '{}' was already removed", id);
        }
        removed
    }
}
