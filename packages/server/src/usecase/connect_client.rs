//! UseCase: クライアント接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectClientUseCase::execute() メソッド
//! - ID 生成、connected 通知の送信、Registry への追加
//!
//! ### なぜこのテストが必要か
//! - 新しいクライアントが最初に受け取るフレームは必ず connected 通知である
//! - 同時に接続した N 件のクライアントの ID が全て異なることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規クライアントの接続
//! - 異常系：登録前にチャンネルが閉じている
//! - エッジケース：生成した ID が接続中の ID と衝突し続ける

use std::sync::Arc;

use dengon_shared::time::Clock;

use crate::{
    domain::{
        Connection, ConnectionId, ConnectionIdFactory, ConnectionRegistry, OutboundChannel,
        Timestamp,
    },
    infrastructure::dto::websocket::ConnectedMessage,
};

use super::error::ConnectError;

/// ID 生成の再試行回数の上限
const MAX_ID_ATTEMPTS: usize = 8;

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    /// Registry（接続管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// 接続時刻の取得元
    clock: Arc<dyn Clock>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// クライアント接続を実行
    ///
    /// connected 通知はクライアントが Registry に追加される前にチャンネルへ積まれるため、
    /// 他のクライアントからの中継メッセージより必ず先に届く。
    ///
    /// # Arguments
    ///
    /// * `channel` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(ConnectionId)` - 割り当てた ID
    /// * `Err(ConnectError)` - 接続失敗（何も登録されない）
    pub async fn execute(&self, channel: OutboundChannel) -> Result<ConnectionId, ConnectError> {
        if channel.is_closed() {
            return Err(ConnectError::ChannelClosed);
        }

        // 1. 接続中の ID と重複しない ID を生成
        let id = self.generate_unused_id().await?;

        // 2. connected 通知を送信
        let notice = ConnectedMessage::new(&id)
            .to_json()
            .map_err(|e| ConnectError::Encode(e.to_string()))?;
        let connection = Connection::new(
            id.clone(),
            channel,
            Timestamp::new(self.clock.now_millis()),
        );
        connection
            .send(notice)
            .map_err(|_| ConnectError::ChannelClosed)?;

        // 3. Registry に追加
        self.registry.add(connection).await?;

        tracing::info!(
            "Client connected: {}, Total clients: {}",
            id,
            self.registry.count().await
        );

        Ok(id)
    }

    async fn generate_unused_id(&self) -> Result<ConnectionId, ConnectError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ConnectionIdFactory::generate()?;
            if !self.registry.contains(&id).await {
                return Ok(id);
            }
            tracing::debug!("Generated connection id '{}' is in use, retrying", id);
        }
        Err(ConnectError::IdGenerationExhausted(MAX_ID_ATTEMPTS))
    }
}
