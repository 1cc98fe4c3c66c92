//! UseCase: メッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - 送信者以外の全クライアントへのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 送信者が自分のメッセージを受け取らないこと（自己除外）を保証する
//! - 一部の受信者への送信失敗が他の受信者や送信者に影響しないことを保証する
//! - 送信失敗時の方針（無視 / 即時削除）が一貫して適用されることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：3 人接続中のブロードキャスト
//! - エッジケース：送信者のみ接続中（受信者なし）
//! - 異常系：受信者のチャンネルが閉じている

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, SendFailurePolicy},
    infrastructure::dto::websocket::format_relayed_message,
};

/// 1 回の中継の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayOutcome {
    /// 送信できた受信者
    pub delivered: Vec<ConnectionId>,
    /// チャンネルが閉じていて送信しなかった、または送信に失敗した受信者
    pub failed: Vec<ConnectionId>,
    /// `SendFailurePolicy::Evict` によって Registry から削除した受信者
    pub evicted: Vec<ConnectionId>,
}

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// Registry（接続管理の抽象化）
    registry: Arc<dyn ConnectionRegistry>,
    /// 送信失敗時の方針
    policy: SendFailurePolicy,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(registry: Arc<dyn ConnectionRegistry>, policy: SendFailurePolicy) -> Self {
        Self { registry, policy }
    }

    /// メッセージ中継を実行
    ///
    /// 受信者ごとの送信失敗はここで処理され、呼び出し元にエラーとして返ることはない。
    ///
    /// # Arguments
    ///
    /// * `from` - 送信者の ID
    /// * `content` - 受信したメッセージ本文
    pub async fn execute(&self, from: &ConnectionId, content: &str) -> RelayOutcome {
        let payload = format_relayed_message(from, content);

        // 1. 送信者以外のスナップショットを取得（ロックはここで解放される）
        let recipients = self.registry.snapshot_except(from).await;

        // 2. 各受信者へ送信
        let mut outcome = RelayOutcome::default();
        for recipient in recipients {
            if !recipient.is_open() {
                tracing::debug!("Skipping closed connection '{}'", recipient.id);
                outcome.failed.push(recipient.id);
                continue;
            }
            match recipient.send(payload.clone()) {
                Ok(()) => outcome.delivered.push(recipient.id),
                Err(e) => {
                    // ブロードキャストでは一部の送信失敗を許容
                    tracing::warn!("Failed to relay message to '{}': {}", recipient.id, e);
                    outcome.failed.push(recipient.id);
                }
            }
        }

        // 3. 方針に従って失敗した受信者を削除
        if self.policy.evicts() {
            for id in &outcome.failed {
                if self.registry.remove(id).await {
                    tracing::info!("Evicted connection '{}' after send failure", id);
                    outcome.evicted.push(id.clone());
                }
            }
        }

        tracing::debug!(
            "Relayed message from '{}' to {} client(s)",
            from,
            outcome.delivered.len()
        );

        outcome
    }
}
