//! ConnectionRegistry trait 定義
//!
//! ドメイン層が必要とする接続管理のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{Connection, ConnectionId, RegistryError};

/// 接続中のクライアントの集合
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
/// 実装は add / remove / snapshot が互いに割り込まないことを保証する必要がある。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// 接続を追加（同じ ID が既に存在する場合はエラー）
    async fn add(&self, connection: Connection) -> Result<(), RegistryError>;

    /// 接続を削除
    ///
    /// 削除した場合は `true`、既に存在しなかった場合は `false` を返す（冪等）。
    async fn remove(&self, id: &ConnectionId) -> bool;

    /// 指定した ID が登録されているか
    async fn contains(&self, id: &ConnectionId) -> bool;

    /// 指定した ID 以外の全ての接続のスナップショットを取得
    async fn snapshot_except(&self, exclude: &ConnectionId) -> Vec<Connection>;

    /// 全ての接続のスナップショットを取得
    async fn snapshot(&self) -> Vec<Connection>;

    /// 接続数を取得
    async fn count(&self) -> usize;
}
