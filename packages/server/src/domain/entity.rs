//! Connection entity.

use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, Timestamp};

/// Outbound half of a client's channel.
///
/// The receiving half is drained by the socket's pusher task, so a closed
/// channel means the socket is gone or going.
pub type OutboundChannel = mpsc::UnboundedSender<String>;

/// One live client session.
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: ConnectionId,
    pub connected_at: Timestamp,
    channel: OutboundChannel,
}

impl Connection {
    pub fn new(id: ConnectionId, channel: OutboundChannel, connected_at: Timestamp) -> Self {
        Self {
            id,
            connected_at,
            channel,
        }
    }

    /// Whether the outbound channel still has a receiver.
    pub fn is_open(&self) -> bool {
        !self.channel.is_closed()
    }

    /// Queue a payload for this client without waiting for it to be written.
    pub fn send(&self, payload: String) -> Result<(), MessagePushError> {
        self.channel
            .send(payload)
            .map_err(|_| MessagePushError::ChannelClosed(self.id.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(id: &str) -> (Connection, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = ConnectionId::new(id.to_string()).unwrap();
        (Connection::new(id, tx, Timestamp::new(0)), rx)
    }

    #[tokio::test]
    async fn test_send_to_open_connection() {
        // テスト項目: 開いているチャンネルへ送信できる
        // given (前提条件):
        let (conn, mut rx) = connection("alice");

        // when (操作):
        let result = conn.send("hello".to_string());

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(conn.is_open());
        assert_eq!(rx.recv().await, Some("hello".to_string()));
    }

    #[test]
    fn test_send_to_closed_connection() {
        // テスト項目: 受信側が破棄されたチャンネルへの送信はエラーになる
        // given (前提条件):
        let (conn, rx) = connection("bob");
        drop(rx);

        // when (操作):
        let result = conn.send("hello".to_string());

        // then (期待する結果):
        assert!(!conn.is_open());
        assert_eq!(
            result,
            Err(MessagePushError::ChannelClosed("bob".to_string()))
        );
    }
}
