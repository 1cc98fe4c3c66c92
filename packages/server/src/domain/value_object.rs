//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ValueObjectError;

const CONNECTION_ID_MAX_LEN: usize = 100;

/// Connection identifier value object.
///
/// Opaque to clients beyond being a display label; generated server-side by
/// [`ConnectionIdFactory`](super::ConnectionIdFactory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a new ConnectionId.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or longer than 100 characters.
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::ConnectionIdEmpty);
        }
        let len = id.chars().count();
        if len > CONNECTION_ID_MAX_LEN {
            return Err(ValueObjectError::ConnectionIdTooLong {
                max: CONNECTION_ID_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_id_new_success() {
        // テスト項目: 有効な文字列から ConnectionId を作成できる
        // when (操作):
        let result = ConnectionId::new("3f9a1c0b7d2e".to_string());

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "3f9a1c0b7d2e");
    }

    #[test]
    fn test_connection_id_empty() {
        // テスト項目: 空文字列の ConnectionId は作成できない
        // when (操作):
        let result = ConnectionId::new(String::new());

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::ConnectionIdEmpty));
    }

    #[test]
    fn test_connection_id_too_long() {
        // テスト項目: 101 文字以上の ConnectionId は作成できない
        // when (操作):
        let result = ConnectionId::try_from("a".repeat(101));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::ConnectionIdTooLong {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_connection_id_display() {
        // テスト項目: Display で内部の文字列がそのまま表示される
        let id = ConnectionId::new("a1".to_string()).unwrap();
        assert_eq!(format!("[{}]", id), "[a1]");
    }
}
