//! Domain factories for creating value objects.

use super::{ConnectionId, error::ValueObjectError};

/// Number of hex characters kept from the UUID (48 random bits).
const CONNECTION_ID_LEN: usize = 12;

/// Factory for generating ConnectionId instances.
///
/// Separates the generation concern from the validation logic in ConnectionId.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId from a random UUID v4.
    ///
    /// The id is the first 12 lowercase hex characters of the UUID. Uniqueness
    /// among live connections is enforced by the registry, not here.
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for consistency
    /// with the domain error handling pattern.
    pub fn generate() -> Result<ConnectionId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        let mut simple = uuid.simple().to_string();
        simple.truncate(CONNECTION_ID_LEN);
        ConnectionId::new(simple)
    }
}
