//! Domain layer: connection identities, the connection entity and the
//! registry interface the use cases depend on.

pub mod entity;
pub mod error;
pub mod factory;
pub mod policy;
pub mod registry;
pub mod value_object;

pub use entity::{Connection, OutboundChannel};
pub use error::{MessagePushError, RegistryError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use policy::SendFailurePolicy;
pub use registry::ConnectionRegistry;
pub use value_object::{ConnectionId, Timestamp};

#[cfg(test)]
pub use registry::MockConnectionRegistry;
