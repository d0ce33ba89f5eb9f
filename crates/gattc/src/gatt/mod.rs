//! GATT client engine
//!
//! This module holds the client-side view of a peer's GATT database: the
//! services, characteristics and attributes found by discovery, the queue that
//! serializes reads and writes against the link, and the routing of
//! notifications and indications to subscribers.

pub mod attribute;
pub mod characteristic;
pub mod database;
pub mod dispatch;
pub mod manager;
pub mod operation;
pub mod service;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock_transport;
#[cfg(test)]
mod tests;

pub use attribute::{CompletionEvent, CompletionObserver, GattcAttribute};
pub use characteristic::{GattcCharacteristic, NotificationHandler};
pub use database::{GattcConfig, GattcDatabase};
pub use dispatch::{EventDispatcher, TransportEvent};
pub use manager::{OperationKind, ReadWriteManager};
pub use operation::{CompletionSink, PendingOperation, RequestId};
pub use service::GattcService;
pub use transport::{AttributeAccessor, GattcTransport};
pub use types::{
    CharacteristicProperties, DiscoveredCharacteristic, DiscoveredDescriptor, DiscoveredService,
    Notification, ServiceType, SubscriptionState,
};
