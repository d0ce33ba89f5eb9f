//! gattc - A host-side Bluetooth LE GATT client engine
//!
//! This library models the GATT database of a connected peripheral and drives
//! reads, writes and subscriptions against it through a pluggable link driver.
//! The driver's single outstanding read and write per connection is hidden
//! behind per-connection FIFO queues, and every operation hands back a
//! completion that can be polled or awaited.

pub mod att;
pub mod bt_sig;
pub mod error;
pub mod gatt;
pub mod uuid;

// Re-export common types for convenience
pub use att::AttErrorCode;
pub use error::{GattcError, GattcResult, TransportError};
pub use gatt::{
    CharacteristicProperties, EventDispatcher, GattcAttribute, GattcCharacteristic, GattcConfig,
    GattcDatabase, GattcService, GattcTransport, PendingOperation, RequestId, SubscriptionState,
    TransportEvent,
};
pub use uuid::Uuid;
