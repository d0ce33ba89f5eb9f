//! Seams between the GATT client core and the outside world

use super::operation::{CompletionSink, RequestId};
use crate::error::{GattcResult, TransportError};

/// Primitives consumed from the link driver for one or more connections.
///
/// Issue calls return once the request is handed to the driver. The outcome
/// is reported later as a [`TransportEvent`](super::dispatch::TransportEvent).
/// The driver services at most one outstanding read and one outstanding write
/// per connection; the core never issues more than that. No request id is
/// exchanged: a completion is matched to the single read or write in flight
/// on its connection, so the driver must report completions in issue order
/// and for the attribute handle that was issued.
pub trait GattcTransport: Send + Sync {
    /// Issues an ATT read of `attr_handle`
    fn read(&self, conn_handle: u16, attr_handle: u16) -> Result<(), TransportError>;

    /// Issues an ATT write request (`with_response`) or write command
    fn write(
        &self,
        conn_handle: u16,
        attr_handle: u16,
        data: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError>;

    /// Sends a handle value confirmation. Fire-and-forget.
    fn confirm_indication(&self, conn_handle: u16, attr_handle: u16) -> Result<(), TransportError>;

    /// Negotiated ATT MTU of the connection
    fn mtu(&self, conn_handle: u16) -> u16;
}

/// Byte-level access to the attributes of one peer, implemented once per role.
///
/// Attributes and characteristics are written against this interface and never
/// against a concrete transport.
pub trait AttributeAccessor: Send + Sync {
    /// Requests a read of `handle`. `sink` receives the value read.
    fn read(&self, handle: u16, sink: CompletionSink) -> GattcResult<RequestId>;

    /// Requests a write of `data` to `handle`. `sink` receives the bytes written.
    fn write(
        &self,
        handle: u16,
        data: Vec<u8>,
        with_response: bool,
        sink: CompletionSink,
    ) -> GattcResult<RequestId>;

    /// Confirms an indication received on `handle`
    fn confirm_indication(&self, handle: u16);

    /// Negotiated ATT MTU
    fn mtu(&self) -> u16;

    /// `false` once the connection has dropped
    fn is_connected(&self) -> bool;
}
