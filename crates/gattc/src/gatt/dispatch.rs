//! Routing of link driver events to per-connection databases

use super::database::GattcDatabase;
use crate::att::AttErrorCode;
use crate::error::TransportError;
use log::{trace, warn};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// An event reported by the link driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Outcome of a read issued through [`GattcTransport::read`](super::GattcTransport::read)
    ReadResponse {
        conn_handle: u16,
        attr_handle: u16,
        status: AttErrorCode,
        data: Vec<u8>,
    },
    /// Outcome of a write issued through [`GattcTransport::write`](super::GattcTransport::write)
    WriteResponse {
        conn_handle: u16,
        attr_handle: u16,
        status: AttErrorCode,
    },
    /// Unsolicited notification or indication
    HandleValue {
        conn_handle: u16,
        attr_handle: u16,
        data: Vec<u8>,
        is_indication: bool,
    },
    /// The link dropped
    Disconnected { conn_handle: u16, reason: u8 },
}

impl TransportEvent {
    pub fn conn_handle(&self) -> u16 {
        match self {
            TransportEvent::ReadResponse { conn_handle, .. }
            | TransportEvent::WriteResponse { conn_handle, .. }
            | TransportEvent::HandleValue { conn_handle, .. }
            | TransportEvent::Disconnected { conn_handle, .. } => *conn_handle,
        }
    }
}

fn status_to_result(status: AttErrorCode) -> Result<(), TransportError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::Att(status))
    }
}

/// Delivers transport events to the database of their connection.
///
/// Events must be dispatched one at a time, from a single event loop.
#[derive(Default)]
pub struct EventDispatcher {
    databases: RwLock<HashMap<u16, Arc<GattcDatabase>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the database of a new connection, returning any database it replaces
    pub fn register(&self, database: Arc<GattcDatabase>) -> Option<Arc<GattcDatabase>> {
        let conn_handle = database.conn_handle();
        let replaced = self
            .databases
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(conn_handle, database);
        if replaced.is_some() {
            warn!("Replacing database for connection {:#06x}", conn_handle);
        }
        replaced
    }

    /// Stops routing events to a connection without tearing it down
    pub fn unregister(&self, conn_handle: u16) -> Option<Arc<GattcDatabase>> {
        self.databases
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&conn_handle)
    }

    pub fn database(&self, conn_handle: u16) -> Option<Arc<GattcDatabase>> {
        self.databases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&conn_handle)
            .cloned()
    }

    /// Connection handles with a registered database
    pub fn connections(&self) -> Vec<u16> {
        let mut handles: Vec<u16> = self
            .databases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        handles.sort_unstable();
        handles
    }

    /// Routes one event. Returns `false` if no registered database took it.
    pub fn dispatch(&self, event: TransportEvent) -> bool {
        let conn_handle = event.conn_handle();

        if let TransportEvent::Disconnected { reason, .. } = event {
            return match self.unregister(conn_handle) {
                Some(database) => {
                    database.disconnect(reason);
                    true
                }
                None => {
                    warn!("Disconnect for unknown connection {:#06x}", conn_handle);
                    false
                }
            };
        }

        let Some(database) = self.database(conn_handle) else {
            warn!("Event for unknown connection {:#06x}: {:?}", conn_handle, event);
            return false;
        };

        trace!("Dispatching {:?}", event);
        match event {
            TransportEvent::ReadResponse {
                attr_handle,
                status,
                data,
                ..
            } => {
                database.on_read_response(attr_handle, status_to_result(status).map(|()| data));
                true
            }
            TransportEvent::WriteResponse {
                attr_handle,
                status,
                ..
            } => {
                database.on_write_response(attr_handle, status_to_result(status));
                true
            }
            TransportEvent::HandleValue {
                attr_handle,
                data,
                is_indication,
                ..
            } => database.handle_value(attr_handle, &data, is_indication),
            TransportEvent::Disconnected { .. } => false,
        }
    }
}
