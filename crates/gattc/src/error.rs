//! Error types for the gattc library
//!
//! Synchronous precondition failures are returned directly from the call that
//! caused them. Transport outcomes travel through the completion of the
//! operation that triggered them.

use crate::att::AttErrorCode;
use thiserror::Error;

/// HCI reason code used when a database is torn down by the local host
pub const REASON_LOCAL_HOST_TERMINATED: u8 = 0x16;

/// Failures reported by the underlying link driver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The peer answered with an ATT error response
    #[error("ATT error response: {0:?}")]
    Att(AttErrorCode),

    /// The local driver refused to issue the request
    #[error("Transport rejected request: {0}")]
    Rejected(String),
}

/// Errors that can occur when working with a remote GATT database
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GattcError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Transport failure on handle {handle:#06x}: {source}")]
    TransportFailure {
        handle: u16,
        #[source]
        source: TransportError,
    },

    #[error("Peer disconnected (reason {reason:#04x})")]
    Disconnected { reason: u8 },

    #[error("Invalid database: {0}")]
    InvalidDatabase(String),
}

impl GattcError {
    /// Returns the ATT error code if the peer rejected the request
    pub fn att_error(&self) -> Option<AttErrorCode> {
        match self {
            GattcError::TransportFailure {
                source: TransportError::Att(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }

    /// Checks if the error is terminal for the connection
    pub fn is_disconnected(&self) -> bool {
        matches!(self, GattcError::Disconnected { .. })
    }
}

/// Result type used throughout the library
pub type GattcResult<T> = Result<T, GattcError>;
