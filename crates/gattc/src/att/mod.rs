//! Attribute Protocol (ATT) definitions
//!
//! The wire encoding belongs to the transport. This module only carries the
//! values the GATT client needs to interpret transport outcomes.

pub mod constants;
pub mod error;

pub use self::constants::*;
pub use self::error::AttErrorCode;
