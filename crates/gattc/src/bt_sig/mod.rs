//! Read-only registry of Bluetooth SIG assigned UUIDs

pub mod uuids;

pub use self::uuids::{characteristics, declarations, descriptors, services};

use crate::uuid::Uuid;

/// Looks up the SIG-assigned name of a UUID.
///
/// Only 16-bit UUIDs derived from the Bluetooth base UUID are registered.
pub fn describe(uuid: &Uuid) -> Option<&'static str> {
    let short = uuid.as_u16()?;
    uuids::lookup(short)
}
