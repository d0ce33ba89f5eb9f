//! Per-peer database of discovered services

use super::attribute::GattcAttribute;
use super::characteristic::GattcCharacteristic;
use super::manager::{OperationKind, ReadWriteManager};
use super::service::GattcService;
use super::transport::{AttributeAccessor, GattcTransport};
use super::types::DiscoveredService;
use crate::error::{GattcError, GattcResult, TransportError, REASON_LOCAL_HOST_TERMINATED};
use crate::uuid::Uuid;
use log::{debug, trace, warn};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// GATT client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GattcConfig {
    /// Reject write commands larger than `ATT_MTU - 3` instead of only warning
    pub enforce_write_command_length: bool,
    /// Send handle value confirmations for indications
    pub confirm_indications: bool,
}

impl Default for GattcConfig {
    fn default() -> Self {
        Self {
            enforce_write_command_length: false,
            confirm_indications: true,
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// The remote GATT database of one connection.
///
/// Created when the connection comes up and populated by discovery. Once the
/// connection drops every pending operation fails and nothing new is accepted.
pub struct GattcDatabase {
    conn_handle: u16,
    /// Shared by every attribute of the database
    manager: Arc<ReadWriteManager>,
    config: Arc<RwLock<GattcConfig>>,
    services: RwLock<Vec<Arc<GattcService>>>,
    /// Characteristics by value handle
    characteristics: RwLock<HashMap<u16, Arc<GattcCharacteristic>>>,
}

impl GattcDatabase {
    pub fn new(conn_handle: u16, transport: Arc<dyn GattcTransport>) -> Self {
        Self {
            conn_handle,
            manager: Arc::new(ReadWriteManager::new(conn_handle, transport)),
            config: Arc::new(RwLock::new(GattcConfig::default())),
            services: RwLock::new(Vec::new()),
            characteristics: RwLock::new(HashMap::new()),
        }
    }

    pub fn conn_handle(&self) -> u16 {
        self.conn_handle
    }

    /// Get the client configuration
    pub fn config(&self) -> GattcConfig {
        read(&self.config).clone()
    }

    /// Replace the client configuration. Applies to existing characteristics.
    pub fn set_config(&self, config: GattcConfig) {
        *write(&self.config) = config;
    }

    /// Negotiated ATT MTU of the connection
    pub fn mtu(&self) -> u16 {
        self.manager.mtu()
    }

    pub fn is_connected(&self) -> bool {
        self.manager.is_connected()
    }

    /// Reason reported when the connection dropped
    pub fn disconnect_reason(&self) -> Option<u8> {
        self.manager.disconnect_reason()
    }

    /// Number of reads or writes in flight or queued
    pub fn pending_operations(&self, kind: OperationKind) -> usize {
        self.manager.pending(kind)
    }

    /// Services in discovery order
    pub fn services(&self) -> Vec<Arc<GattcService>> {
        read(&self.services).clone()
    }

    /// All characteristics, service by service, in discovery order
    pub fn characteristics(&self) -> Vec<Arc<GattcCharacteristic>> {
        read(&self.services)
            .iter()
            .flat_map(|s| s.characteristics().iter().cloned())
            .collect()
    }

    /// First service with the given UUID
    pub fn find_service(&self, uuid: &Uuid) -> Option<Arc<GattcService>> {
        read(&self.services)
            .iter()
            .find(|s| s.uuid() == uuid)
            .cloned()
    }

    /// First characteristic with the given UUID, across all services
    pub fn find_characteristic(&self, uuid: &Uuid) -> Option<Arc<GattcCharacteristic>> {
        read(&self.services)
            .iter()
            .find_map(|s| s.find_characteristic(uuid))
    }

    /// Characteristic whose value attribute has the given handle
    pub fn characteristic_by_handle(&self, value_handle: u16) -> Option<Arc<GattcCharacteristic>> {
        read(&self.characteristics).get(&value_handle).cloned()
    }

    /// Appends services found by discovery.
    ///
    /// Each entry must be a complete service with its characteristics and
    /// descriptors. Services sharing a UUID are all kept. The batch is
    /// validated as a whole and nothing is added if any entry is invalid.
    pub fn add_discovered_services(&self, discovered: Vec<DiscoveredService>) -> GattcResult<()> {
        if let Some(reason) = self.manager.disconnect_reason() {
            return Err(GattcError::Disconnected { reason });
        }

        let accessor: Arc<dyn AttributeAccessor> = self.manager.clone();
        let mut services = write(&self.services);
        let mut characteristics = write(&self.characteristics);

        let mut ranges: Vec<(u16, u16)> = services
            .iter()
            .map(|s| (s.start_handle(), s.end_handle()))
            .collect();
        // Every attribute handle already owned, committed or in this batch
        let mut used: HashSet<u16> = services
            .iter()
            .flat_map(|s| s.characteristics().iter())
            .flat_map(|c| c.attributes().iter().map(GattcAttribute::handle))
            .collect();
        let mut built: Vec<Arc<GattcService>> = Vec::with_capacity(discovered.len());

        for service in &discovered {
            let uuid = service.uuid.described();
            let (start, end) = (service.start_handle, service.end_handle);
            if start == 0 || start > end {
                return Err(GattcError::InvalidDatabase(format!(
                    "service {:?} has invalid handle range {:#06x}..={:#06x}",
                    uuid, start, end
                )));
            }
            if let Some((s, e)) = ranges.iter().find(|(s, e)| start <= *e && *s <= end) {
                return Err(GattcError::InvalidDatabase(format!(
                    "service {:?} range {:#06x}..={:#06x} overlaps {:#06x}..={:#06x}",
                    uuid, start, end, s, e
                )));
            }
            ranges.push((start, end));

            let mut chars: Vec<Arc<GattcCharacteristic>> =
                Vec::with_capacity(service.characteristics.len());
            for discovered_char in &service.characteristics {
                let characteristic = GattcCharacteristic::from_discovered(
                    discovered_char,
                    accessor.clone(),
                    self.config.clone(),
                )?;

                let (first, last) = characteristic.handle_range();
                if first < start || last > end {
                    return Err(GattcError::InvalidDatabase(format!(
                        "characteristic {:?} handles {:#06x}..={:#06x} fall outside service {:?}",
                        characteristic.uuid(),
                        first,
                        last,
                        uuid
                    )));
                }

                let overlapping = chars.iter().find(|other| {
                    let (other_first, other_last) = other.handle_range();
                    first <= other_last && other_first <= last
                });
                if let Some(other) = overlapping {
                    return Err(GattcError::InvalidDatabase(format!(
                        "characteristic {:?} handles {:#06x}..={:#06x} overlap characteristic {:?}",
                        characteristic.uuid(),
                        first,
                        last,
                        other.uuid()
                    )));
                }

                for attribute in characteristic.attributes() {
                    if !used.insert(attribute.handle()) {
                        return Err(GattcError::InvalidDatabase(format!(
                            "handle {:#06x} of characteristic {:?} is already in use",
                            attribute.handle(),
                            characteristic.uuid()
                        )));
                    }
                }
                chars.push(Arc::new(characteristic));
            }

            debug!(
                "Discovered service {:?} {:#06x}..={:#06x} with {} characteristics",
                uuid,
                start,
                end,
                chars.len()
            );
            built.push(Arc::new(GattcService::new(
                uuid,
                service.service_type,
                start,
                end,
                chars,
            )));
        }

        for service in &built {
            for characteristic in service.characteristics() {
                characteristics.insert(characteristic.value_attribute().handle(), characteristic.clone());
            }
        }
        services.extend(built);
        Ok(())
    }

    /// Routes a notification or indication to the characteristic owning `attr_handle`.
    ///
    /// Returns `false` if no characteristic has that value handle.
    pub fn handle_value(&self, attr_handle: u16, data: &[u8], is_indication: bool) -> bool {
        if !self.is_connected() {
            trace!("Dropping value for handle {:#06x} after disconnect", attr_handle);
            return false;
        }
        match self.characteristic_by_handle(attr_handle) {
            Some(characteristic) => {
                characteristic.handle_value(data, is_indication);
                true
            }
            None => {
                warn!(
                    "Connection {:#06x}: value for unknown handle {:#06x}",
                    self.conn_handle, attr_handle
                );
                false
            }
        }
    }

    /// Completes the in-flight read on `attr_handle`
    pub fn on_read_response(&self, attr_handle: u16, result: Result<Vec<u8>, TransportError>) {
        self.manager.on_read_response(attr_handle, result);
    }

    /// Completes the in-flight write on `attr_handle`
    pub fn on_write_response(&self, attr_handle: u16, result: Result<(), TransportError>) {
        self.manager.on_write_response(attr_handle, result);
    }

    /// Tears the database down. Every pending operation fails with `Disconnected`.
    pub fn disconnect(&self, reason: u8) {
        self.manager.disconnect(reason);
    }
}

impl Drop for GattcDatabase {
    fn drop(&mut self) {
        // Characteristics may outlive the database, so their operations must still fail
        self.manager.disconnect(REASON_LOCAL_HOST_TERMINATED);
    }
}

impl std::fmt::Debug for GattcDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GattcDatabase")
            .field("conn_handle", &self.conn_handle)
            .field("connected", &self.is_connected())
            .field("services", &read(&self.services).len())
            .finish()
    }
}
