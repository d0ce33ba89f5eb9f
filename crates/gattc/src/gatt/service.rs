//! Client-side view of a discovered service

use super::characteristic::GattcCharacteristic;
use super::types::ServiceType;
use crate::uuid::Uuid;
use std::sync::Arc;

/// A GATT service and its characteristics, in discovery order
#[derive(Debug)]
pub struct GattcService {
    uuid: Uuid,
    service_type: ServiceType,
    start_handle: u16,
    end_handle: u16,
    characteristics: Vec<Arc<GattcCharacteristic>>,
}

impl GattcService {
    pub(crate) fn new(
        uuid: Uuid,
        service_type: ServiceType,
        start_handle: u16,
        end_handle: u16,
        characteristics: Vec<Arc<GattcCharacteristic>>,
    ) -> Self {
        Self {
            uuid,
            service_type,
            start_handle,
            end_handle,
            characteristics,
        }
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn is_primary(&self) -> bool {
        self.service_type == ServiceType::Primary
    }

    pub fn start_handle(&self) -> u16 {
        self.start_handle
    }

    pub fn end_handle(&self) -> u16 {
        self.end_handle
    }

    /// Whether `handle` falls in the service's handle range
    pub fn contains(&self, handle: u16) -> bool {
        (self.start_handle..=self.end_handle).contains(&handle)
    }

    pub fn characteristics(&self) -> &[Arc<GattcCharacteristic>] {
        &self.characteristics
    }

    /// First characteristic with the given UUID
    pub fn find_characteristic(&self, uuid: &Uuid) -> Option<Arc<GattcCharacteristic>> {
        self.characteristics
            .iter()
            .find(|c| c.uuid() == uuid)
            .cloned()
    }
}
