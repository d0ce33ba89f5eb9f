//! Common types for GATT client operations

use crate::att::{CCCD_INDICATE, CCCD_NOTIFY};
use crate::uuid::Uuid;
use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian};

bitflags! {
    /// Characteristic properties as defined in the Bluetooth specification.
    ///
    /// Fixed at discovery time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharacteristicProperties: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharacteristicProperties {
    pub fn can_read(&self) -> bool {
        self.contains(Self::READ)
    }

    pub fn can_write(&self) -> bool {
        self.contains(Self::WRITE)
    }

    pub fn can_write_without_response(&self) -> bool {
        self.contains(Self::WRITE_WITHOUT_RESPONSE)
    }

    pub fn can_notify(&self) -> bool {
        self.contains(Self::NOTIFY)
    }

    pub fn can_indicate(&self) -> bool {
        self.contains(Self::INDICATE)
    }

    /// Either notifications or indications are supported
    pub fn can_subscribe(&self) -> bool {
        self.intersects(Self::NOTIFY | Self::INDICATE)
    }
}

/// Subscription state of a characteristic, as last confirmed by a CCCD write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubscriptionState {
    #[default]
    NotSubscribed,
    Notify,
    Indication,
}

impl SubscriptionState {
    /// Encodes the state as a CCCD value
    pub fn to_buffer(self) -> [u8; 2] {
        let bits = match self {
            SubscriptionState::NotSubscribed => 0,
            SubscriptionState::Notify => CCCD_NOTIFY,
            SubscriptionState::Indication => CCCD_INDICATE,
        };
        let mut buf = [0u8; 2];
        LittleEndian::write_u16(&mut buf, bits);
        buf
    }

    /// Decodes a CCCD value. The indication bit wins if both bits are set.
    pub fn from_buffer(buf: &[u8]) -> Self {
        if buf.len() < 2 {
            return SubscriptionState::NotSubscribed;
        }
        let bits = LittleEndian::read_u16(buf);
        if bits & CCCD_INDICATE != 0 {
            SubscriptionState::Indication
        } else if bits & CCCD_NOTIFY != 0 {
            SubscriptionState::Notify
        } else {
            SubscriptionState::NotSubscribed
        }
    }
}

/// Whether a service is primary or secondary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Primary,
    Secondary,
}

/// A descriptor found during discovery
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredDescriptor {
    pub handle: u16,
    pub uuid: Uuid,
}

/// A characteristic found during discovery, with all of its descriptors
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredCharacteristic {
    pub uuid: Uuid,
    pub properties: CharacteristicProperties,
    /// Declaration handle
    pub declaration_handle: u16,
    /// Value handle
    pub value_handle: u16,
    /// Raw declaration value, if the discovery procedure kept it
    pub declaration_value: Vec<u8>,
    /// Every attribute found between the declaration and the next characteristic.
    /// May include the declaration and value attributes themselves.
    pub descriptors: Vec<DiscoveredDescriptor>,
}

/// A service found during discovery, with all of its characteristics
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredService {
    pub uuid: Uuid,
    pub service_type: ServiceType,
    pub start_handle: u16,
    pub end_handle: u16,
    pub characteristics: Vec<DiscoveredCharacteristic>,
}

/// A value pushed by the peer for a subscribed characteristic
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// UUID of the characteristic the value belongs to
    pub uuid: Uuid,
    /// Value attribute handle
    pub handle: u16,
    pub value: Vec<u8>,
    /// `true` for indications, `false` for notifications
    pub is_indication: bool,
}
