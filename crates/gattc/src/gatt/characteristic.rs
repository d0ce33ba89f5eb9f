//! Client-side characteristic with its subscription state machine

use super::attribute::{CompletionEvent, GattcAttribute};
use super::database::GattcConfig;
use super::manager::OperationKind;
use super::operation::PendingOperation;
use super::transport::AttributeAccessor;
use super::types::{
    CharacteristicProperties, DiscoveredCharacteristic, Notification, SubscriptionState,
};
use crate::att::ATT_WRITE_CMD_HEADER_LEN;
use crate::bt_sig::{declarations, descriptors};
use crate::error::{GattcError, GattcResult};
use crate::uuid::Uuid;
use log::{debug, trace, warn};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Callback invoked for every notification or indication on a subscribed characteristic
pub type NotificationHandler = Arc<dyn Fn(&Notification) + Send + Sync + 'static>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A characteristic of a remote GATT database
pub struct GattcCharacteristic {
    uuid: Uuid,
    properties: CharacteristicProperties,
    /// Every attribute of the characteristic, ordered by handle
    attributes: Vec<GattcAttribute>,
    declaration_index: usize,
    value_index: usize,
    cccd_index: Option<usize>,
    /// Confirmed by the last successful CCCD write
    subscription: Arc<Mutex<SubscriptionState>>,
    handlers: Mutex<Vec<NotificationHandler>>,
    accessor: Arc<dyn AttributeAccessor>,
    config: Arc<RwLock<GattcConfig>>,
}

impl GattcCharacteristic {
    /// Builds a characteristic from discovery results.
    ///
    /// Descriptor entries are classified by UUID. Missing declaration or value
    /// attributes are created from the discovered handles.
    pub(crate) fn from_discovered(
        discovered: &DiscoveredCharacteristic,
        accessor: Arc<dyn AttributeAccessor>,
        config: Arc<RwLock<GattcConfig>>,
    ) -> GattcResult<Self> {
        let uuid = discovered.uuid.described();
        if discovered.value_handle <= discovered.declaration_handle {
            return Err(GattcError::InvalidDatabase(format!(
                "characteristic {:?} value handle {:#06x} is not after its declaration {:#06x}",
                uuid, discovered.value_handle, discovered.declaration_handle
            )));
        }

        let mut attributes: Vec<GattcAttribute> = discovered
            .descriptors
            .iter()
            .map(|desc| {
                GattcAttribute::new(desc.handle, desc.uuid.described(), accessor.clone(), Vec::new())
            })
            .collect();

        if !attributes.iter().any(|a| *a.uuid() == declarations::CHARACTERISTIC) {
            debug!(
                "No declaration attribute listed for {:?}, creating one at {:#06x}",
                uuid, discovered.declaration_handle
            );
            attributes.push(GattcAttribute::new(
                discovered.declaration_handle,
                declarations::CHARACTERISTIC.described(),
                accessor.clone(),
                discovered.declaration_value.clone(),
            ));
        }
        if !attributes.iter().any(|a| *a.uuid() == uuid) {
            debug!(
                "No value attribute listed for {:?}, creating one at {:#06x}",
                uuid, discovered.value_handle
            );
            attributes.push(GattcAttribute::new(
                discovered.value_handle,
                uuid,
                accessor.clone(),
                Vec::new(),
            ));
        }

        attributes.sort_by_key(|a| a.handle());
        if let Some(pair) = attributes.windows(2).find(|w| w[0].handle() == w[1].handle()) {
            return Err(GattcError::InvalidDatabase(format!(
                "characteristic {:?} lists handle {:#06x} twice",
                uuid,
                pair[0].handle()
            )));
        }

        let position = |target: &Uuid| attributes.iter().position(|a| a.uuid() == target);
        let declaration_index = position(&declarations::CHARACTERISTIC).unwrap_or_default();
        let value_index = position(&uuid).unwrap_or_default();
        let cccd_index = position(&descriptors::CCCD);

        Ok(Self {
            uuid,
            properties: discovered.properties,
            attributes,
            declaration_index,
            value_index,
            cccd_index,
            subscription: Arc::new(Mutex::new(SubscriptionState::NotSubscribed)),
            handlers: Mutex::new(Vec::new()),
            accessor,
            config,
        })
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn properties(&self) -> CharacteristicProperties {
        self.properties
    }

    pub fn declaration_attribute(&self) -> &GattcAttribute {
        &self.attributes[self.declaration_index]
    }

    pub fn value_attribute(&self) -> &GattcAttribute {
        &self.attributes[self.value_index]
    }

    pub fn cccd_attribute(&self) -> Option<&GattcAttribute> {
        self.cccd_index.map(|index| &self.attributes[index])
    }

    /// Declaration, value and descriptor attributes, ordered by handle
    pub fn attributes(&self) -> &[GattcAttribute] {
        &self.attributes
    }

    /// First and last handle owned by the characteristic
    pub fn handle_range(&self) -> (u16, u16) {
        let first = self.attributes.first().map_or(0, GattcAttribute::handle);
        let last = self.attributes.last().map_or(0, GattcAttribute::handle);
        (first, last)
    }

    /// Last known value of the characteristic
    pub fn value(&self) -> Vec<u8> {
        self.value_attribute().value()
    }

    pub fn readable(&self) -> bool {
        self.properties.can_read()
    }

    pub fn writable(&self) -> bool {
        self.properties.can_write()
    }

    pub fn writable_without_response(&self) -> bool {
        self.properties.can_write_without_response()
    }

    pub fn subscribable(&self) -> bool {
        self.properties.can_subscribe()
    }

    pub fn subscribed(&self) -> bool {
        self.subscription_state() != SubscriptionState::NotSubscribed
    }

    pub fn subscription_state(&self) -> SubscriptionState {
        *lock(&self.subscription)
    }

    /// Finds the first attribute of the characteristic with the given UUID
    pub fn find_descriptor(&self, uuid: &Uuid) -> Option<&GattcAttribute> {
        self.attributes.iter().find(|a| a.uuid() == uuid)
    }

    /// Reads the characteristic value
    pub fn read(&self) -> GattcResult<PendingOperation<Vec<u8>>> {
        if !self.readable() {
            return Err(GattcError::InvalidOperation(format!(
                "characteristic {:?} is not readable",
                self.uuid
            )));
        }
        self.value_attribute().read()
    }

    /// Writes the characteristic value with a write request
    pub fn write(&self, data: &[u8]) -> GattcResult<PendingOperation<Vec<u8>>> {
        if !self.writable() {
            return Err(GattcError::InvalidOperation(format!(
                "characteristic {:?} is not writable",
                self.uuid
            )));
        }
        self.value_attribute().write(data, true)
    }

    /// Writes the characteristic value with a write command.
    ///
    /// The payload must fit in `ATT_MTU - 3` bytes. Oversized payloads are only
    /// rejected here when [`GattcConfig::enforce_write_command_length`] is set.
    pub fn write_without_response(&self, data: &[u8]) -> GattcResult<PendingOperation<Vec<u8>>> {
        if !self.writable_without_response() {
            return Err(GattcError::InvalidOperation(format!(
                "characteristic {:?} does not accept writes without responses",
                self.uuid
            )));
        }

        let max_len = usize::from(self.accessor.mtu()).saturating_sub(ATT_WRITE_CMD_HEADER_LEN);
        if data.len() > max_len {
            let enforce = self
                .config
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .enforce_write_command_length;
            if enforce {
                return Err(GattcError::InvalidOperation(format!(
                    "write command of {} bytes exceeds {} bytes",
                    data.len(),
                    max_len
                )));
            }
            warn!(
                "Write command of {} bytes to {:?} exceeds {} bytes",
                data.len(),
                self.uuid,
                max_len
            );
        }
        self.value_attribute().write(data, false)
    }

    /// Registers `observer` for every completed read of the value attribute,
    /// including reads issued directly on [`value_attribute`](Self::value_attribute)
    pub fn on_read_complete<F>(&self, observer: F)
    where
        F: Fn(&CompletionEvent) + Send + Sync + 'static,
    {
        self.value_attribute().on_read_complete(observer);
    }

    /// Registers `observer` for every completed write of the value attribute
    pub fn on_write_complete<F>(&self, observer: F)
    where
        F: Fn(&CompletionEvent) + Send + Sync + 'static,
    {
        self.value_attribute().on_write_complete(observer);
    }

    /// Registers `handler` for values pushed by the peer without touching the CCCD.
    ///
    /// Useful when the peer was subscribed by someone else. [`unsubscribe`](Self::unsubscribe)
    /// drops it along with the other handlers.
    pub fn on_notification_received<F>(&self, handler: F)
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        lock(&self.handlers).push(Arc::new(handler));
    }

    /// Subscribes to notifications or indications.
    ///
    /// Indications are chosen when preferred and supported, or when
    /// notifications are not supported. `handler` is registered before the
    /// CCCD write is issued so values racing the write are still delivered.
    /// The operation resolves with the confirmed subscription state.
    pub fn subscribe<F>(
        &self,
        handler: F,
        prefer_indications: bool,
    ) -> GattcResult<PendingOperation<SubscriptionState>>
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        let cccd = self.subscription_cccd()?;
        let state = if (prefer_indications && self.properties.can_indicate())
            || !self.properties.can_notify()
        {
            SubscriptionState::Indication
        } else {
            SubscriptionState::Notify
        };

        let index = {
            let mut handlers = lock(&self.handlers);
            handlers.push(Arc::new(handler));
            handlers.len() - 1
        };

        match self.write_cccd(cccd, state) {
            Ok(op) => Ok(op),
            Err(err) => {
                let mut handlers = lock(&self.handlers);
                if index < handlers.len() {
                    handlers.remove(index);
                }
                Err(err)
            }
        }
    }

    /// Unsubscribes and drops every registered handler.
    ///
    /// No handler runs after this returns, whatever the outcome of the CCCD write.
    pub fn unsubscribe(&self) -> GattcResult<PendingOperation<SubscriptionState>> {
        let cccd = self.subscription_cccd()?;
        lock(&self.handlers).clear();
        self.write_cccd(cccd, SubscriptionState::NotSubscribed)
    }

    fn subscription_cccd(&self) -> GattcResult<&GattcAttribute> {
        if !self.subscribable() {
            return Err(GattcError::InvalidOperation(format!(
                "cannot subscribe to characteristic {:?}",
                self.uuid
            )));
        }
        self.cccd_attribute().ok_or_else(|| {
            GattcError::InvalidOperation(format!(
                "characteristic {:?} has no client characteristic configuration descriptor",
                self.uuid
            ))
        })
    }

    fn write_cccd(
        &self,
        cccd: &GattcAttribute,
        state: SubscriptionState,
    ) -> GattcResult<PendingOperation<SubscriptionState>> {
        let subscription = self.subscription.clone();
        let uuid = self.uuid;
        cccd.submit(
            OperationKind::Write,
            Some((state.to_buffer().to_vec(), true)),
            move |result| {
                let mut current = lock(&subscription);
                match result {
                    Ok(written) => {
                        let confirmed = SubscriptionState::from_buffer(&written);
                        debug!("{:?} subscription {:?} -> {:?}", uuid, *current, confirmed);
                        *current = confirmed;
                        Ok(confirmed)
                    }
                    Err(err) => {
                        debug!("{:?} CCCD write failed, staying {:?}: {}", uuid, *current, err);
                        Err(err)
                    }
                }
            },
        )
    }

    /// Applies a value pushed by the peer and runs the registered handlers.
    ///
    /// Indications are confirmed before any handler runs.
    pub(crate) fn handle_value(&self, data: &[u8], is_indication: bool) {
        let value_attribute = self.value_attribute();
        value_attribute.update(data);

        if is_indication {
            let confirm = self
                .config
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .confirm_indications;
            if confirm {
                self.accessor.confirm_indication(value_attribute.handle());
            }
        }

        let handlers: Vec<NotificationHandler> = lock(&self.handlers).clone();
        trace!(
            "{:?} value {} ({} handlers)",
            self.uuid,
            hex::encode(data),
            handlers.len()
        );
        if handlers.is_empty() {
            return;
        }

        let notification = Notification {
            uuid: self.uuid,
            handle: value_attribute.handle(),
            value: data.to_vec(),
            is_indication,
        };
        for handler in handlers {
            handler(&notification);
        }
    }
}

impl fmt::Debug for GattcCharacteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GattcCharacteristic")
            .field("uuid", &self.uuid)
            .field("properties", &self.properties)
            .field("handles", &self.handle_range())
            .field("subscription", &self.subscription_state())
            .finish()
    }
}
