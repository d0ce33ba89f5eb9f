//! A single attribute of a remote GATT database

use super::manager::OperationKind;
use super::operation::{completer, resolve, CompletionSink, PendingOperation, RequestId};
use super::transport::AttributeAccessor;
use crate::error::GattcResult;
use crate::uuid::Uuid;
use log::trace;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Outcome of a read or write on an attribute, as seen by observers
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionEvent {
    pub id: RequestId,
    pub handle: u16,
    pub kind: OperationKind,
    /// Value read, or bytes written
    pub result: GattcResult<Vec<u8>>,
}

/// Callback invoked for every completed read or write, whoever issued it
pub type CompletionObserver = Arc<dyn Fn(&CompletionEvent) + Send + Sync + 'static>;

#[derive(Default)]
struct AttributeState {
    value: Vec<u8>,
    /// Latest read issued and not yet completed
    pending_read: Option<RequestId>,
    /// Latest write issued and not yet completed
    pending_write: Option<RequestId>,
    /// Newest read completed so far
    completed_read: Option<RequestId>,
    /// Newest write completed so far
    completed_write: Option<RequestId>,
    read_observers: Vec<CompletionObserver>,
    write_observers: Vec<CompletionObserver>,
}

impl AttributeState {
    fn slots(&mut self, kind: OperationKind) -> (&mut Option<RequestId>, &mut Option<RequestId>) {
        match kind {
            OperationKind::Read => (&mut self.pending_read, &mut self.completed_read),
            OperationKind::Write => (&mut self.pending_write, &mut self.completed_write),
        }
    }

    fn observers(&mut self, kind: OperationKind) -> &mut Vec<CompletionObserver> {
        match kind {
            OperationKind::Read => &mut self.read_observers,
            OperationKind::Write => &mut self.write_observers,
        }
    }

    fn begin(&mut self, kind: OperationKind, id: RequestId) {
        let (pending, completed) = self.slots(kind);
        // A refused issue may have completed before the id was handed back
        if *completed < Some(id) {
            *pending = Some(id);
        }
    }

    fn complete(&mut self, kind: OperationKind, id: RequestId, result: &GattcResult<Vec<u8>>) {
        let (pending, completed) = self.slots(kind);
        if *pending == Some(id) {
            *pending = None;
        }
        *completed = (*completed).max(Some(id));

        if let Ok(data) = result {
            self.value = data.clone();
        }
    }
}

fn lock(state: &Mutex<AttributeState>) -> MutexGuard<'_, AttributeState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An addressable value on the peer: a declaration, a value or a descriptor.
///
/// The cached value changes on a successful read, on a successful write, and
/// when the peer pushes a new value.
pub struct GattcAttribute {
    handle: u16,
    uuid: Uuid,
    state: Arc<Mutex<AttributeState>>,
    accessor: Arc<dyn AttributeAccessor>,
}

impl GattcAttribute {
    pub(crate) fn new(
        handle: u16,
        uuid: Uuid,
        accessor: Arc<dyn AttributeAccessor>,
        value: Vec<u8>,
    ) -> Self {
        Self {
            handle,
            uuid,
            state: Arc::new(Mutex::new(AttributeState {
                value,
                ..AttributeState::default()
            })),
            accessor,
        }
    }

    pub fn handle(&self) -> u16 {
        self.handle
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    /// Last known value
    pub fn value(&self) -> Vec<u8> {
        lock(&self.state).value.clone()
    }

    /// Latest read that has not completed yet
    pub fn pending_read(&self) -> Option<RequestId> {
        lock(&self.state).pending_read
    }

    /// Latest write that has not completed yet
    pub fn pending_write(&self) -> Option<RequestId> {
        lock(&self.state).pending_write
    }

    /// Reads the attribute from the peer
    pub fn read(&self) -> GattcResult<PendingOperation<Vec<u8>>> {
        self.submit(OperationKind::Read, None, |result| result)
    }

    /// Writes `data` to the peer. The operation resolves with the bytes written.
    pub fn write(&self, data: &[u8], with_response: bool) -> GattcResult<PendingOperation<Vec<u8>>> {
        self.submit(
            OperationKind::Write,
            Some((data.to_vec(), with_response)),
            |result| result,
        )
    }

    /// Applies a value observed outside of a read, such as a notification
    pub fn update(&self, data: &[u8]) {
        lock(&self.state).value = data.to_vec();
    }

    /// Registers `observer` for every read completion on this attribute
    pub fn on_read_complete<F>(&self, observer: F)
    where
        F: Fn(&CompletionEvent) + Send + Sync + 'static,
    {
        lock(&self.state).read_observers.push(Arc::new(observer));
    }

    /// Registers `observer` for every write completion on this attribute
    pub fn on_write_complete<F>(&self, observer: F)
    where
        F: Fn(&CompletionEvent) + Send + Sync + 'static,
    {
        lock(&self.state).write_observers.push(Arc::new(observer));
    }

    /// Issues a read or write. The cached value and bookkeeping are updated,
    /// then observers run, then `then` maps the outcome for the caller.
    pub(crate) fn submit<T, F>(
        &self,
        kind: OperationKind,
        write: Option<(Vec<u8>, bool)>,
        then: F,
    ) -> GattcResult<PendingOperation<T>>
    where
        T: Send + 'static,
        F: FnOnce(GattcResult<Vec<u8>>) -> GattcResult<T> + Send + 'static,
    {
        let (tx, rx) = completer::<T>();
        let state = self.state.clone();
        let handle = self.handle;
        let sink: CompletionSink = Box::new(move |id, result| {
            let observers = {
                let mut state = lock(&state);
                state.complete(kind, id, &result);
                state.observers(kind).clone()
            };
            trace!(
                "Attribute {:#06x} {:?} {} done, {} observers",
                handle,
                kind,
                id,
                observers.len()
            );
            let result = if observers.is_empty() {
                result
            } else {
                let event = CompletionEvent {
                    id,
                    handle,
                    kind,
                    result,
                };
                for observer in &observers {
                    observer(&event);
                }
                event.result
            };
            resolve(id, tx, then(result));
        });

        let id = match write {
            None => self.accessor.read(self.handle, sink)?,
            Some((data, with_response)) => {
                self.accessor.write(self.handle, data, with_response, sink)?
            }
        };
        lock(&self.state).begin(kind, id);
        Ok(PendingOperation::new(id, rx))
    }
}

impl fmt::Debug for GattcAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GattcAttribute")
            .field("handle", &self.handle)
            .field("uuid", &self.uuid)
            .field("value", &hex::encode(self.value()))
            .finish()
    }
}
