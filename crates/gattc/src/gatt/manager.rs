//! Read/write serialization for one connection
//!
//! The link driver services a single outstanding read and a single outstanding
//! write per connection. [`ReadWriteManager`] keeps one FIFO per kind, issues
//! the head of each queue, and routes every transport completion back to the
//! request that caused it.

use super::operation::{CompletionSink, RequestId};
use super::transport::{AttributeAccessor, GattcTransport};
use crate::att::ATT_DEFAULT_MTU;
use crate::error::{GattcError, GattcResult, TransportError};
use log::{info, trace, warn};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Which transport channel an operation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Read,
    Write,
}

#[derive(Clone)]
struct WritePayload {
    data: Vec<u8>,
    with_response: bool,
}

struct PendingRequest {
    id: RequestId,
    handle: u16,
    /// `None` for reads
    payload: Option<WritePayload>,
    sink: CompletionSink,
}

/// What the transport needs to issue a request, detached from its sink
struct Issue {
    id: RequestId,
    handle: u16,
    payload: Option<WritePayload>,
}

impl PendingRequest {
    fn issue(&self) -> Issue {
        Issue {
            id: self.id,
            handle: self.handle,
            payload: self.payload.clone(),
        }
    }
}

#[derive(Default)]
struct OperationQueue {
    in_flight: Option<PendingRequest>,
    waiting: VecDeque<PendingRequest>,
}

impl OperationQueue {
    /// Moves the next waiting request in flight
    fn promote(&mut self) -> Option<Issue> {
        let next = self.waiting.pop_front()?;
        let issue = next.issue();
        self.in_flight = Some(next);
        Some(issue)
    }

    fn drain(&mut self) -> impl Iterator<Item = PendingRequest> + '_ {
        self.in_flight.take().into_iter().chain(self.waiting.drain(..))
    }

    fn len(&self) -> usize {
        self.in_flight.iter().count() + self.waiting.len()
    }
}

struct ManagerState {
    next_id: u64,
    reads: OperationQueue,
    writes: OperationQueue,
    disconnect_reason: Option<u8>,
}

impl ManagerState {
    fn queue_mut(&mut self, kind: OperationKind) -> &mut OperationQueue {
        match kind {
            OperationKind::Read => &mut self.reads,
            OperationKind::Write => &mut self.writes,
        }
    }
}

/// Serializes reads and writes against the transport for one connection
pub struct ReadWriteManager {
    conn_handle: u16,
    transport: Arc<dyn GattcTransport>,
    state: Mutex<ManagerState>,
}

impl ReadWriteManager {
    pub fn new(conn_handle: u16, transport: Arc<dyn GattcTransport>) -> Self {
        Self {
            conn_handle,
            transport,
            state: Mutex::new(ManagerState {
                next_id: 1,
                reads: OperationQueue::default(),
                writes: OperationQueue::default(),
                disconnect_reason: None,
            }),
        }
    }

    pub fn conn_handle(&self) -> u16 {
        self.conn_handle
    }

    /// Number of requests of `kind` in flight or waiting
    pub fn pending(&self, kind: OperationKind) -> usize {
        self.lock().queue_mut(kind).len()
    }

    /// Reason the connection dropped, if it has
    pub fn disconnect_reason(&self) -> Option<u8> {
        self.lock().disconnect_reason
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enqueue(
        &self,
        kind: OperationKind,
        handle: u16,
        payload: Option<WritePayload>,
        sink: CompletionSink,
    ) -> GattcResult<RequestId> {
        let (id, issue) = {
            let mut state = self.lock();
            if let Some(reason) = state.disconnect_reason {
                return Err(GattcError::Disconnected { reason });
            }

            let id = RequestId::new(state.next_id);
            state.next_id += 1;

            let request = PendingRequest {
                id,
                handle,
                payload,
                sink,
            };
            let queue = state.queue_mut(kind);
            if queue.in_flight.is_none() {
                let issue = request.issue();
                queue.in_flight = Some(request);
                (id, Some(issue))
            } else {
                trace!(
                    "Queueing {:?} {} on handle {:#06x} behind {} others",
                    kind,
                    id,
                    handle,
                    queue.len()
                );
                queue.waiting.push_back(request);
                (id, None)
            }
        };

        if let Some(issue) = issue {
            self.issue(kind, issue);
        }
        Ok(id)
    }

    /// Hands `issue` to the transport. A synchronous refusal completes the
    /// request with a transport failure and moves on to the next one.
    fn issue(&self, kind: OperationKind, mut issue: Issue) {
        loop {
            trace!(
                "Issuing {:?} {} on handle {:#06x}",
                kind,
                issue.id,
                issue.handle
            );
            let outcome = match &issue.payload {
                None => self.transport.read(self.conn_handle, issue.handle),
                Some(write) => self.transport.write(
                    self.conn_handle,
                    issue.handle,
                    &write.data,
                    write.with_response,
                ),
            };
            let err = match outcome {
                Ok(()) => return,
                Err(err) => err,
            };
            warn!(
                "Transport refused {:?} {} on handle {:#06x}: {}",
                kind, issue.id, issue.handle, err
            );

            let (finished, next) = {
                let mut state = self.lock();
                let queue = state.queue_mut(kind);
                match queue.in_flight.take() {
                    Some(request) if request.id == issue.id => (request, queue.promote()),
                    // Already completed or drained while the transport held the request
                    other => {
                        queue.in_flight = other;
                        return;
                    }
                }
            };
            Self::deliver(finished, Err(err));
            match next {
                Some(next) => issue = next,
                None => return,
            }
        }
    }

    /// Completes the in-flight read on `handle`
    pub fn on_read_response(&self, handle: u16, result: Result<Vec<u8>, TransportError>) {
        self.finish(OperationKind::Read, handle, result);
    }

    /// Completes the in-flight write on `handle`
    pub fn on_write_response(&self, handle: u16, result: Result<(), TransportError>) {
        self.finish(OperationKind::Write, handle, result.map(|()| Vec::new()));
    }

    fn finish(&self, kind: OperationKind, handle: u16, outcome: Result<Vec<u8>, TransportError>) {
        let (finished, next) = {
            let mut state = self.lock();
            if state.disconnect_reason.is_some() {
                trace!("Dropping {:?} completion for handle {:#06x} after disconnect", kind, handle);
                return;
            }
            let queue = state.queue_mut(kind);
            match queue.in_flight.take() {
                Some(request) if request.handle == handle => (request, queue.promote()),
                Some(request) => {
                    warn!(
                        "{:?} completion for handle {:#06x} while {} on {:#06x} is in flight",
                        kind, handle, request.id, request.handle
                    );
                    queue.in_flight = Some(request);
                    return;
                }
                None => {
                    warn!("Unexpected {:?} completion for handle {:#06x}", kind, handle);
                    return;
                }
            }
        };

        // The next request is already marked in flight, so anything the sink
        // enqueues lands behind it.
        Self::deliver(finished, outcome);
        if let Some(next) = next {
            self.issue(kind, next);
        }
    }

    fn deliver(request: PendingRequest, outcome: Result<Vec<u8>, TransportError>) {
        let PendingRequest {
            id,
            handle,
            payload,
            sink,
        } = request;
        let result = match outcome {
            Ok(data) => Ok(payload.map_or(data, |write| write.data)),
            Err(source) => Err(GattcError::TransportFailure { handle, source }),
        };
        trace!("Completing {} on handle {:#06x}: ok={}", id, handle, result.is_ok());
        sink(id, result);
    }

    /// Fails every pending and queued request and refuses new ones
    pub fn disconnect(&self, reason: u8) {
        let drained: Vec<PendingRequest> = {
            let mut state = self.lock();
            if state.disconnect_reason.is_some() {
                return;
            }
            state.disconnect_reason = Some(reason);
            let mut drained: Vec<PendingRequest> = state.reads.drain().collect();
            drained.extend(state.writes.drain());
            drained
        };

        info!(
            "Connection {:#06x} dropped (reason {:#04x}), failing {} pending operations",
            self.conn_handle,
            reason,
            drained.len()
        );
        for request in drained {
            (request.sink)(request.id, Err(GattcError::Disconnected { reason }));
        }
    }
}

impl AttributeAccessor for ReadWriteManager {
    fn read(&self, handle: u16, sink: CompletionSink) -> GattcResult<RequestId> {
        self.enqueue(OperationKind::Read, handle, None, sink)
    }

    fn write(
        &self,
        handle: u16,
        data: Vec<u8>,
        with_response: bool,
        sink: CompletionSink,
    ) -> GattcResult<RequestId> {
        let payload = WritePayload {
            data,
            with_response,
        };
        self.enqueue(OperationKind::Write, handle, Some(payload), sink)
    }

    fn confirm_indication(&self, handle: u16) {
        if !self.is_connected() {
            return;
        }
        if let Err(err) = self.transport.confirm_indication(self.conn_handle, handle) {
            warn!("Failed to confirm indication on handle {:#06x}: {}", handle, err);
        }
    }

    /// Never below the ATT minimum, whatever the driver reports
    fn mtu(&self) -> u16 {
        self.transport.mtu(self.conn_handle).max(ATT_DEFAULT_MTU)
    }

    fn is_connected(&self) -> bool {
        self.lock().disconnect_reason.is_none()
    }
}
