//! Request identities and completion handles

use crate::error::{GattcError, GattcResult, REASON_LOCAL_HOST_TERMINATED};
use futures::channel::oneshot;
use log::trace;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Opaque identity of one asynchronous operation on a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) const fn new(value: u64) -> Self {
        RequestId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Receives the outcome of a read or write issued through an accessor
pub type CompletionSink = Box<dyn FnOnce(RequestId, GattcResult<Vec<u8>>) + Send + 'static>;

/// Sending half of a [`PendingOperation`]
pub(crate) type Completer<T> = oneshot::Sender<GattcResult<T>>;

pub(crate) fn completer<T>() -> (Completer<T>, oneshot::Receiver<GattcResult<T>>) {
    oneshot::channel()
}

/// Resolves a pending operation. The caller may have dropped its handle.
pub(crate) fn resolve<T>(id: RequestId, completer: Completer<T>, result: GattcResult<T>) {
    if completer.send(result).is_err() {
        trace!("Operation {} completed after its handle was dropped", id);
    }
}

/// Handle to an operation whose result arrives asynchronously.
///
/// Either poll it with [`PendingOperation::try_result`] from the thread that
/// drives transport events, or `.await` it.
#[derive(Debug)]
pub struct PendingOperation<T> {
    id: RequestId,
    rx: oneshot::Receiver<GattcResult<T>>,
}

impl<T> PendingOperation<T> {
    pub(crate) fn new(id: RequestId, rx: oneshot::Receiver<GattcResult<T>>) -> Self {
        Self { id, rx }
    }

    /// Identity used to correlate this operation with completion events
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the result if the operation has completed.
    ///
    /// The result is handed out once; later calls report the operation as torn down.
    pub fn try_result(&mut self) -> Option<GattcResult<T>> {
        match self.rx.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(torn_down())),
        }
    }
}

impl<T> Future for PendingOperation<T> {
    type Output = GattcResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        Pin::new(&mut this.rx)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| Err(torn_down())))
    }
}

// The completer was dropped without an answer, which only happens when the
// owning database went away.
fn torn_down() -> GattcError {
    GattcError::Disconnected {
        reason: REASON_LOCAL_HOST_TERMINATED,
    }
}
