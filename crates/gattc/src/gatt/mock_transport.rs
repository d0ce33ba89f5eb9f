//! Recording implementation of GattcTransport for use in tests

use super::transport::GattcTransport;
use crate::att::ATT_DEFAULT_MTU;
use crate::error::TransportError;
use std::sync::{Arc, Mutex};

/// A call the core made into the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Read {
        conn_handle: u16,
        handle: u16,
    },
    Write {
        conn_handle: u16,
        handle: u16,
        data: Vec<u8>,
        with_response: bool,
    },
    Confirm {
        conn_handle: u16,
        handle: u16,
    },
}

struct MockState {
    calls: Vec<TransportCall>,
    mtu: u16,
    reject_issues: bool,
}

/// Records every call in order. Completions are injected by the test.
pub struct MockTransport(Mutex<MockState>);

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self(Mutex::new(MockState {
            calls: Vec::new(),
            mtu: ATT_DEFAULT_MTU,
            reject_issues: false,
        })))
    }

    /// Drains the calls recorded so far
    pub fn take_calls(&self) -> Vec<TransportCall> {
        std::mem::take(&mut self.0.lock().unwrap().calls)
    }

    pub fn set_mtu(&self, mtu: u16) {
        self.0.lock().unwrap().mtu = mtu;
    }

    /// Makes read and write issues fail synchronously
    pub fn reject_issues(&self, reject: bool) {
        self.0.lock().unwrap().reject_issues = reject;
    }

    fn record(&self, call: TransportCall, can_reject: bool) -> Result<(), TransportError> {
        let mut state = self.0.lock().unwrap();
        if can_reject && state.reject_issues {
            return Err(TransportError::Rejected("driver busy".into()));
        }
        state.calls.push(call);
        Ok(())
    }
}

impl GattcTransport for MockTransport {
    fn read(&self, conn_handle: u16, attr_handle: u16) -> Result<(), TransportError> {
        self.record(
            TransportCall::Read {
                conn_handle,
                handle: attr_handle,
            },
            true,
        )
    }

    fn write(
        &self,
        conn_handle: u16,
        attr_handle: u16,
        data: &[u8],
        with_response: bool,
    ) -> Result<(), TransportError> {
        self.record(
            TransportCall::Write {
                conn_handle,
                handle: attr_handle,
                data: data.to_vec(),
                with_response,
            },
            true,
        )
    }

    fn confirm_indication(&self, conn_handle: u16, attr_handle: u16) -> Result<(), TransportError> {
        self.record(
            TransportCall::Confirm {
                conn_handle,
                handle: attr_handle,
            },
            false,
        )
    }

    fn mtu(&self, _conn_handle: u16) -> u16 {
        self.0.lock().unwrap().mtu
    }
}
