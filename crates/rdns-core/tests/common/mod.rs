//! Test doubles and common utilities for challenge provider contract tests
//!
//! The mock record client records every call it receives so tests can assert
//! exactly what the adapter forwarded.

#![allow(dead_code)]

use rdns_core::error::{Error, Result};
use rdns_core::traits::TxtRecordClient;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A call observed by [`MockRecordClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCall {
    Set { domain: String, text: String },
    Delete { domain: String },
}

/// How the mock should answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    Succeed,
    RejectWithStatus(u16),
    TransportFailure,
}

/// A mock TxtRecordClient that tracks calls
pub struct MockRecordClient {
    calls: Mutex<Vec<RecordCall>>,
    set_call_count: AtomicUsize,
    delete_call_count: AtomicUsize,
    behavior: MockBehavior,
    delay: Option<Duration>,
}

impl MockRecordClient {
    /// Create a mock that accepts every call
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Succeed)
    }

    /// Create a mock that answers every call the given way
    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            set_call_count: AtomicUsize::new(0),
            delete_call_count: AtomicUsize::new(0),
            behavior,
            delay: None,
        }
    }

    /// Sleep before answering, to force calls to overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<RecordCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_call_count(&self) -> usize {
        self.set_call_count.load(Ordering::SeqCst)
    }

    pub fn delete_call_count(&self) -> usize {
        self.delete_call_count.load(Ordering::SeqCst)
    }

    async fn answer(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.behavior {
            MockBehavior::Succeed => Ok(()),
            MockBehavior::RejectWithStatus(status) => {
                Err(Error::unexpected_status(status, "internal error"))
            }
            MockBehavior::TransportFailure => Err(Error::transport("connection refused")),
        }
    }
}

#[async_trait::async_trait]
impl TxtRecordClient for MockRecordClient {
    async fn set_record(&self, domain: &str, text: &str) -> Result<()> {
        self.set_call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(RecordCall::Set {
            domain: domain.to_string(),
            text: text.to_string(),
        });
        self.answer().await
    }

    async fn delete_record(&self, domain: &str) -> Result<()> {
        self.delete_call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(RecordCall::Delete {
            domain: domain.to_string(),
        });
        self.answer().await
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
