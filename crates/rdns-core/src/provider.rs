//! DNS-01 challenge provider adapter
//!
//! [`DnsChallengeProvider`] exposes any [`TxtRecordClient`] through the
//! [`ChallengeProvider`] contract. It is a pure forwarder:
//!
//! - `present` publishes the key authorization verbatim
//! - `clean_up` deletes the record for the domain
//! - errors from the record client are returned unchanged
//!
//! The ACME challenge token is accepted for contract compatibility but is
//! never sent to the backend.

use crate::challenge::PROPAGATION_TIMING;
use crate::error::Result;
use crate::traits::{ChallengeProvider, PropagationTiming, TxtRecordClient};
use async_trait::async_trait;

/// Challenge provider backed by a TXT record client
pub struct DnsChallengeProvider<C> {
    client: C,
}

impl<C: TxtRecordClient> DnsChallengeProvider<C> {
    /// Wrap a record client
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying record client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Unwrap into the underlying record client
    pub fn into_client(self) -> C {
        self.client
    }
}

impl<C: TxtRecordClient> std::fmt::Debug for DnsChallengeProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsChallengeProvider")
            .field("backend", &self.client.backend_name())
            .finish()
    }
}

#[async_trait]
impl<C: TxtRecordClient> ChallengeProvider for DnsChallengeProvider<C> {
    async fn present(&self, domain: &str, _token: &str, key_authorization: &str) -> Result<()> {
        tracing::debug!(
            domain = %domain,
            backend = self.client.backend_name(),
            "Presenting DNS-01 challenge"
        );
        self.client.set_record(domain, key_authorization).await
    }

    async fn clean_up(&self, domain: &str, _token: &str, _key_authorization: &str) -> Result<()> {
        tracing::debug!(
            domain = %domain,
            backend = self.client.backend_name(),
            "Cleaning up DNS-01 challenge"
        );
        self.client.delete_record(domain).await
    }

    fn propagation_timing(&self) -> PropagationTiming {
        PROPAGATION_TIMING
    }
}
