// # Challenge Provider Trait
//
// The capability contract an ACME orchestrator expects from any DNS-01
// provider: publish the challenge, remove it afterwards, and advise how long
// to wait for propagation.
//
// The orchestrator drives the lifecycle:
//
// ```text
// present(domain, token, key_auth)
//     -> orchestrator polls DNS until propagated or timeout
// clean_up(domain, token, key_auth)
// ```

use async_trait::async_trait;
use std::time::Duration;

/// How long an orchestrator should wait for a record to propagate, and how
/// often it should re-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationTiming {
    /// Give up after this long
    pub timeout: Duration,
    /// Re-check DNS at this interval
    pub poll_interval: Duration,
}

impl PropagationTiming {
    /// Create a new timing advice
    pub const fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }
}

/// DNS-01 challenge provider as seen by an ACME orchestrator
///
/// Implementations enforce no ordering between [`present`](Self::present)
/// and [`clean_up`](Self::clean_up) and keep no state between them.
#[async_trait]
pub trait ChallengeProvider: Send + Sync {
    /// Publish the challenge record for `domain`
    ///
    /// # Parameters
    ///
    /// - `domain`: The domain being validated
    /// - `token`: The ACME challenge token (not the API token)
    /// - `key_authorization`: The value to publish, already encoded by the orchestrator
    async fn present(
        &self,
        domain: &str,
        token: &str,
        key_authorization: &str,
    ) -> Result<(), crate::Error>;

    /// Remove the challenge record for `domain`
    async fn clean_up(
        &self,
        domain: &str,
        token: &str,
        key_authorization: &str,
    ) -> Result<(), crate::Error>;

    /// Propagation timeout and poll interval advised to the orchestrator
    fn propagation_timing(&self) -> PropagationTiming;
}
