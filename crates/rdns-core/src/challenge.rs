//! ACME DNS-01 naming and timing constants

use crate::traits::PropagationTiming;
use std::time::Duration;

/// Label the DNS-01 challenge record lives under
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

/// How long orchestrators should wait for the record to propagate
pub const PROPAGATION_TIMEOUT: Duration = Duration::from_secs(180);

/// How often orchestrators should re-check propagation
pub const PROPAGATION_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Fixed timing advice reported by every rdns challenge provider
pub const PROPAGATION_TIMING: PropagationTiming =
    PropagationTiming::new(PROPAGATION_TIMEOUT, PROPAGATION_POLL_INTERVAL);

/// Build the challenge record name for a domain
///
/// The domain is used verbatim: `example.com` becomes
/// `_acme-challenge.example.com`.
pub fn challenge_fqdn(domain: &str) -> String {
    format!("{}.{}", ACME_CHALLENGE_LABEL, domain)
}
