// # rdns-core
//
// Core library for the rdns DNS-01 challenge provider.
//
// ## Architecture Overview
//
// An ACME orchestrator proves domain ownership by asking a provider to publish
// a TXT record at `_acme-challenge.<domain>`, polling until it resolves, and
// asking the provider to remove it again. This crate holds the parts of that
// flow that do not depend on a particular DNS API:
//
// - **TxtRecordClient**: Trait for setting/deleting the challenge TXT record via an API
// - **ChallengeProvider**: Trait the orchestrator consumes (present, clean up, timing)
// - **DnsChallengeProvider**: Adapter composing a record client behind the contract
// - **ProviderConfig**: Endpoint, token and transport settings
//
// ## Design Principles
//
// 1. **Stateless**: Nothing is retained between calls; records are keyed by domain
// 2. **Single-shot**: One API round trip per operation, no retries, no backoff
// 3. **Transparent errors**: Backend errors reach the orchestrator unchanged

pub mod challenge;
pub mod config;
pub mod error;
pub mod provider;
pub mod traits;

// Re-export core types for convenience
pub use challenge::{ACME_CHALLENGE_LABEL, PROPAGATION_TIMING, challenge_fqdn};
pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use provider::DnsChallengeProvider;
pub use traits::{ChallengeProvider, PropagationTiming, TxtRecordClient};
