//! Core traits for the rdns challenge provider
//!
//! This module defines the abstract interfaces at both seams of the adapter.
//!
//! - [`TxtRecordClient`]: Publish and remove the challenge TXT record via an API
//! - [`ChallengeProvider`]: The contract consumed by an ACME orchestrator

pub mod challenge_provider;
pub mod record_client;

pub use challenge_provider::{ChallengeProvider, PropagationTiming};
pub use record_client::TxtRecordClient;
