//! Contract Test: Challenge Provider Forwarding
//!
//! This test verifies that the challenge provider is a pure adapter over its
//! record client.
//!
//! Constraints verified:
//! - present publishes the key authorization, never the ACME token
//! - clean_up deletes by domain only
//! - exactly one backend call per operation, no retries
//! - backend errors reach the caller unchanged
//! - propagation timing is a constant
//! - concurrent calls for distinct domains stay independent
//!
//! If this test fails, the orchestrator-facing contract is broken.

mod common;

use common::*;
use rdns_core::{ChallengeProvider, DnsChallengeProvider, Error};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn present_publishes_key_authorization_not_token() {
    let provider = DnsChallengeProvider::new(MockRecordClient::new());

    provider
        .present("example.com", "acme-challenge-token", "key-authorization-digest")
        .await
        .expect("present succeeds");

    let calls = provider.client().calls();
    assert_eq!(
        calls,
        vec![RecordCall::Set {
            domain: "example.com".to_string(),
            text: "key-authorization-digest".to_string(),
        }]
    );
    assert!(
        !format!("{:?}", calls).contains("acme-challenge-token"),
        "ACME token must never reach the backend"
    );
}

#[tokio::test]
async fn clean_up_deletes_by_domain_only() {
    let provider = DnsChallengeProvider::new(MockRecordClient::new());

    provider
        .clean_up("example.com", "acme-challenge-token", "key-authorization-digest")
        .await
        .expect("clean_up succeeds");

    assert_eq!(
        provider.client().calls(),
        vec![RecordCall::Delete {
            domain: "example.com".to_string(),
        }]
    );
}

#[tokio::test]
async fn failed_present_is_not_retried() {
    let provider =
        DnsChallengeProvider::new(MockRecordClient::with_behavior(MockBehavior::TransportFailure));

    let result = provider.present("example.com", "t", "k").await;

    assert!(result.is_err());
    assert_eq!(provider.client().set_call_count(), 1);
    assert_eq!(provider.client().delete_call_count(), 0);
}

#[tokio::test]
async fn backend_errors_propagate_unchanged() {
    let provider = DnsChallengeProvider::new(MockRecordClient::with_behavior(
        MockBehavior::RejectWithStatus(500),
    ));

    let err = provider
        .present("example.com", "t", "k")
        .await
        .expect_err("present fails");
    match err {
        Error::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("Expected UnexpectedStatus, got {:?}", other),
    }

    let err = provider
        .clean_up("example.com", "t", "k")
        .await
        .expect_err("clean_up fails");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn propagation_timing_is_constant() {
    let provider = DnsChallengeProvider::new(MockRecordClient::new());

    let before = provider.propagation_timing();
    provider.present("a.example.com", "t", "k").await.unwrap();
    provider.clean_up("a.example.com", "t", "k").await.unwrap();
    let after = provider.propagation_timing();

    assert_eq!(before, after);
    assert_eq!(before.timeout, Duration::from_secs(180));
    assert_eq!(before.poll_interval, Duration::from_secs(5));
}

#[tokio::test]
async fn concurrent_presents_for_distinct_domains_do_not_interfere() {
    let provider = Arc::new(DnsChallengeProvider::new(
        MockRecordClient::new().with_delay(Duration::from_millis(20)),
    ));

    let mut handles = Vec::new();
    for i in 0..8 {
        let provider = Arc::clone(&provider);
        handles.push(tokio::spawn(async move {
            let domain = format!("host{}.example.com", i);
            let value = format!("value-{}", i);
            provider.present(&domain, "t", &value).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("present succeeds");
    }

    let calls = provider.client().calls();
    assert_eq!(calls.len(), 8);
    for i in 0..8 {
        let expected = RecordCall::Set {
            domain: format!("host{}.example.com", i),
            text: format!("value-{}", i),
        };
        assert!(calls.contains(&expected), "missing call {:?}", expected);
    }
}
