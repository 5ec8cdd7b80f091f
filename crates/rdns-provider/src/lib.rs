// # rdns DNS-01 Provider
//
// This crate binds the rdns DNS-management REST API to the challenge provider
// contract from `rdns-core`.
//
// ## API
//
// ```http
// POST {base}/domain/_acme-challenge.{domain}/txt
// Authorization: Bearer <token>
// Content-Type: application/json
//
// {"text": "<key authorization>"}
//
// DELETE {base}/domain/_acme-challenge.{domain}/txt
// Authorization: Bearer <token>
// Content-Type: application/json
// ```
//
// Setting a record succeeds only on `200 OK`. Deleting a record ignores the
// response status unless strict cleanup is configured.
//
// ## Behavior
//
// - One HTTP request per operation
// - No retry, no backoff, no caching
// - Bounded per-request timeout (30 seconds unless configured)
// - API token never appears in logs, errors or Debug output
//
// ## Usage
//
// ```rust,no_run
// use rdns_core::ChallengeProvider;
// use rdns_provider::RdnsProvider;
//
// # async fn run() -> rdns_core::Result<()> {
// let provider = RdnsProvider::new("https://dns.example.net/api", "api-token")?;
//
// provider.present("example.com", "acme-token", "key-auth").await?;
// // ... orchestrator waits for propagation ...
// provider.clean_up("example.com", "acme-token", "key-auth").await?;
// # Ok(())
// # }
// ```

use async_trait::async_trait;
use rdns_core::traits::{ChallengeProvider, PropagationTiming, TxtRecordClient};
use rdns_core::{DnsChallengeProvider, Error, ProviderConfig, Result, challenge_fqdn};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::time::Duration;

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration =
    Duration::from_secs(rdns_core::config::DEFAULT_HTTP_TIMEOUT_SECS);

/// Body of the set-record call
#[derive(Debug, Serialize)]
struct SetTxtRequest<'a> {
    text: &'a str,
}

/// Record client for the rdns REST API
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API token.
pub struct RdnsClient {
    /// HTTP client for API requests
    client: reqwest::Client,

    /// Base API URL, used verbatim as the URL prefix
    api_endpoint: String,

    /// Bearer token
    /// ⚠️ NEVER log this value
    api_token: String,

    /// Treat non-2xx delete responses as errors
    strict_cleanup: bool,
}

impl std::fmt::Debug for RdnsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RdnsClient")
            .field("api_endpoint", &self.api_endpoint)
            .field("api_token", &"<REDACTED>")
            .field("strict_cleanup", &self.strict_cleanup)
            .finish()
    }
}

impl RdnsClient {
    /// Create a new client with the default HTTP timeout
    ///
    /// Performs no I/O. Fails only if the HTTP client cannot be built
    /// (e.g., the TLS backend fails to initialize).
    pub fn new(api_endpoint: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let client = build_http_client(DEFAULT_HTTP_TIMEOUT)?;
        Ok(Self::with_http_client(client, api_endpoint, api_token))
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let client = build_http_client(Duration::from_secs(config.http_timeout_secs))?;
        Ok(
            Self::with_http_client(client, config.api_endpoint.clone(), config.api_token.clone())
                .with_strict_cleanup(config.strict_cleanup),
        )
    }

    /// Create a client over a caller-supplied HTTP client
    ///
    /// Timeouts and connection pooling are whatever `client` was built with.
    pub fn with_http_client(
        client: reqwest::Client,
        api_endpoint: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_endpoint: api_endpoint.into(),
            api_token: api_token.into(),
            strict_cleanup: false,
        }
    }

    /// Enable or disable strict cleanup
    pub fn with_strict_cleanup(mut self, strict: bool) -> Self {
        self.strict_cleanup = strict;
        self
    }

    /// Base API URL
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Whether non-2xx delete responses are reported as errors
    pub fn strict_cleanup(&self) -> bool {
        self.strict_cleanup
    }

    /// URL of the challenge TXT record for `domain`
    pub fn record_url(&self, domain: &str) -> String {
        format!("{}/domain/{}/txt", self.api_endpoint, challenge_fqdn(domain))
    }
}

#[async_trait]
impl TxtRecordClient for RdnsClient {
    /// Create or replace the challenge TXT record
    ///
    /// # API Call
    ///
    /// ```http
    /// POST {base}/domain/_acme-challenge.{domain}/txt
    /// {"text": "..."}
    /// ```
    ///
    /// Only `200 OK` is accepted. On any other status the full response body
    /// is read and returned in the error.
    async fn set_record(&self, domain: &str, text: &str) -> Result<()> {
        let url = self.record_url(domain);
        let body = serde_json::to_vec(&SetTxtRequest { text })?;

        tracing::debug!(domain = %domain, url = %url, "Setting TXT record");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response
                .text()
                .await
                .map_err(|e| Error::transport(format!("Failed to read response body: {}", e)))?;

            tracing::debug!(domain = %domain, status = status.as_u16(), "TXT record rejected");
            return Err(Error::unexpected_status(status.as_u16(), error_text));
        }

        tracing::info!(domain = %domain, "TXT record set");
        Ok(())
    }

    /// Delete the challenge TXT record
    ///
    /// # API Call
    ///
    /// ```http
    /// DELETE {base}/domain/_acme-challenge.{domain}/txt
    /// ```
    ///
    /// The response status is only checked in strict cleanup mode.
    async fn delete_record(&self, domain: &str) -> Result<()> {
        let url = self.record_url(domain);

        tracing::debug!(domain = %domain, url = %url, "Deleting TXT record");

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.api_token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(domain = %domain, "TXT record deleted");
            return Ok(());
        }

        if self.strict_cleanup {
            let error_text = response
                .text()
                .await
                .map_err(|e| Error::transport(format!("Failed to read response body: {}", e)))?;

            tracing::debug!(domain = %domain, status = status.as_u16(), "TXT record deletion rejected");
            return Err(Error::unexpected_status(status.as_u16(), error_text));
        }

        tracing::warn!(
            domain = %domain,
            status = status.as_u16(),
            "TXT record deletion returned non-success status, ignoring"
        );
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "rdns"
    }
}

/// rdns DNS-01 challenge provider
///
/// Forwards `present` to [`RdnsClient::set_record`] and `clean_up` to
/// [`RdnsClient::delete_record`]; the ACME token is never sent.
#[derive(Debug)]
pub struct RdnsProvider {
    inner: DnsChallengeProvider<RdnsClient>,
}

impl RdnsProvider {
    /// Create a provider for `api_endpoint` authenticated with `api_token`
    ///
    /// Performs no I/O and no validation of either value.
    pub fn new(api_endpoint: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(RdnsClient::new(api_endpoint, api_token)?))
    }

    /// Create a provider from a validated configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::with_client(RdnsClient::from_config(config)?))
    }

    /// Create a provider over an existing record client
    pub fn with_client(client: RdnsClient) -> Self {
        Self {
            inner: DnsChallengeProvider::new(client),
        }
    }

    /// Access the underlying record client
    pub fn client(&self) -> &RdnsClient {
        self.inner.client()
    }
}

#[async_trait]
impl ChallengeProvider for RdnsProvider {
    async fn present(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()> {
        self.inner.present(domain, token, key_authorization).await
    }

    async fn clean_up(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()> {
        self.inner.clean_up(domain, token, key_authorization).await
    }

    fn propagation_timing(&self) -> PropagationTiming {
        self.inner.propagation_timing()
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))
}

fn map_request_error(err: reqwest::Error) -> Error {
    if err.is_builder() {
        Error::request_build(error_chain(&err))
    } else {
        Error::transport(format!("HTTP request failed: {}", error_chain(&err)))
    }
}

/// Render an error with all of its sources, e.g.
/// `builder error: relative URL without a base`
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
