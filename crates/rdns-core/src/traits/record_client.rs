// # TXT Record Client Trait
//
// Defines the backend interface for publishing and removing the ACME
// challenge TXT record through a DNS-management API.
//
// ## Implementations
//
// - rdns REST API: `rdns-provider` crate
//
// ## Usage
//
// ```rust,ignore
// use rdns_core::TxtRecordClient;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let client = /* TxtRecordClient implementation */;
//
//     client.set_record("example.com", "digest-value").await?;
//     client.delete_record("example.com").await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

/// Backend capable of managing the TXT record at `_acme-challenge.<domain>`
///
/// # Thread Safety
///
/// Implementations must be thread-safe; the challenge provider may be
/// invoked concurrently for different domains.
///
/// # Contract
///
/// - One API round trip per call
/// - No retries and no backoff: a failed round trip is a single reported failure
/// - No state retained between calls; records are addressed by domain only
/// - The API token never appears in logs or error messages
#[async_trait]
pub trait TxtRecordClient: Send + Sync {
    /// Create or replace the challenge TXT record for `domain`
    ///
    /// # Parameters
    ///
    /// - `domain`: The domain being validated (e.g., "example.com")
    /// - `text`: The TXT record value, published verbatim
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The API accepted the record
    /// - `Err(Error)`: Transport failure or a rejected request
    async fn set_record(&self, domain: &str, text: &str) -> Result<(), crate::Error>;

    /// Delete the challenge TXT record for `domain`
    async fn delete_record(&self, domain: &str) -> Result<(), crate::Error>;

    /// Get the backend name (for logging/debugging)
    fn backend_name(&self) -> &'static str;
}
