use async_trait::async_trait;

use crate::error::Result;
use crate::types::DnsRecord;

/// A DNS-01 challenge solver.
///
/// One implementer per DNS backend. The challenge orchestrator calls
/// [`present`](Self::present) before asking the ACME server to validate,
/// and [`cleanup`](Self::cleanup) afterwards (including on validation
/// failure). Both operations are idempotent: repeating a call with the same
/// inputs leaves the remote state unchanged.
///
/// Implementations must be `Send + Sync`; the orchestrator solves challenges
/// for different domains concurrently against shared instances.
#[async_trait]
pub trait ChallengeSolver: Send + Sync + std::fmt::Debug {
    /// Solver identifier (e.g. `"godaddy"`).
    fn id(&self) -> &'static str;

    /// Create (or update in place) the TXT record that fulfils the challenge.
    ///
    /// # Arguments
    ///
    /// * `domain` - the domain being validated (e.g. `"example.com"`)
    /// * `fqdn` - the challenge record FQDN, trailing-dot form
    ///   (e.g. `"_acme-challenge.example.com."`)
    /// * `value` - the challenge token value the record must hold
    async fn present(&self, domain: &str, fqdn: &str, value: &str) -> Result<()>;

    /// Remove the TXT record at `fqdn`, whatever value it currently holds.
    ///
    /// `value` is accepted for interface symmetry but not compared; an
    /// already-absent record is success.
    async fn cleanup(&self, domain: &str, fqdn: &str, value: &str) -> Result<()>;
}

/// CRUD over TXT records scoped to `(zone, record_name)`.
///
/// This is the seam between solver logic and a provider's records API:
/// [`GodaddyClient`](crate::GodaddyClient) implements it over REST, and tests
/// substitute an in-memory store.
#[async_trait]
pub trait TxtRecordStore: Send + Sync {
    /// Fetch the TXT record named exactly `record_name` within `zone`.
    ///
    /// Returns `Ok(None)` when no such record exists; not-found is not an
    /// error here. Fails with `InvalidInput` when `record_name` is empty.
    async fn get_txt_record(&self, zone: &str, record_name: &str) -> Result<Option<DnsRecord>>;

    /// Create or replace the TXT record at `(zone, record_name)`.
    async fn set_txt_record(&self, zone: &str, record_name: &str, record: &DnsRecord)
    -> Result<()>;

    /// Delete the TXT record at `(zone, record_name)`. Deleting a record
    /// that does not exist is success.
    async fn delete_txt_record(&self, zone: &str, record_name: &str) -> Result<()>;
}
