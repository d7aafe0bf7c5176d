//! GoDaddy `ChallengeSolver` implementation.

use std::env;
use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, SolverError};
use crate::traits::{ChallengeSolver, TxtRecordStore};
use crate::types::DnsRecord;
use crate::zone::{SoaZoneResolver, ZoneResolver, un_fqdn};

use super::{ENV_API_KEY, ENV_API_SECRET, GodaddyClient};

/// DNS-01 challenge solver for GoDaddy-hosted zones.
///
/// One instance per credential set. Both [`present`](ChallengeSolver::present)
/// and [`cleanup`](ChallengeSolver::cleanup) are idempotent; the solver keeps
/// no state of its own beyond what the remote API holds.
pub struct GodaddySolver {
    store: Arc<dyn TxtRecordStore>,
    resolver: Arc<dyn ZoneResolver>,
}

impl std::fmt::Debug for GodaddySolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GodaddySolver").finish_non_exhaustive()
    }
}

impl GodaddySolver {
    /// Create a solver from explicit credentials.
    ///
    /// `nameservers` are the recursive resolvers used for zone discovery; an
    /// empty list falls back to the system configuration.
    ///
    /// Fails with [`SolverError::MissingCredentials`] when either the key or
    /// the secret is empty.
    pub fn new(api_key: String, api_secret: String, nameservers: &[IpAddr]) -> Result<Self> {
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(SolverError::MissingCredentials {
                provider: "godaddy".to_string(),
            });
        }
        Ok(Self {
            store: Arc::new(GodaddyClient::new(api_key, api_secret)),
            resolver: Arc::new(SoaZoneResolver::new(nameservers)),
        })
    }

    /// Create a solver with credentials from the process environment
    /// (`GODADDY_API_KEY` / `GODADDY_API_SECRET`).
    ///
    /// Thin system-boundary convenience over [`GodaddySolver::new`].
    pub fn from_env(nameservers: &[IpAddr]) -> Result<Self> {
        let api_key = env::var(ENV_API_KEY).unwrap_or_default();
        let api_secret = env::var(ENV_API_SECRET).unwrap_or_default();
        Self::new(api_key, api_secret, nameservers)
    }

    /// Assemble a solver from an explicit record store and zone resolver.
    ///
    /// Lets callers substitute a custom API client (OTE endpoint) or zone
    /// resolution strategy; tests use it to inject fakes.
    pub fn with_components(
        store: Arc<dyn TxtRecordStore>,
        resolver: Arc<dyn ZoneResolver>,
    ) -> Self {
        Self { store, resolver }
    }

    /// Resolve `(zone_name, record_name)` for a challenge FQDN.
    async fn locate(&self, fqdn: &str) -> Result<(String, String)> {
        let zone = self.resolver.find_zone_by_fqdn(fqdn).await?;
        let zone_name = un_fqdn(&zone).to_string();
        let record_name = extract_record_name(fqdn, &zone_name);
        Ok((zone_name, record_name))
    }
}

#[async_trait]
impl ChallengeSolver for GodaddySolver {
    fn id(&self) -> &'static str {
        "godaddy"
    }

    async fn present(&self, _domain: &str, fqdn: &str, value: &str) -> Result<()> {
        let (zone_name, record_name) = self.locate(fqdn).await?;

        match self.store.get_txt_record(&zone_name, &record_name).await? {
            // Fresh name: create the record.
            None => {
                log::debug!("[godaddy] creating TXT record {record_name} in zone {zone_name}");
                self.store
                    .set_txt_record(&zone_name, &record_name, &DnsRecord::txt(&record_name, value))
                    .await
            }
            // Stale value: update in place with a single PUT.
            Some(mut record) if record.data != value => {
                log::debug!("[godaddy] updating TXT record {record_name} in zone {zone_name}");
                record.data = value.to_string();
                self.store
                    .set_txt_record(&zone_name, &record_name, &record)
                    .await
            }
            // Already holds the challenge value: nothing to write.
            Some(_) => {
                log::debug!("[godaddy] TXT record {record_name} already up to date");
                Ok(())
            }
        }
    }

    async fn cleanup(&self, _domain: &str, fqdn: &str, _value: &str) -> Result<()> {
        let (zone_name, record_name) = self.locate(fqdn).await?;

        log::debug!("[godaddy] deleting TXT record {record_name} in zone {zone_name}");
        self.store.delete_txt_record(&zone_name, &record_name).await
    }
}

/// Compute the record name for `fqdn` relative to `zone`: the `.{zone}`
/// suffix and the trailing dot are stripped. When the zone suffix does not
/// occur in the name, the whole un-FQDN'd name is used as-is.
fn extract_record_name(fqdn: &str, zone: &str) -> String {
    let name = un_fqdn(fqdn);
    match name.find(&format!(".{zone}")) {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}
