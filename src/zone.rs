//! Authoritative-zone discovery for challenge FQDNs.
//!
//! DNS-01 records live in the zone that is authoritative for the challenge
//! FQDN, which is not necessarily the registered domain (think delegated
//! subzones). [`SoaZoneResolver`] finds it with a single SOA query: a direct
//! answer names the zone apex, and a NODATA/NXDOMAIN response carries the
//! enclosing zone's SOA in its authority section. CNAMEs are followed by the
//! resolver.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::{
    TokioResolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
};

use crate::error::{Result, SolverError};

/// Strip the trailing dot from an FQDN, if present.
pub fn un_fqdn(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// Discovers the DNS zone authoritative for a given FQDN.
///
/// A trait seam so solvers can be exercised against a fake resolver; the
/// production implementation is [`SoaZoneResolver`].
#[async_trait]
pub trait ZoneResolver: Send + Sync {
    /// Resolve the authoritative zone for `fqdn`.
    ///
    /// Returns the zone in trailing-dot form (e.g. `"example.com."`).
    async fn find_zone_by_fqdn(&self, fqdn: &str) -> Result<String>;
}

/// SOA-based zone resolver backed by recursive nameservers.
pub struct SoaZoneResolver {
    resolver: TokioResolver,
}

impl SoaZoneResolver {
    /// Build a resolver that queries the given recursive nameservers on
    /// port 53. An empty list falls back to the host system configuration
    /// (e.g. `/etc/resolv.conf`), and to Hickory's default upstream set if
    /// that cannot be loaded.
    pub fn new(nameservers: &[IpAddr]) -> Self {
        Self {
            resolver: build_resolver(nameservers),
        }
    }
}

#[async_trait]
impl ZoneResolver for SoaZoneResolver {
    async fn find_zone_by_fqdn(&self, fqdn: &str) -> Result<String> {
        match self.resolver.soa_lookup(fqdn).await {
            // Direct SOA answer: fqdn (or its CNAME target) is a zone apex.
            Ok(response) => response
                .as_lookup()
                .record_iter()
                .next()
                .map(|record| record.name().to_string())
                .ok_or_else(|| SolverError::ZoneResolution {
                    fqdn: fqdn.to_string(),
                    detail: "SOA lookup returned an empty answer".to_string(),
                }),
            // NODATA/NXDOMAIN: the authority section names the enclosing zone.
            Err(e) => {
                let detail = e.to_string();
                e.into_soa()
                    .map(|soa| soa.name().to_string())
                    .ok_or(SolverError::ZoneResolution {
                        fqdn: fqdn.to_string(),
                        detail,
                    })
            }
        }
    }
}

fn build_resolver(nameservers: &[IpAddr]) -> TokioResolver {
    if !nameservers.is_empty() {
        let config = ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(nameservers, 53, true),
        );
        return TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(ResolverOpts::default())
            .build();
    }

    build_system_resolver()
}

/// Build a resolver using the host system DNS configuration (with fallback).
fn build_system_resolver() -> TokioResolver {
    #[cfg(any(unix, target_os = "windows"))]
    {
        match TokioResolver::builder_tokio() {
            Ok(builder) => return builder.build(),
            Err(e) => {
                log::warn!(
                    "Failed to load system DNS configuration, falling back to defaults: {e}"
                );
            }
        }
    }

    TokioResolver::builder_with_config(
        ResolverConfig::default(),
        TokioConnectionProvider::default(),
    )
    .with_options(ResolverOpts::default())
    .build()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn un_fqdn_strips_trailing_dot() {
        assert_eq!(un_fqdn("example.com."), "example.com");
        assert_eq!(un_fqdn("example.com"), "example.com");
        assert_eq!(un_fqdn("_acme-challenge.example.com."), "_acme-challenge.example.com");
    }

    #[test]
    fn un_fqdn_empty_name() {
        assert_eq!(un_fqdn(""), "");
        assert_eq!(un_fqdn("."), "");
    }

    #[tokio::test]
    async fn build_resolver_with_explicit_nameservers() {
        let ns: IpAddr = "8.8.8.8".parse().unwrap();
        // Should not panic
        let _resolver = SoaZoneResolver::new(&[ns]);
    }

    #[tokio::test]
    async fn build_resolver_with_empty_list_uses_system_conf() {
        let _resolver = SoaZoneResolver::new(&[]);
    }
}
