use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// Credentials for a challenge-solver backend.
///
/// Each variant carries the authentication material for one provider.
/// Pass to [`create_solver`](crate::create_solver) to obtain a ready solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SolverCredentials {
    /// GoDaddy API key/secret pair (`sso-key` auth scheme).
    Godaddy {
        /// Production API key.
        api_key: String,
        /// Secret matching the API key.
        api_secret: String,
    },
}

// ============ Wire record ============

/// A single entry of the GoDaddy domain-records resource.
///
/// This is the wire shape: optional fields are omitted when absent, matching
/// the API's tolerance for sparse objects. `data` is always serialized, even
/// when empty. Records live only for the duration of a call and are never
/// persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record name, relative to its zone (no zone suffix, no trailing dot).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Record type; always `"TXT"` in the challenge flow.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    /// Record payload; holds the challenge token value.
    pub data: String,
    /// Time to live, seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Priority (MX/SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Service port (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Service protocol (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Service name (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Record weight (SRV only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
}

impl DnsRecord {
    /// Build a minimal TXT record for a DNS-01 challenge.
    pub fn txt(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: "TXT".to_string(),
            data: data.into(),
            ttl: None,
            priority: None,
            port: None,
            protocol: None,
            service: None,
            weight: None,
        }
    }
}
