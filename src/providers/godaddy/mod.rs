//! GoDaddy DNS-01 challenge backend.

mod client;
mod solver;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub use solver::GodaddySolver;

/// GoDaddy production API base URL.
pub const GODADDY_API_BASE: &str = "https://api.godaddy.com";

/// Environment variable holding the API key for [`GodaddySolver::from_env`].
pub(crate) const ENV_API_KEY: &str = "GODADDY_API_KEY";
/// Environment variable holding the API secret for [`GodaddySolver::from_env`].
pub(crate) const ENV_API_SECRET: &str = "GODADDY_API_SECRET";

/// Authenticated client for the GoDaddy domain-records API.
///
/// Holds only the base URL, the credential pair and a pooled HTTP transport
/// with a fixed timeout; there is no per-call mutable state, so one client
/// may be shared across concurrent challenge solves.
pub struct GodaddyClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) api_secret: String,
}

impl GodaddyClient {
    /// Create a client against the production API.
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self::with_base_url(api_key, api_secret, GODADDY_API_BASE)
    }

    /// Create a client against a custom base URL (OTE environment, tests).
    pub fn with_base_url(api_key: String, api_secret: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        log::debug!(
            "[godaddy] client for {} with key {}",
            base_url,
            mask_secret(&api_key)
        );
        Self {
            client: create_http_client(),
            base_url,
            api_key,
            api_secret,
        }
    }
}
