use serde::{Deserialize, Serialize};

/// Unified error type for all challenge-solver operations.
///
/// Most variants include a `provider` field identifying which backend produced
/// the error. All variants are serializable for structured error reporting.
///
/// No retry is performed inside this crate: every error propagates to the
/// caller synchronously, and the challenge orchestrator owns any backoff
/// policy. [`SolverError::is_expected`] tells callers which failures are
/// ordinary operating conditions rather than defects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum SolverError {
    /// A caller-supplied argument was rejected before any network call
    /// (e.g. an empty record name).
    InvalidInput {
        /// Provider that rejected the input.
        provider: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Construction was attempted without a complete API key/secret pair.
    MissingCredentials {
        /// Provider the credentials were meant for.
        provider: String,
    },

    /// The authoritative zone for an FQDN could not be discovered via SOA
    /// lookup (nameserver failure, or no SOA after following CNAMEs).
    ZoneResolution {
        /// FQDN whose zone was being resolved.
        fqdn: String,
        /// Error details from the resolver.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out (fixed per-request timeout, no retry).
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The provider API answered with a non-success HTTP status.
    ///
    /// `code`/`message` carry the provider's structured error body when it
    /// decodes; otherwise `message` holds the raw body text.
    Api {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code of the response.
        status: u16,
        /// Provider-side error code, if the body parsed.
        #[serde(rename = "provider_code")]
        code: Option<String>,
        /// Provider-side error message, or the raw response body.
        message: String,
    },

    /// A response body could not be decoded as the expected JSON shape.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl SolverError {
    /// Whether this failure is expected operating behavior (bad caller input,
    /// missing configuration), used for log-level selection.
    ///
    /// Returns `true` for `warn`-level conditions, `false` for `error`-level.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::MissingCredentials { .. }
        )
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { provider, detail } => {
                write!(f, "[{provider}] Invalid input: {detail}")
            }
            Self::MissingCredentials { provider } => {
                write!(f, "[{provider}] Missing credentials")
            }
            Self::ZoneResolution { fqdn, detail } => {
                write!(f, "Could not determine zone for '{fqdn}': {detail}")
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::Api {
                provider,
                status,
                code,
                message,
            } => {
                if let Some(code) = code {
                    write!(f, "[{provider}] API error (HTTP {status}): {code}: {message}")
                } else {
                    write!(f, "[{provider}] API error (HTTP {status}): {message}")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenience type alias for `Result<T, SolverError>`.
pub type Result<T> = std::result::Result<T, SolverError>;
