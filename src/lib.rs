//! # dns01-solver
//!
//! An ACME DNS-01 challenge solver that manages TXT records on a DNS
//! provider's REST API to prove domain control during certificate issuance.
//!
//! The crate is one pluggable backend for a certificate-management
//! orchestrator: given a challenge FQDN and a token value, it creates or
//! removes the corresponding TXT record at the provider. Challenge
//! scheduling, propagation polling and retry policy all live in the caller.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [GoDaddy](https://developer.godaddy.com/) | `sso-key` key/secret header |
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_solver::{ChallengeSolver, SolverCredentials, create_solver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a solver from credentials
//!     let solver = create_solver(
//!         SolverCredentials::Godaddy {
//!             api_key: "your-key".to_string(),
//!             api_secret: "your-secret".to_string(),
//!         },
//!         &[], // recursive nameservers for zone discovery; empty = system
//!     )?;
//!
//!     // 2. Put the challenge record in place
//!     solver
//!         .present("example.com", "_acme-challenge.example.com.", "token-value")
//!         .await?;
//!
//!     // ... ask the ACME server to validate, wait for propagation ...
//!
//!     // 3. Remove it again
//!     solver
//!         .cleanup("example.com", "_acme-challenge.example.com.", "token-value")
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, SolverError>`](SolverError). Errors
//! propagate synchronously with no internal retry; use
//! [`SolverError::is_expected`] to pick a log level. Both `present` and
//! `cleanup` are idempotent, so re-invoking a failed operation is always
//! safe.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;
mod zone;

// Re-export error types
pub use error::{Result, SolverError};

// Re-export factory functions
pub use factory::{create_solver, solver_from_env};

// Re-export core traits
pub use traits::{ChallengeSolver, TxtRecordStore};

// Re-export types
pub use types::{DnsRecord, SolverCredentials};

// Re-export zone discovery (the resolver seam is public so callers can
// substitute their own strategy)
pub use zone::{SoaZoneResolver, ZoneResolver, un_fqdn};

// Re-export the concrete provider
pub use providers::{GODADDY_API_BASE, GodaddyClient, GodaddySolver};
