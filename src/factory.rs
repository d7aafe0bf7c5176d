//! Solver factory functions.

use std::env;
use std::net::IpAddr;
use std::sync::Arc;

use crate::error::Result;
use crate::providers::GodaddySolver;
use crate::providers::godaddy::{ENV_API_KEY, ENV_API_SECRET};
use crate::traits::ChallengeSolver;
use crate::types::SolverCredentials;

/// Creates a [`ChallengeSolver`] from the given credentials.
///
/// The concrete backend is determined by the [`SolverCredentials`] variant.
/// The returned solver is wrapped in `Arc<dyn ChallengeSolver>` so the
/// orchestrator can share it across concurrent challenge solves.
///
/// `nameservers` are the recursive resolvers used for zone discovery; an
/// empty slice falls back to the host system configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use dns01_solver::{SolverCredentials, create_solver};
///
/// let solver = create_solver(
///     SolverCredentials::Godaddy {
///         api_key: "your-key".to_string(),
///         api_secret: "your-secret".to_string(),
///     },
///     &[],
/// ).unwrap();
/// ```
pub fn create_solver(
    credentials: SolverCredentials,
    nameservers: &[IpAddr],
) -> Result<Arc<dyn ChallengeSolver>> {
    match credentials {
        SolverCredentials::Godaddy {
            api_key,
            api_secret,
        } => Ok(Arc::new(GodaddySolver::new(
            api_key,
            api_secret,
            nameservers,
        )?)),
    }
}

/// Creates a GoDaddy [`ChallengeSolver`] with credentials read from the
/// process environment (`GODADDY_API_KEY` / `GODADDY_API_SECRET`).
///
/// This is the only place this crate touches the environment; prefer
/// [`create_solver`] with explicit credentials everywhere else.
pub fn solver_from_env(nameservers: &[IpAddr]) -> Result<Arc<dyn ChallengeSolver>> {
    create_solver(
        SolverCredentials::Godaddy {
            api_key: env::var(ENV_API_KEY).unwrap_or_default(),
            api_secret: env::var(ENV_API_SECRET).unwrap_or_default(),
        },
        nameservers,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SolverError;

    #[test]
    fn creates_godaddy_solver() {
        let solver = create_solver(
            SolverCredentials::Godaddy {
                api_key: "key".to_string(),
                api_secret: "secret".to_string(),
            },
            &[],
        )
        .unwrap();
        assert_eq!(solver.id(), "godaddy");
    }

    #[test]
    fn rejects_incomplete_credentials() {
        let err = create_solver(
            SolverCredentials::Godaddy {
                api_key: String::new(),
                api_secret: "secret".to_string(),
            },
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::MissingCredentials { .. }));
    }
}
