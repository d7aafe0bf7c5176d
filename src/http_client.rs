//! Generic HTTP request plumbing shared by provider clients.
//!
//! Providers keep full control over request construction (URL, headers,
//! body); this module unifies the send / log / read-body flow and the
//! JSON response parsing.
//!
//! There is deliberately no retry here: a failed request surfaces
//! immediately, and the challenge orchestrator owns any backoff policy.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::SolverError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return the status code and body text.
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, headers, body)
    /// * `provider_name` - provider identifier, for logging and errors
    /// * `method_name` - request method, for logging
    /// * `url` - request target, for logging
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on any HTTP response
    /// * `Err(SolverError::Timeout)` when the fixed per-request timeout fires
    /// * `Err(SolverError::NetworkError)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), SolverError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                SolverError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                SolverError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| SolverError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// # Returns
    /// * `Ok(T)` on success
    /// * `Err(SolverError::ParseError)` when the body does not match `T`
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, SolverError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            SolverError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
