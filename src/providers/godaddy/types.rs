//! GoDaddy API error body shapes.

use serde::Deserialize;

/// Structured error body returned by the GoDaddy API on non-success statuses.
///
/// Both fields are optional on the wire; plain-text error bodies are also
/// possible and handled by [`parse_api_error`].
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Extract `(code, message)` from an error response body.
///
/// Decodes the structured `{code, message}` shape into an owned target; when
/// the body is not that shape (plain text, HTML from a proxy), the raw body
/// text becomes the message and there is no code.
pub(crate) fn parse_api_error(body: &str) -> (Option<String>, String) {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { code, message }) if code.is_some() || message.is_some() => {
            let message = message.unwrap_or_else(|| body.to_string());
            (code, message)
        }
        _ => (None, body.to_string()),
    }
}
