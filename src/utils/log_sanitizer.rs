//! Log sanitization utilities
//!
//! Keeps API keys/secrets out of the logs entirely and caps how much of a
//! response body the debug traces may carry (challenge tokens and provider
//! error bodies can be large, and error bodies may echo request content).

/// Maximum number of bytes of body text to include in debug log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary at or below `index`.
///
/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (rounded down to a char boundary) with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Redact a credential for logging, keeping only a short prefix.
///
/// Shows at most the first four characters so that operators can tell which
/// key is in use without the log carrying usable material.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<empty>".to_string();
    }
    let prefix_end = floor_char_boundary(secret, 4.min(secret.len()));
    format!("{}****", &secret[..prefix_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "challenge-token";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 64);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 64)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_not_split() {
        let s = "你".repeat(200); // 3 bytes each
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn mask_keeps_short_prefix() {
        assert_eq!(mask_secret("dKqR7zW3abcdef"), "dKqR****");
    }

    #[test]
    fn mask_short_secret() {
        assert_eq!(mask_secret("ab"), "ab****");
    }

    #[test]
    fn mask_empty_secret() {
        assert_eq!(mask_secret(""), "<empty>");
    }
}
