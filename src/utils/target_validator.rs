//! Target URL validation.
//!
//! Targets are checked, not rewritten: the registry stores exactly what the
//! caller sent (minus surrounding whitespace) so a lookup returns it verbatim.

use crate::domain::error::RegistryError;
use url::Url;

/// Validates a target URL and returns the value to store.
///
/// # Rules
///
/// 1. Must be non-empty after trimming
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https`
/// 4. Must have a host
///
/// # Errors
///
/// Returns [`RegistryError::InvalidTarget`] describing the first failed rule.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_target(" https://a.test ").unwrap(), "https://a.test");
/// assert!(validate_target("not-a-url").is_err());
/// assert!(validate_target("javascript:alert(1)").is_err());
/// ```
pub fn validate_target(input: &str) -> Result<String, RegistryError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(RegistryError::invalid_target("URL is empty"));
    }

    let url = Url::parse(trimmed).map_err(|e| RegistryError::invalid_target(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(RegistryError::invalid_target(format!(
                "unsupported scheme '{other}', only http and https are allowed"
            )));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(RegistryError::invalid_target("URL has no host"));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https() {
        assert_eq!(
            validate_target("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_preserves_original_form() {
        let url = "HTTP://Example.COM:80/Path?q=1#frag";
        assert_eq!(validate_target(url).unwrap(), url);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_target("  https://a.test\n").unwrap(),
            "https://a.test"
        );
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            validate_target("   "),
            Err(RegistryError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_relative_url() {
        assert!(validate_target("not-a-url").is_err());
        assert!(validate_target("/just/a/path").is_err());
    }

    #[test]
    fn test_dangerous_schemes() {
        for url in [
            "javascript:alert(1)",
            "data:text/html,hi",
            "file:///etc/passwd",
            "ftp://example.com",
        ] {
            let err = validate_target(url).unwrap_err();
            assert!(
                matches!(err, RegistryError::InvalidTarget { .. }),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_host() {
        assert!(validate_target("http://").is_err());
    }
}
