//! Short code generation and validation utilities.
//!
//! Generated codes are 8 lowercase hex characters drawn from the operating
//! system's CSPRNG. Requested codes are taken verbatim but must be safe to use
//! as a single URL path segment.

use crate::domain::error::RegistryError;

/// Number of random bytes behind a generated code (two hex characters each).
const CODE_LENGTH_BYTES: usize = 4;

/// Upper bound on the length of a requested code.
pub const MAX_CODE_LENGTH: usize = 64;

/// Codes that would be shadowed by transport routes.
const RESERVED_CODES: &[&str] = &["links", "shorten", "delete", "health", "static", "index.html"];

/// Generates a random 8-character hexadecimal short code.
///
/// Returns `None` if the system random number generator fails; the caller
/// treats that as a failed attempt.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code().unwrap();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> Option<String> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    match getrandom::fill(&mut buffer) {
        Ok(()) => Some(hex::encode(buffer)),
        Err(e) => {
            tracing::error!(error = %e, "System random source failed");
            None
        }
    }
}

/// Validates a caller-supplied short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Case is preserved and significant
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`RegistryError::InvalidCode`] if any rule is violated.
pub fn validate_code(code: &str) -> Result<(), RegistryError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(RegistryError::invalid_code(format!(
            "code must be 1-{MAX_CODE_LENGTH} characters, got {}",
            code.len()
        )));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(RegistryError::invalid_code(
            "code can only contain letters, digits, hyphens and underscores",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(RegistryError::invalid_code(format!("'{code}' is reserved")));
    }

    Ok(())
}
