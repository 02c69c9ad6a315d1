//! Master password validation.
//!
//! Enforces minimum requirements when a password is first established.
//! Verification of an entered password never applies these rules; an
//! existing installation may predate them.

use crate::error::{QuillError, Result};

/// Minimum master password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate that a new master password meets minimum requirements.
///
/// # Requirements
///
/// - At least 8 characters long
/// - Not empty or only whitespace
pub fn validate_password(password: &str) -> Result<()> {
    if password.trim().is_empty() {
        return Err(QuillError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(QuillError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            MIN_PASSWORD_LENGTH,
            password.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("a-long-master-password").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("spaces and symbols are fine !@#").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password("short");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 8 characters"));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert!(validate_password("").is_err());
        assert!(validate_password("   ").is_err());
        assert!(validate_password("\n\t").is_err());
    }
}
