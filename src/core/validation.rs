//! Input validation for store operations.
//!
//! Service names and secret keys become filesystem paths, so both are checked
//! before any file is touched.

use crate::error::{Result, ValidationError};

/// Validate a service name.
///
/// Service names are slash-delimited relative paths:
/// - Cannot be empty
/// - Cannot start or end with `/`, or contain empty segments
/// - Segments cannot be `.` or `..`
/// - Cannot contain backslashes or NUL bytes
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_service(service: &str) -> Result<()> {
    if service.is_empty() {
        return Err(ValidationError::EmptyService.into());
    }

    let invalid = |reason: &str| -> crate::error::Error {
        ValidationError::InvalidService {
            service: service.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    if service.contains('\\') || service.contains('\0') {
        return Err(invalid("backslashes and NUL bytes are not allowed"));
    }

    for segment in service.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("relative path segments are not allowed")),
            _ => {}
        }
    }

    Ok(())
}

/// Validate a secret key.
///
/// A key names a single file inside the service directory:
/// - Cannot be empty
/// - Cannot contain `/`, backslashes or NUL bytes
/// - Cannot start with `.` (hidden files are not listed as secrets)
///
/// # Errors
///
/// Returns `ValidationError` if the key is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if let Some(ch) = key.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: format!("invalid character {:?}", ch),
        }
        .into());
    }

    if key.starts_with('.') {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: "cannot start with '.'".to_string(),
        }
        .into());
    }

    Ok(())
}
