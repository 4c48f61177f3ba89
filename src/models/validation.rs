//! Field checks shared by the entity forms.

use crate::models::ServiceError;

/// Trims `value` and rejects it when nothing is left.
pub fn required(value: &str, message: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::ValidationError(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field; blank input becomes `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and at least
/// one dot in the domain part with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn email(value: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if !is_valid_email(trimmed) {
        return Err(ServiceError::ValidationError(
            "The email address format is not valid".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
