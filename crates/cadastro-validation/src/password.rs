//! Password validation functions

use crate::messages;

/// Minimum password length, in characters
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Password strength policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordPolicy {
    /// 6+ characters
    #[default]
    Basic,
    /// 6+ characters with uppercase, lowercase, and digit
    Complex,
}

impl PasswordPolicy {
    /// Name used in the `data-validate` descriptor
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordPolicy::Basic => "basic",
            PasswordPolicy::Complex => "complex",
        }
    }
}

/// Validates a non-empty password against a policy
///
/// Length is checked before composition, so a short password always reports
/// the length message.
pub fn validate_password(password: &str, policy: PasswordPolicy) -> Result<(), String> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(messages::PASSWORD_TOO_SHORT.to_string());
    }

    match policy {
        PasswordPolicy::Basic => Ok(()),
        PasswordPolicy::Complex => validate_complexity(password),
    }
}

fn validate_complexity(password: &str) -> Result<(), String> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_uppercase && has_lowercase && has_digit {
        Ok(())
    } else {
        Err(messages::PASSWORD_COMPLEXITY.to_string())
    }
}
