//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part of permitted characters, a single `@`, then dot-separated domain
/// labels (alphanumeric at both ends, hyphens inside, up to 63 characters).
/// No TLD is required, so intranet addresses like `joao@empresa` pass.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Validates email address syntax
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
