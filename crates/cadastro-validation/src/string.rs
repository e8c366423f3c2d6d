//! String validation functions

/// True when the value has no visible content
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates a required value, ignoring surrounding whitespace
pub fn validate_required(s: &str, message: &str) -> Result<(), String> {
    if is_blank(s) {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validates a required value where whitespace counts as content (passwords)
pub fn validate_present(s: &str, message: &str) -> Result<(), String> {
    if s.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validates minimum length in characters, not bytes
pub fn validate_min_chars(s: &str, min: usize, message: &str) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Exact, byte-for-byte equality
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}
