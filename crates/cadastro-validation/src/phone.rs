//! Brazilian mobile phone masking and format validation
//!
//! Display format is `(DD) DDDDD-DDDD`: two-digit area code, five-digit
//! prefix, four-digit line number.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits in a complete phone number
pub const PHONE_DIGITS: usize = 11;

/// HTML5 `pattern` equivalent of the display format
pub const PHONE_PATTERN: &str = r"\([0-9]{2}\) [0-9]{5}-[0-9]{4}";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}$", PHONE_PATTERN)).expect("phone pattern is valid"));

/// Keeps only ASCII digits
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats raw phone input as `(DD) DDDDD-DDDD`
///
/// The mask only applies once the full eleven digits are present (extra digits
/// are dropped); until then the input is returned untouched so intermediate
/// typing shows exactly what the user entered.
///
/// # Examples
/// ```
/// use cadastro_validation::phone::mask_phone;
/// assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(mask_phone("123"), "123");
/// ```
pub fn mask_phone(raw: &str) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(PHONE_DIGITS);

    if digits.len() != PHONE_DIGITS {
        return raw.to_string();
    }

    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
}

/// True when the value is exactly in the masked display format
pub fn is_formatted_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}
