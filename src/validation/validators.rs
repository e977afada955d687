//! Structural field validators used on submit

use super::masks::digits_only;
use regex::Regex;
use std::sync::OnceLock;

/// Validate an e-mail address: `local@domain.tld` with no whitespace and a
/// single `@`. Not RFC 5322 complete.
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    regex.is_match(email)
}

/// Validate a landline or cell phone number.
///
/// Passes when the digits contain a run of 10 or 11 digits anywhere, so
/// longer digit strings also pass.
pub fn validate_phone(phone: &str) -> bool {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX.get_or_init(|| Regex::new(r"\d{10,11}").expect("valid regex"));
    regex.is_match(&digits_only(phone))
}

/// Validate a CEP: the digits contain a run of 8 digits anywhere.
pub fn validate_cep(cep: &str) -> bool {
    static CEP_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = CEP_REGEX.get_or_init(|| Regex::new(r"\d{8}").expect("valid regex"));
    regex.is_match(&digits_only(cep))
}
