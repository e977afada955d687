//! CPF check-digit validation

use super::masks::digits_only;

/// Compute the check digit for `factor` (10 or 11) over the first
/// `factor - 1` digits, weighted `factor` down to 2. A result of 10 maps to 0.
fn check_digit(digits: &[u32], factor: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .take((factor - 1) as usize)
        .enumerate()
        .map(|(i, d)| d * (factor - i as u32))
        .sum();
    let digit = (sum * 10) % 11;
    if digit == 10 {
        0
    } else {
        digit
    }
}

/// Validate a CPF, ignoring any formatting characters.
///
/// Rejects anything that is not exactly 11 digits and repeated-digit
/// sequences such as `111.111.111-11`, which pass the checksum.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = digits_only(cpf)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits, 10) == digits[9] && check_digit(&digits, 11) == digits[10]
}
