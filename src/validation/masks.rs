//! Input masks
//!
//! Every mask strips the input down to ASCII digits and then re-inserts the
//! separators, so any mask applied to its own output returns it unchanged.

/// Keep only ASCII digits
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Slice of `digits` between `start` and `end`, clamped to its length.
/// Safe to byte-index because the input is ASCII digits only.
fn span(digits: &str, start: usize, end: usize) -> &str {
    let end = end.min(digits.len());
    let start = start.min(end);
    &digits[start..end]
}

/// Format a CEP as `99999-999`
pub fn format_cep(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() > 5 {
        format!("{}-{}", span(&digits, 0, 5), span(&digits, 5, 8))
    } else {
        digits
    }
}

/// Format a CPF as `999.999.999-99`.
///
/// Separators only appear once the tenth digit is typed; shorter input is
/// shown as bare digits.
pub fn format_cpf(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() > 9 {
        format!(
            "{}.{}.{}-{}",
            span(&digits, 0, 3),
            span(&digits, 3, 6),
            span(&digits, 6, 9),
            span(&digits, 9, 11)
        )
    } else {
        digits
    }
}

/// Shared phone layout: `(DD) ` prefix, then the local number with a hyphen
/// after `hyphen_at` total digits, truncated at `max_digits`.
fn format_phone(value: &str, hyphen_at: usize, max_digits: usize) -> String {
    let digits = digits_only(value);
    if digits.is_empty() {
        return String::new();
    }

    let mut formatted = format!("({}", span(&digits, 0, 2));
    if digits.len() >= 2 {
        formatted.push_str(") ");
    }
    if digits.len() > 2 {
        if digits.len() > hyphen_at {
            formatted.push_str(span(&digits, 2, hyphen_at));
            formatted.push('-');
            formatted.push_str(span(&digits, hyphen_at, max_digits));
        } else {
            formatted.push_str(span(&digits, 2, hyphen_at));
        }
    }
    formatted
}

/// Format a landline as `(99) 9999-9999`
pub fn format_landline(value: &str) -> String {
    format_phone(value, 6, 10)
}

/// Format a cell phone as `(99) 99999-9999`
pub fn format_cell_phone(value: &str) -> String {
    format_phone(value, 7, 11)
}
