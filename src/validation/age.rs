//! Minor derivation from the date of birth

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Accepted date of birth layouts: ISO (`AAAA-MM-DD`) and Brazilian
/// (`DD/MM/AAAA`), both with a four-digit year.
const DATE_FORMATS: [(&str, &str); 2] = [
    (r"^\d{4}-\d{2}-\d{2}$", "%Y-%m-%d"),
    (r"^\d{2}/\d{2}/\d{4}$", "%d/%m/%Y"),
];

fn date_shapes() -> &'static [Regex; 2] {
    static SHAPES: OnceLock<[Regex; 2]> = OnceLock::new();
    SHAPES.get_or_init(|| {
        DATE_FORMATS.map(|(shape, _)| Regex::new(shape).expect("valid regex"))
    })
}

/// Year of a complete date of birth, or `None` while it is incomplete or
/// invalid.
///
/// chrono's `%Y` takes as few as one digit, so the layout is checked first
/// and `04/03/12` is rejected instead of read as year 12.
pub fn parse_birth_year(date_of_birth: &str) -> Option<i32> {
    let trimmed = date_of_birth.trim();
    date_shapes()
        .iter()
        .zip(DATE_FORMATS)
        .filter(|(shape, _)| shape.is_match(trimmed))
        .find_map(|(_, (_, format))| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.year())
}

/// Whether the person counts as a minor: `current_year - birth_year < 18`.
///
/// Month and day are ignored. An unparseable date is never a minor.
pub fn is_minor(date_of_birth: &str, current_year: i32) -> bool {
    parse_birth_year(date_of_birth).is_some_and(|year| current_year - year < 18)
}
