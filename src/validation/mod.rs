//! Brazilian document formatting and validation
//!
//! Pure functions with no UI or network dependencies:
//! - `masks`: display masks for CEP, CPF and phone numbers
//! - `cpf`: CPF check-digit validation
//! - `validators`: structural checks used on submit
//! - `age`: minor derivation from the date of birth

mod age;
mod cpf;
mod masks;
mod validators;

pub use age::{is_minor, parse_birth_year};
pub use cpf::validate_cpf;
pub use masks::{digits_only, format_cell_phone, format_cep, format_cpf, format_landline};
pub use validators::{validate_cep, validate_email, validate_phone};
