//! Submission checks
//!
//! Checks run in a fixed order and stop at the first failure; the `Display`
//! text of each variant is the alert shown to the student.

use super::field::FieldId;
use super::form_data::FormData;
use crate::validation::{
    parse_birth_year, validate_cep, validate_cpf, validate_email, validate_phone,
};
use thiserror::Error;

/// Reason a submission was blocked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Preencha o campo: {}", .0.label())]
    MissingField(FieldId),

    #[error("Data de nascimento inválida!")]
    InvalidBirthDate,

    #[error("E-mail inválido!")]
    InvalidEmail,

    #[error("CPF inválido!")]
    InvalidCpf,

    #[error("Telefone fixo inválido!")]
    InvalidLandline,

    #[error("Celular inválido!")]
    InvalidCellPhone,

    #[error("Senhas não coincidem!")]
    PasswordMismatch,

    #[error("CEP inválido!")]
    InvalidCep,
}

/// Validate a form for submission.
///
/// Required fields are checked first, and only among the visible ones, so an
/// adult never trips over the guardian and address fields. The date of birth
/// must then be a complete date, since it decides which fields are visible.
pub fn validate_submission(data: &FormData) -> Result<(), SubmissionError> {
    if let Some(missing) = data
        .visible_fields()
        .into_iter()
        .find(|field| field.is_required() && data.value(*field).is_empty())
    {
        return Err(SubmissionError::MissingField(missing));
    }
    if parse_birth_year(&data.date_of_birth).is_none() {
        return Err(SubmissionError::InvalidBirthDate);
    }

    if !validate_email(&data.email) {
        return Err(SubmissionError::InvalidEmail);
    }
    if !validate_cpf(&data.cpf) {
        return Err(SubmissionError::InvalidCpf);
    }
    if !validate_phone(&data.landline) {
        return Err(SubmissionError::InvalidLandline);
    }
    if !validate_phone(&data.cell_phone) {
        return Err(SubmissionError::InvalidCellPhone);
    }
    if data.password != data.confirm_password {
        return Err(SubmissionError::PasswordMismatch);
    }
    if data.is_minor && !validate_cep(&data.zip_code) {
        return Err(SubmissionError::InvalidCep);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_adult() -> FormData {
        FormData {
            full_name: "Ana Souza".to_string(),
            date_of_birth: "1998-04-12".to_string(),
            cpf: "529.982.247-25".to_string(),
            landline: "(11) 3456-7890".to_string(),
            cell_phone: "(11) 98765-4321".to_string(),
            email: "ana@faculdade.edu.br".to_string(),
            password: "segredo123".to_string(),
            confirm_password: "segredo123".to_string(),
            ..Default::default()
        }
    }

    fn valid_minor() -> FormData {
        FormData {
            date_of_birth: "2012-04-12".to_string(),
            is_minor: true,
            father_name: "Carlos Souza".to_string(),
            mother_name: "Maria Souza".to_string(),
            zip_code: "01310-930".to_string(),
            address: "Avenida Paulista".to_string(),
            number: "2100".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            ..valid_adult()
        }
    }

    #[test]
    fn test_valid_adult_passes() {
        assert_eq!(validate_submission(&valid_adult()), Ok(()));
    }

    #[test]
    fn test_valid_minor_passes_without_complement() {
        assert_eq!(validate_submission(&valid_minor()), Ok(()));
    }

    #[test]
    fn test_adult_ignores_hidden_required_fields() {
        let data = valid_adult();
        assert!(data.father_name.is_empty());
        assert_eq!(validate_submission(&data), Ok(()));
    }

    #[test]
    fn test_missing_field_reported_in_tab_order() {
        let data = FormData {
            full_name: String::new(),
            email: String::new(),
            ..valid_adult()
        };
        assert_eq!(
            validate_submission(&data),
            Err(SubmissionError::MissingField(FieldId::FullName))
        );
    }

    #[test]
    fn test_minor_requires_guardian_fields() {
        let data = FormData {
            mother_name: String::new(),
            ..valid_minor()
        };
        assert_eq!(
            validate_submission(&data),
            Err(SubmissionError::MissingField(FieldId::MotherName))
        );
    }

    #[test]
    fn test_whitespace_satisfies_required_check() {
        let data = FormData {
            mother_name: "  ".to_string(),
            ..valid_minor()
        };
        assert_eq!(validate_submission(&data), Ok(()));
    }

    #[test]
    fn test_incomplete_birth_date_blocks() {
        for date_of_birth in ["abc", "2012-03", "04/03/12"] {
            let data = FormData {
                date_of_birth: date_of_birth.to_string(),
                ..valid_adult()
            };
            assert_eq!(
                validate_submission(&data),
                Err(SubmissionError::InvalidBirthDate),
                "{date_of_birth}"
            );
        }
    }

    #[test]
    fn test_empty_birth_date_is_missing_not_invalid() {
        let data = FormData {
            date_of_birth: String::new(),
            ..valid_adult()
        };
        assert_eq!(
            validate_submission(&data),
            Err(SubmissionError::MissingField(FieldId::DateOfBirth))
        );
    }

    #[test]
    fn test_password_mismatch_blocks() {
        let data = FormData {
            confirm_password: "outra".to_string(),
            ..valid_adult()
        };
        assert_eq!(
            validate_submission(&data),
            Err(SubmissionError::PasswordMismatch)
        );
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        let data = FormData {
            email: "invalido".to_string(),
            cpf: "111.111.111-11".to_string(),
            confirm_password: "outra".to_string(),
            ..valid_adult()
        };
        assert_eq!(validate_submission(&data), Err(SubmissionError::InvalidEmail));

        let data = FormData {
            cpf: "111.111.111-11".to_string(),
            landline: "(11) 3456".to_string(),
            ..valid_adult()
        };
        assert_eq!(validate_submission(&data), Err(SubmissionError::InvalidCpf));

        let data = FormData {
            landline: "(11) 3456".to_string(),
            cell_phone: "(11) 9876".to_string(),
            ..valid_adult()
        };
        assert_eq!(
            validate_submission(&data),
            Err(SubmissionError::InvalidLandline)
        );

        let data = FormData {
            cell_phone: "(11) 9876".to_string(),
            ..valid_adult()
        };
        assert_eq!(
            validate_submission(&data),
            Err(SubmissionError::InvalidCellPhone)
        );
    }

    #[test]
    fn test_minor_cep_checked_last() {
        let data = FormData {
            zip_code: "01310-93".to_string(),
            ..valid_minor()
        };
        assert_eq!(validate_submission(&data), Err(SubmissionError::InvalidCep));
    }

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            SubmissionError::MissingField(FieldId::Cpf).to_string(),
            "Preencha o campo: CPF"
        );
        assert_eq!(SubmissionError::InvalidEmail.to_string(), "E-mail inválido!");
        assert_eq!(
            SubmissionError::PasswordMismatch.to_string(),
            "Senhas não coincidem!"
        );
    }
}
