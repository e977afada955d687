//! Form controller as a pure transition function
//!
//! `reduce` takes the current model and one event and returns the next model
//! plus at most one `Command` for the application shell to carry out. No I/O
//! happens here, so every transition is testable without a terminal.

use super::field::FieldId;
use super::form_data::{FormData, FormModel};
use super::submit::{validate_submission, SubmissionError};
use crate::cep::CepOutcome;
use crate::validation::{digits_only, is_minor};

pub const CEP_INVALID: &str = "CEP inválido!";
pub const CEP_NOT_FOUND: &str = "CEP não encontrado!";
pub const CEP_LOOKUP_FAILED: &str = "Erro ao buscar o CEP.";

/// Something that happened to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// New raw value for a field, before masking
    FieldChanged { field: FieldId, value: String },
    /// Focus left a field
    FieldBlurred(FieldId),
    /// A lookup issued with `token` completed
    CepLookupFinished { token: u64, outcome: CepOutcome },
    Submit,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query the CEP service and report back with the same token
    LookupCep { token: u64, cep: String },
    /// Block the submission with this alert
    Reject(SubmissionError),
    /// Submission passed every check
    Accept(FormData),
}

/// Apply one event to the model.
///
/// `current_year` feeds the minor derivation when the date of birth changes.
pub fn reduce(
    mut model: FormModel,
    event: FormEvent,
    current_year: i32,
) -> (FormModel, Option<Command>) {
    match event {
        FormEvent::FieldChanged { field, value } => {
            let value = field.apply_mask(&value);
            if field == FieldId::DateOfBirth {
                model.data.is_minor = is_minor(&value, current_year);
            }
            model.data.set(field, value);
            (model, None)
        }

        FormEvent::FieldBlurred(FieldId::ZipCode) if model.data.is_minor => {
            let cep = digits_only(&model.data.zip_code);
            if cep.len() != 8 {
                model.cep.error = Some(CEP_INVALID.to_string());
                return (model, None);
            }

            model.cep.loading = true;
            model.cep.error = None;
            model.cep.latest_token += 1;
            let token = model.cep.latest_token;
            tracing::debug!(token, %cep, "issuing CEP lookup");
            (model, Some(Command::LookupCep { token, cep }))
        }

        FormEvent::FieldBlurred(_) => (model, None),

        FormEvent::CepLookupFinished { token, outcome } => {
            if token != model.cep.latest_token {
                tracing::debug!(
                    token,
                    latest = model.cep.latest_token,
                    "discarding stale CEP response"
                );
                return (model, None);
            }

            model.cep.loading = false;
            match outcome {
                CepOutcome::Found(address) => {
                    model.data.address = address.street;
                    model.data.city = address.city;
                    model.data.state = address.state;
                }
                CepOutcome::NotFound => {
                    model.cep.error = Some(CEP_NOT_FOUND.to_string());
                }
                CepOutcome::Failed(_) => {
                    model.cep.error = Some(CEP_LOOKUP_FAILED.to_string());
                }
            }
            (model, None)
        }

        FormEvent::Submit => {
            let command = match validate_submission(&model.data) {
                Ok(()) => Command::Accept(model.data.clone()),
                Err(err) => Command::Reject(err),
            };
            (model, Some(command))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cep::CepAddress;
    use pretty_assertions::assert_eq;

    const YEAR: i32 = 2026;

    fn change(model: FormModel, field: FieldId, value: &str) -> FormModel {
        let (model, command) = reduce(
            model,
            FormEvent::FieldChanged {
                field,
                value: value.to_string(),
            },
            YEAR,
        );
        assert_eq!(command, None);
        model
    }

    fn minor_model() -> FormModel {
        change(FormModel::default(), FieldId::DateOfBirth, "2012-03-04")
    }

    fn paulista() -> CepOutcome {
        CepOutcome::Found(CepAddress {
            street: "Avenida Paulista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
        })
    }

    fn filled(model: FormModel, values: &[(FieldId, &str)]) -> FormModel {
        values
            .iter()
            .fold(model, |model, (field, value)| change(model, *field, value))
    }

    fn valid_adult() -> FormModel {
        filled(
            FormModel::default(),
            &[
                (FieldId::FullName, "Ana Souza"),
                (FieldId::DateOfBirth, "1998-04-12"),
                (FieldId::Cpf, "52998224725"),
                (FieldId::Landline, "1134567890"),
                (FieldId::CellPhone, "11987654321"),
                (FieldId::Email, "ana@faculdade.edu.br"),
                (FieldId::Password, "segredo123"),
                (FieldId::ConfirmPassword, "segredo123"),
            ],
        )
    }

    mod field_changes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_masks_applied_on_change() {
            let model = filled(
                FormModel::default(),
                &[
                    (FieldId::Cpf, "52998224725"),
                    (FieldId::Landline, "1134567890"),
                    (FieldId::CellPhone, "11987654321"),
                    (FieldId::ZipCode, "01310930"),
                ],
            );
            assert_eq!(model.data.cpf, "529.982.247-25");
            assert_eq!(model.data.landline, "(11) 3456-7890");
            assert_eq!(model.data.cell_phone, "(11) 98765-4321");
            assert_eq!(model.data.zip_code, "01310-930");
        }

        #[test]
        fn test_minor_date_reveals_section() {
            let model = minor_model();
            assert!(model.data.is_minor);
            assert!(model.data.visible_fields().contains(&FieldId::FatherName));
        }

        #[test]
        fn test_adult_date_hides_section() {
            let model = change(minor_model(), FieldId::DateOfBirth, "1990-01-01");
            assert!(!model.data.is_minor);
            assert!(!model.data.visible_fields().contains(&FieldId::FatherName));
        }

        #[test]
        fn test_incomplete_date_is_not_minor() {
            let model = change(minor_model(), FieldId::DateOfBirth, "2012-03");
            assert!(!model.data.is_minor);
        }

        #[test]
        fn test_other_fields_leave_minor_flag_alone() {
            let model = change(minor_model(), FieldId::FullName, "Ana");
            assert!(model.data.is_minor);
        }

        #[test]
        fn test_hidden_values_survive_toggle() {
            let model = change(minor_model(), FieldId::FatherName, "Carlos");
            let model = change(model, FieldId::DateOfBirth, "1990-01-01");
            let model = change(model, FieldId::DateOfBirth, "2012-01-01");
            assert_eq!(model.data.father_name, "Carlos");
        }
    }

    mod cep_lookup {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blur_with_short_cep_sets_error() {
            let model = change(minor_model(), FieldId::ZipCode, "01310");
            let (model, command) =
                reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            assert_eq!(command, None);
            assert_eq!(model.cep.error.as_deref(), Some(CEP_INVALID));
            assert!(!model.cep.loading);
        }

        #[test]
        fn test_blur_with_valid_cep_issues_lookup() {
            let mut model = change(minor_model(), FieldId::ZipCode, "01310930");
            model.cep.error = Some(CEP_INVALID.to_string());

            let (model, command) =
                reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            assert_eq!(
                command,
                Some(Command::LookupCep {
                    token: 1,
                    cep: "01310930".to_string()
                })
            );
            assert!(model.cep.loading);
            assert_eq!(model.cep.error, None);
        }

        #[test]
        fn test_blur_ignored_when_adult() {
            let model = change(FormModel::default(), FieldId::ZipCode, "01310930");
            let before = model.clone();
            let (model, command) =
                reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            assert_eq!(command, None);
            assert_eq!(model, before);
        }

        #[test]
        fn test_blur_on_other_field_does_nothing() {
            let model = minor_model();
            let before = model.clone();
            let (model, command) = reduce(model, FormEvent::FieldBlurred(FieldId::Cpf), YEAR);
            assert_eq!(command, None);
            assert_eq!(model, before);
        }

        #[test]
        fn test_found_fills_address() {
            let model = change(minor_model(), FieldId::ZipCode, "01310930");
            let (model, _) = reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            let (model, command) = reduce(
                model,
                FormEvent::CepLookupFinished {
                    token: 1,
                    outcome: paulista(),
                },
                YEAR,
            );
            assert_eq!(command, None);
            assert!(!model.cep.loading);
            assert_eq!(model.cep.error, None);
            assert_eq!(model.data.address, "Avenida Paulista");
            assert_eq!(model.data.city, "São Paulo");
            assert_eq!(model.data.state, "SP");
        }

        #[test]
        fn test_not_found_keeps_address() {
            let model = filled(
                minor_model(),
                &[
                    (FieldId::Address, "Rua Antiga"),
                    (FieldId::City, "Santos"),
                    (FieldId::ZipCode, "99999999"),
                ],
            );
            let (model, _) = reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            let (model, _) = reduce(
                model,
                FormEvent::CepLookupFinished {
                    token: 1,
                    outcome: CepOutcome::NotFound,
                },
                YEAR,
            );
            assert!(!model.cep.loading);
            assert_eq!(model.cep.error.as_deref(), Some(CEP_NOT_FOUND));
            assert_eq!(model.data.address, "Rua Antiga");
            assert_eq!(model.data.city, "Santos");
            assert_eq!(model.data.state, "");
        }

        #[test]
        fn test_failure_sets_generic_error() {
            let model = change(minor_model(), FieldId::ZipCode, "01310930");
            let (model, _) = reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            let (model, _) = reduce(
                model,
                FormEvent::CepLookupFinished {
                    token: 1,
                    outcome: CepOutcome::Failed("connection refused".to_string()),
                },
                YEAR,
            );
            assert!(!model.cep.loading);
            assert_eq!(model.cep.error.as_deref(), Some(CEP_LOOKUP_FAILED));
        }

        #[test]
        fn test_stale_response_discarded() {
            let model = change(minor_model(), FieldId::ZipCode, "01310930");
            let (model, _) = reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            let model = change(model, FieldId::ZipCode, "70040010");
            let (model, command) =
                reduce(model, FormEvent::FieldBlurred(FieldId::ZipCode), YEAR);
            assert!(matches!(command, Some(Command::LookupCep { token: 2, .. })));

            // First request resolves late
            let before = model.clone();
            let (model, command) = reduce(
                model,
                FormEvent::CepLookupFinished {
                    token: 1,
                    outcome: paulista(),
                },
                YEAR,
            );
            assert_eq!(command, None);
            assert_eq!(model, before);
            assert!(model.cep.loading);

            let (model, _) = reduce(
                model,
                FormEvent::CepLookupFinished {
                    token: 2,
                    outcome: CepOutcome::NotFound,
                },
                YEAR,
            );
            assert!(!model.cep.loading);
            assert_eq!(model.data.address, "");
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_is_accepted() {
            let model = valid_adult();
            let (model, command) = reduce(model, FormEvent::Submit, YEAR);
            assert_eq!(command, Some(Command::Accept(model.data.clone())));
        }

        #[test]
        fn test_mismatched_passwords_rejected() {
            let model = change(valid_adult(), FieldId::ConfirmPassword, "outra");
            let (_, command) = reduce(model, FormEvent::Submit, YEAR);
            assert_eq!(
                command,
                Some(Command::Reject(SubmissionError::PasswordMismatch))
            );
        }

        #[test]
        fn test_minor_needs_guardians() {
            let model = change(valid_adult(), FieldId::DateOfBirth, "2012-04-12");
            let (_, command) = reduce(model, FormEvent::Submit, YEAR);
            assert_eq!(
                command,
                Some(Command::Reject(SubmissionError::MissingField(
                    FieldId::FatherName
                )))
            );
        }

        #[test]
        fn test_becoming_adult_drops_guardian_requirement() {
            let model = change(valid_adult(), FieldId::DateOfBirth, "2012-04-12");
            let model = change(model, FieldId::DateOfBirth, "1998-04-12");
            let (_, command) = reduce(model, FormEvent::Submit, YEAR);
            assert!(matches!(command, Some(Command::Accept(_))));
        }

        #[test]
        fn test_submit_does_not_change_model() {
            let model = valid_adult();
            let before = model.clone();
            let (model, _) = reduce(model, FormEvent::Submit, YEAR);
            assert_eq!(model, before);
        }
    }
}
