//! Field catalog for the enrollment form

use crate::validation::{
    digits_only, format_cell_phone, format_cep, format_cpf, format_landline,
};

/// Form sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    /// Only shown while the student is a minor
    Minor,
    Account,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Informações Pessoais",
            Self::Minor => "Informações Adicionais (Para Menores de 18)",
            Self::Account => "Informações da Conta",
        }
    }

    /// Fields belonging to this section, in tab order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Self::Personal => &[
                FieldId::FullName,
                FieldId::DateOfBirth,
                FieldId::Cpf,
                FieldId::Landline,
                FieldId::CellPhone,
            ],
            Self::Minor => &[
                FieldId::FatherName,
                FieldId::MotherName,
                FieldId::ZipCode,
                FieldId::Address,
                FieldId::Number,
                FieldId::Complement,
                FieldId::City,
                FieldId::State,
            ],
            Self::Account => &[FieldId::Email, FieldId::Password, FieldId::ConfirmPassword],
        }
    }
}

/// Sections shown for the current minor flag
pub fn visible_sections(is_minor: bool) -> Vec<Section> {
    if is_minor {
        vec![Section::Personal, Section::Minor, Section::Account]
    } else {
        vec![Section::Personal, Section::Account]
    }
}

/// Editable fields in tab order for the current minor flag
pub fn visible_fields(is_minor: bool) -> Vec<FieldId> {
    visible_sections(is_minor)
        .iter()
        .flat_map(|section| section.fields().iter().copied())
        .collect()
}

/// Identifies one text field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    DateOfBirth,
    Cpf,
    Landline,
    CellPhone,
    FatherName,
    MotherName,
    ZipCode,
    Address,
    Number,
    Complement,
    City,
    State,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Nome Completo",
            Self::DateOfBirth => "Data de Nascimento",
            Self::Cpf => "CPF",
            Self::Landline => "Telefone Fixo",
            Self::CellPhone => "Número de Celular",
            Self::FatherName => "Nome do Pai",
            Self::MotherName => "Nome da Mãe",
            Self::ZipCode => "CEP",
            Self::Address => "Endereço",
            Self::Number => "Número",
            Self::Complement => "Complemento",
            Self::City => "Cidade",
            Self::State => "Estado",
            Self::Email => "E-mail",
            Self::Password => "Senha",
            Self::ConfirmPassword => "Confirmação de Senha",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::DateOfBirth => Some("AAAA-MM-DD ou DD/MM/AAAA"),
            Self::Cpf => Some("999.999.999-99"),
            Self::Landline => Some("(99) 9999-9999"),
            Self::CellPhone => Some("(99) 99999-9999"),
            Self::ZipCode => Some("99999-999"),
            _ => None,
        }
    }

    /// Complement is the only optional field
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Complement)
    }

    /// Rendered as bullets
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Whether the field value is digits plus mask separators
    pub fn is_masked(&self) -> bool {
        matches!(
            self,
            Self::Cpf | Self::Landline | Self::CellPhone | Self::ZipCode
        )
    }

    /// Apply the field's input mask; unmasked fields pass through
    pub fn apply_mask(&self, raw: &str) -> String {
        match self {
            Self::ZipCode => format_cep(raw),
            Self::Cpf => format_cpf(raw),
            Self::Landline => format_landline(raw),
            Self::CellPhone => format_cell_phone(raw),
            _ => raw.to_string(),
        }
    }

    /// Raw value after typing `c` at the end of `current`.
    ///
    /// Masked fields only take digits; anything else leaves the value as is.
    pub fn with_char(&self, current: &str, c: char) -> String {
        let mut value = current.to_string();
        if !self.is_masked() || c.is_ascii_digit() {
            value.push(c);
        }
        value
    }

    /// Raw value after a backspace.
    ///
    /// Masked fields drop their last digit instead of their last character,
    /// otherwise deleting a separator would be undone by the mask.
    pub fn without_last(&self, current: &str) -> String {
        let mut value = if self.is_masked() {
            digits_only(current)
        } else {
            current.to_string()
        };
        value.pop();
        value
    }
}
