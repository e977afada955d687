//! Form record and lookup state

use super::field::{visible_fields, FieldId};
use serde::Serialize;

/// Everything the student typed, plus the derived minor flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub full_name: String,
    pub date_of_birth: String,
    pub cpf: String,
    pub landline: String,
    pub cell_phone: String,
    /// Derived from `date_of_birth`, never edited directly
    pub is_minor: bool,
    pub father_name: String,
    pub mother_name: String,
    pub zip_code: String,
    pub address: String,
    pub number: String,
    pub complement: String,
    pub city: String,
    pub state: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormData {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::DateOfBirth => &self.date_of_birth,
            FieldId::Cpf => &self.cpf,
            FieldId::Landline => &self.landline,
            FieldId::CellPhone => &self.cell_phone,
            FieldId::FatherName => &self.father_name,
            FieldId::MotherName => &self.mother_name,
            FieldId::ZipCode => &self.zip_code,
            FieldId::Address => &self.address,
            FieldId::Number => &self.number,
            FieldId::Complement => &self.complement,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    fn value_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::DateOfBirth => &mut self.date_of_birth,
            FieldId::Cpf => &mut self.cpf,
            FieldId::Landline => &mut self.landline,
            FieldId::CellPhone => &mut self.cell_phone,
            FieldId::FatherName => &mut self.father_name,
            FieldId::MotherName => &mut self.mother_name,
            FieldId::ZipCode => &mut self.zip_code,
            FieldId::Address => &mut self.address,
            FieldId::Number => &mut self.number,
            FieldId::Complement => &mut self.complement,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Store a value as-is. Masking and minor derivation happen in the reducer.
    pub fn set(&mut self, field: FieldId, value: String) {
        *self.value_mut(field) = value;
    }

    /// Fields currently on screen
    pub fn visible_fields(&self) -> Vec<FieldId> {
        visible_fields(self.is_minor)
    }
}

/// Address auto-fill progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CepLookupState {
    pub loading: bool,
    pub error: Option<String>,
    /// Token of the most recent lookup; older responses are discarded
    pub latest_token: u64,
}

/// State threaded through the reducer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    pub data: FormData,
    pub cep: CepLookupState,
}
