//! Interpretation of a CEP lookup for the form

use super::traits::CepLookup;

/// Address fields filled in from a found CEP
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CepAddress {
    pub street: String,
    pub city: String,
    pub state: String,
}

/// Result of one lookup as the form sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CepOutcome {
    Found(CepAddress),
    NotFound,
    /// Network or parse failure, with the underlying error text
    Failed(String),
}

/// Run a lookup and fold the response into a `CepOutcome`.
///
/// Never fails: transport and parse errors become `CepOutcome::Failed`.
pub async fn resolve(lookup: &dyn CepLookup, cep: &str) -> CepOutcome {
    match lookup.lookup(cep).await {
        Ok(response) if response.is_not_found() => {
            tracing::info!(cep, "CEP not found");
            CepOutcome::NotFound
        }
        Ok(response) => CepOutcome::Found(CepAddress {
            street: response.logradouro.unwrap_or_default(),
            city: response.localidade.unwrap_or_default(),
            state: response.uf.unwrap_or_default(),
        }),
        Err(e) => {
            tracing::warn!(cep, error = %e, "CEP lookup failed");
            CepOutcome::Failed(e.to_string())
        }
    }
}
