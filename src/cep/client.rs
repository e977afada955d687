//! HTTP client for the ViaCEP postal-code service
//!
//! `GET {base_url}/ws/{cep}/json/` answers with a JSON object holding the
//! street (`logradouro`), city (`localidade`) and state (`uf`), or with an
//! `erro` flag when the CEP does not exist.

use super::traits::CepLookup;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Default ViaCEP address
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Errors that can occur while looking up a CEP
#[derive(Error, Debug)]
pub enum CepError {
    /// The code handed to the client is not 8 digits
    #[error("CEP must have exactly 8 digits, got '{0}'")]
    InvalidCep(String),

    /// Transport failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body was not the expected JSON object
    #[error("failed to parse CEP response: {0}")]
    Parse(String),
}

/// ViaCEP response body. Only the fields the form uses are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CepResponse {
    pub logradouro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
    /// Present when the CEP is unknown. ViaCEP has sent both `true` and
    /// `"true"` over time.
    pub erro: Option<serde_json::Value>,
}

impl CepResponse {
    /// Whether the service reported the CEP as unknown
    pub fn is_not_found(&self) -> bool {
        use serde_json::Value;

        match &self.erro {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

/// Client for the ViaCEP service
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a client against `base_url` (e.g. `https://viacep.com.br`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, CepError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Lookup URL for an 8-digit CEP
    fn endpoint(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url.trim_end_matches('/'), cep)
    }
}

#[async_trait]
impl CepLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<CepResponse, CepError> {
        if cep.len() != 8 || !cep.chars().all(|c| c.is_ascii_digit()) {
            return Err(CepError::InvalidCep(cep.to_string()));
        }

        let url = self.endpoint(cep);
        tracing::debug!(%url, "requesting CEP");

        let response = self.client.get(&url).send().await?;
        response.json::<CepResponse>().await.map_err(|e| {
            if e.is_decode() {
                CepError::Parse(e.to_string())
            } else {
                CepError::Network(e)
            }
        })
    }
}
