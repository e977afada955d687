//! Trait abstraction for the CEP service to enable mocking in tests

use super::client::{CepError, CepResponse};
use async_trait::async_trait;

/// Postal-code lookup service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CepLookup: Send + Sync {
    /// Fetch the address registered for an 8-digit CEP.
    ///
    /// A "not found" answer is a successful response with `erro` set.
    async fn lookup(&self, cep: &str) -> Result<CepResponse, CepError>;
}
