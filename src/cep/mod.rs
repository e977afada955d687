//! CEP lookup module for address auto-fill via ViaCEP

mod client;
mod outcome;
mod traits;

pub use client::{ViaCepClient, DEFAULT_BASE_URL};
pub use outcome::{resolve, CepOutcome};
pub use traits::CepLookup;

#[cfg(test)]
pub use client::{CepError, CepResponse};
#[cfg(test)]
pub use outcome::CepAddress;
#[cfg(test)]
pub use traits::MockCepLookup;
