//! Application state module

mod app_state;
mod field;
mod form_data;
mod reducer;
mod submit;

pub use app_state::*;
pub use field::*;
pub use form_data::*;
pub use reducer::*;
pub use submit::*;
