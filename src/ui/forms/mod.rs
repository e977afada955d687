//! Form rendering module
//!
//! - `field_renderer`: one-line field, flag and status rendering
//! - `registration_form`: the enrollment form and its action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
