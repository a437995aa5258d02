//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod submit_form;

pub use submit_form::SubmitForm;
