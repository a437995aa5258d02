//! Application services used by the route handlers.

pub mod templates;
pub mod uploads;

pub use templates::{TemplateError, TemplateRenderer};
pub use uploads::{UploadStore, UploadedFile};
