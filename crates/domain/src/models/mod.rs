//! Domain models for Amazon Preview.

pub mod amazon;
pub mod design;
pub mod submit;

pub use amazon::{Amazon, AmazonSummary};
pub use design::Design;
pub use submit::{SubmitError, SubmitPage};
