//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod amazon;

pub use amazon::{AmazonEntity, PointKind};
