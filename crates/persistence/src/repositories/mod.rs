//! Repository implementations for database operations.

pub mod amazon;

pub use amazon::AmazonRepository;
