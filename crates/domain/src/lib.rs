//! Domain layer for the Amazon Preview backend.
//!
//! This crate contains:
//! - Domain models (Amazon page, bulletpoints, designs)
//! - The submit command and its validation rules

pub mod models;
