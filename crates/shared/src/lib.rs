//! Shared utilities and common types for the Amazon Preview backend.
//!
//! This crate provides functionality used across the other crates:
//! - Upload filename rules (allowed image extensions, filename sanitizing)
//! - Common validation logic

pub mod upload;
pub mod validation;
