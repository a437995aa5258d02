//! HTTP route handlers.

pub mod health;
pub mod media;
pub mod pages;
pub mod redirect;
pub mod submit;
