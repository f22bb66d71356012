//! HTTP request handlers.

pub mod dashboard;
pub mod directory;
pub mod settings;
