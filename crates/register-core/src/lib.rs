//! # register-core
//!
//! Core types, traits, and defaults for the OpenRegister settings service.
//!
//! This crate provides the configuration models for every settings domain,
//! the error taxonomy, the hard default constants, and the trait seams that
//! the storage and service crates implement.

pub mod coerce;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use coerce::{coerce_bool, coerce_i64, LooseBool, LooseInt};
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
