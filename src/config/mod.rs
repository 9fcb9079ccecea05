//! Configuration module
//!
//! Loads engine and provider settings from YAML files and environment variables.

mod settings;

pub use settings::*;
