//! Search provider module
//!
//! Defines the SearchProvider trait implemented by result sources and a
//! static provider backed by configured entries.

mod static_provider;
mod traits;

pub use static_provider::StaticProvider;
pub use traits::*;
