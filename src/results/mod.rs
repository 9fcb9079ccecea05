//! Result types returned by providers and search services

mod types;

pub use types::*;
