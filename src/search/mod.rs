//! Search orchestration module
//!
//! Runs a query across the providers of one engine and assembles the
//! priority-ordered result groups.

mod models;
mod service;

pub use models::SearchGroups;
pub use service::SearchService;
