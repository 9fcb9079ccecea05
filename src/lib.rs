//! Global Search: multi-provider search aggregation
//!
//! Queries are fanned out to the providers of a named engine, merged into
//! priority-ordered groups and optionally rewritten by pre/post search hooks.

pub mod config;
pub mod engines;
pub mod error;
pub mod hooks;
pub mod providers;
pub mod results;
pub mod search;

pub use config::Settings;
pub use engines::{EngineLoader, RegistryBuilder, SearchEngineRegistry};
pub use error::SearchError;
pub use hooks::{HookDispatcher, PostSearchEvent, PreSearchEvent, SearchHook};
pub use providers::{SearchProvider, DEFAULT_PRIORITY};
pub use results::{SearchResult, SearchResultGroup};
pub use search::{SearchGroups, SearchService};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
