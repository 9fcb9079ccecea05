//! Search lifecycle hooks
//!
//! Hooks observe a search at two points:
//! - pre_search: before providers run, may rewrite or cancel the query
//! - post_search: after groups are assembled, may reorder, filter or replace them

mod dispatcher;
mod events;
mod traits;

pub use dispatcher::HookDispatcher;
pub use events::{PostSearchEvent, PreSearchEvent};
pub use traits::SearchHook;
