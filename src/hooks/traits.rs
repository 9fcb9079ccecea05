//! Hook trait

use super::events::{PostSearchEvent, PreSearchEvent};

/// Observer of the search lifecycle.
///
/// Each method receives the current event and returns the event the next
/// hook (and finally the search service) continues with.
pub trait SearchHook: Send + Sync {
    /// Identifier used in logs
    fn id(&self) -> &str;

    /// Called before any provider is consulted
    fn pre_search(&self, event: PreSearchEvent) -> PreSearchEvent {
        event
    }

    /// Called once all groups are assembled
    fn post_search(&self, event: PostSearchEvent) -> PostSearchEvent {
        event
    }
}
