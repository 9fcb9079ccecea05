//! Ordered dispatch of search events to registered hooks

use super::events::{PostSearchEvent, PreSearchEvent};
use super::traits::SearchHook;
use std::sync::Arc;
use tracing::debug;

/// Hooks invoked in registration order
#[derive(Default)]
pub struct HookDispatcher {
    hooks: Vec<Arc<dyn SearchHook>>,
}

impl HookDispatcher {
    /// Create a dispatcher without hooks
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook after the existing ones
    pub fn register(&mut self, hook: Arc<dyn SearchHook>) {
        debug!("Registered search hook: {}", hook.id());
        self.hooks.push(hook);
    }

    /// Builder-style `register`
    pub fn with_hook(mut self, hook: Arc<dyn SearchHook>) -> Self {
        self.register(hook);
        self
    }

    /// Run every pre_search hook, each on the previous hook's output
    pub fn dispatch_pre(&self, event: PreSearchEvent) -> PreSearchEvent {
        self.hooks
            .iter()
            .fold(event, |event, hook| hook.pre_search(event))
    }

    /// Run every post_search hook, each on the previous hook's output
    pub fn dispatch_post(&self, event: PostSearchEvent) -> PostSearchEvent {
        self.hooks
            .iter()
            .fold(event, |event, hook| hook.post_search(event))
    }

    /// IDs of registered hooks, in order
    pub fn ids(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
