//! Search execution for one engine

use super::models::SearchGroups;
use crate::error::Result;
use crate::hooks::{HookDispatcher, PostSearchEvent, PreSearchEvent};
use crate::providers::SearchProvider;
use crate::results::{SearchResult, SearchResultGroup};
use futures::TryStreamExt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Aggregates the providers of one engine into priority-ordered groups
pub struct SearchService {
    /// Engine this service runs for
    engine_name: String,
    /// Providers sorted by ascending priority, ties in registration order
    providers: Vec<Arc<dyn SearchProvider>>,
    /// Pre/post search hooks, if any
    hooks: Option<Arc<HookDispatcher>>,
}

impl SearchService {
    /// Create a service over `providers`, sorting them once by priority
    pub fn new<I>(engine_name: impl Into<String>, providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn SearchProvider>>,
    {
        let mut providers: Vec<_> = providers.into_iter().collect();
        // sort_by_key is stable: equal priorities keep registration order
        providers.sort_by_key(|p| p.priority());

        Self {
            engine_name: engine_name.into(),
            providers,
            hooks: None,
        }
    }

    /// Attach the hooks run before and after each search
    pub fn with_hooks(mut self, hooks: Arc<HookDispatcher>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    /// Providers in the order they are consulted
    pub fn providers(&self) -> &[Arc<dyn SearchProvider>] {
        &self.providers
    }

    /// Run `query` against every provider of this engine.
    ///
    /// Blank queries (before or after the pre_search hooks) yield no groups
    /// and consult no provider. With `max_results`, at most that many
    /// results are returned across all groups; once the budget is spent the
    /// remaining providers are not consulted. A provider error aborts the
    /// search and is returned unchanged.
    pub async fn search(&self, query: &str, max_results: Option<usize>) -> Result<SearchGroups> {
        if query.trim().is_empty() {
            debug!("Blank query on engine {}, skipping search", self.engine_name);
            return Ok(SearchGroups::empty());
        }

        let query = match &self.hooks {
            Some(hooks) => {
                let event = hooks.dispatch_pre(PreSearchEvent::new(query, &self.engine_name));
                let query = event.into_query();
                if query.trim().is_empty() {
                    debug!("Query cancelled by pre_search hook on engine {}", self.engine_name);
                    return Ok(SearchGroups::empty());
                }
                query
            }
            None => query.to_string(),
        };

        let mut groups = Vec::new();
        let mut total = 0usize;

        for provider in &self.providers {
            let remaining = match max_results {
                Some(max) => match max.saturating_sub(total) {
                    0 => {
                        debug!(
                            "Result budget of {} reached on engine {}, skipping remaining providers",
                            max, self.engine_name
                        );
                        break;
                    }
                    remaining => Some(remaining),
                },
                None => None,
            };

            let mut results: Vec<SearchResult> = provider.search(&query).try_collect().await?;
            let returned = results.len();
            if let Some(remaining) = remaining {
                results.truncate(remaining);
            }

            debug!(
                "Provider {} returned {} results ({} kept) on engine {}",
                provider.category(),
                returned,
                results.len(),
                self.engine_name
            );

            if results.is_empty() {
                continue;
            }

            let kept = results.len();
            match SearchResultGroup::new(provider.category(), results, provider.priority()) {
                Some(group) => {
                    total += kept;
                    groups.push(group);
                }
                None => warn!(
                    "Dropping results from provider with empty category on engine {}",
                    self.engine_name
                ),
            }
        }

        if let Some(hooks) = &self.hooks {
            let event = hooks.dispatch_post(PostSearchEvent::new(query, groups, &self.engine_name));
            groups = event.into_results();
        }

        Ok(SearchGroups::new(groups))
    }
}
