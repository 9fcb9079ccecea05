//! Events passed through search hooks

use crate::results::SearchResultGroup;

/// Dispatched before providers are consulted; the query may be rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreSearchEvent {
    query: String,
    engine: String,
}

impl PreSearchEvent {
    pub fn new(query: impl Into<String>, engine: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            engine: engine.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query. A blank query cancels the search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Name of the engine running the search
    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn into_query(self) -> String {
        self.query
    }
}

/// Dispatched after groups are assembled; the group list may be replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSearchEvent {
    query: String,
    results: Vec<SearchResultGroup>,
    engine: String,
}

impl PostSearchEvent {
    pub fn new(
        query: impl Into<String>,
        results: Vec<SearchResultGroup>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            results,
            engine: engine.into(),
        }
    }

    /// Query the providers received
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResultGroup] {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut Vec<SearchResultGroup> {
        &mut self.results
    }

    pub fn set_results(&mut self, results: Vec<SearchResultGroup>) {
        self.results = results;
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn into_results(self) -> Vec<SearchResultGroup> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SearchResult;

    #[test]
    fn test_pre_search_event_rewrites_query() {
        let mut event = PreSearchEvent::new("usr", "admin");
        event.set_query("user");

        assert_eq!(event.query(), "user");
        assert_eq!(event.engine(), "admin");
        assert_eq!(event.into_query(), "user");
    }

    #[test]
    fn test_post_search_event_results() {
        let group = SearchResultGroup::new(
            "Pages",
            vec![SearchResult::new("Home", "", "/", "home")],
            10,
        )
        .unwrap();
        let mut event = PostSearchEvent::new("home", vec![group.clone()], "default");

        assert_eq!(event.query(), "home");
        assert_eq!(event.engine(), "default");
        assert_eq!(event.results(), &[group.clone()]);

        event.results_mut().push(group.clone());
        assert_eq!(event.results().len(), 2);

        event.set_results(vec![]);
        assert!(event.into_results().is_empty());
    }
}
