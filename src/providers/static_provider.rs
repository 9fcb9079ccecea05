//! Provider over a fixed list of entries, typically declared in settings

use super::traits::{from_results, ResultStream, SearchProvider, DEFAULT_PRIORITY};
use crate::results::SearchResult;

/// Provider returning the configured entries whose title or subtitle
/// contains the query, ignoring case
pub struct StaticProvider {
    category: String,
    priority: u8,
    entries: Vec<SearchResult>,
}

impl StaticProvider {
    pub fn new(category: impl Into<String>, entries: Vec<SearchResult>) -> Self {
        Self {
            category: category.into(),
            priority: DEFAULT_PRIORITY,
            entries,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Number of configured entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn matches(entry: &SearchResult, needle: &str) -> bool {
        entry.title.to_lowercase().contains(needle)
            || entry.subtitle.to_lowercase().contains(needle)
    }
}

impl SearchProvider for StaticProvider {
    fn search<'a>(&'a self, query: &'a str) -> ResultStream<'a> {
        let needle = query.trim().to_lowercase();
        let matched: Vec<SearchResult> = self
            .entries
            .iter()
            .filter(|entry| Self::matches(entry, &needle))
            .cloned()
            .collect();

        from_results(matched)
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    fn pages() -> StaticProvider {
        StaticProvider::new(
            "Pages",
            vec![
                SearchResult::new("Homepage", "Main page", "/", "home"),
                SearchResult::new("Pricing", "Plans and billing", "/pricing", "tag"),
                SearchResult::new("Contact", "Reach the home team", "/contact", "mail"),
            ],
        )
        .with_priority(10)
    }

    async fn titles(provider: &StaticProvider, query: &str) -> Vec<String> {
        let results: Vec<SearchResult> = provider.search(query).try_collect().await.unwrap();
        results.into_iter().map(|r| r.title).collect()
    }

    #[tokio::test]
    async fn test_matches_title_and_subtitle_case_insensitive() {
        let provider = pages();
        assert_eq!(titles(&provider, "HOME").await, vec!["Homepage", "Contact"]);
    }

    #[tokio::test]
    async fn test_no_match() {
        let provider = pages();
        assert!(titles(&provider, "unknown").await.is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed() {
        let provider = pages();
        assert_eq!(titles(&provider, "  billing ").await, vec!["Pricing"]);
    }

    #[test]
    fn test_metadata() {
        let provider = pages();
        assert_eq!(provider.category(), "Pages");
        assert_eq!(provider.priority(), 10);
        assert_eq!(provider.len(), 3);
        assert_eq!(StaticProvider::new("Empty", vec![]).priority(), DEFAULT_PRIORITY);
    }
}
