//! Provider trait and stream helpers

use crate::results::SearchResult;
use futures::stream::{self, BoxStream, StreamExt};

/// Priority used by providers that do not declare one
pub const DEFAULT_PRIORITY: u8 = 50;

/// Highest priority value a provider may declare
pub const MAX_PRIORITY: u8 = 100;

/// Lazy, finite, single-pass sequence of results from one provider.
///
/// An `Err` item aborts the whole search it belongs to.
pub type ResultStream<'a> = BoxStream<'a, anyhow::Result<SearchResult>>;

/// A source of results for one category
pub trait SearchProvider: Send + Sync {
    /// Produce the results matching `query`
    fn search<'a>(&'a self, query: &'a str) -> ResultStream<'a>;

    /// Category label of the group this provider contributes
    fn category(&self) -> &str;

    /// Sort key among providers, lower appears first (0-100)
    fn priority(&self) -> u8 {
        DEFAULT_PRIORITY
    }
}

/// Wrap already computed results as a provider stream
pub fn from_results<'a, I>(results: I) -> ResultStream<'a>
where
    I: IntoIterator<Item = SearchResult>,
    I::IntoIter: Send + 'a,
{
    stream::iter(results.into_iter().map(Ok)).boxed()
}

/// A stream that fails immediately with `error`
pub fn failed<'a>(error: anyhow::Error) -> ResultStream<'a> {
    stream::once(async move { Err::<SearchResult, _>(error) }).boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    struct Docs;

    impl SearchProvider for Docs {
        fn search<'a>(&'a self, query: &'a str) -> ResultStream<'a> {
            from_results(vec![SearchResult::new(query, "Docs", "/docs", "book")])
        }

        fn category(&self) -> &str {
            "Documentation"
        }
    }

    #[tokio::test]
    async fn test_default_priority() {
        let provider = Docs;
        assert_eq!(provider.priority(), DEFAULT_PRIORITY);
        assert_eq!(provider.category(), "Documentation");

        let results: Vec<_> = provider.search("install").try_collect().await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "install");
    }

    #[tokio::test]
    async fn test_failed_stream() {
        let outcome: anyhow::Result<Vec<SearchResult>> =
            failed(anyhow::anyhow!("backend down")).try_collect().await;
        assert_eq!(outcome.unwrap_err().to_string(), "backend down");
    }
}
