//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single search result produced by a provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Primary label
    pub title: String,
    /// Secondary line shown under the title
    pub subtitle: String,
    /// Target of the result
    pub url: String,
    /// Icon identifier
    pub icon: String,
    /// Optional short tag (e.g. "New", "Admin")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl SearchResult {
    /// Create a result without a badge
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            url: url.into(),
            icon: icon.into(),
            badge: None,
        }
    }

    /// Attach a badge
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Results of one provider for one search, tagged with its category and priority.
///
/// A group always holds at least one result and a non-empty category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultGroup {
    category: String,
    results: Vec<SearchResult>,
    priority: u8,
}

impl SearchResultGroup {
    /// Build a group, or `None` if `category` or `results` is empty
    pub fn new(category: impl Into<String>, results: Vec<SearchResult>, priority: u8) -> Option<Self> {
        let category = category.into();
        if category.is_empty() || results.is_empty() {
            return None;
        }

        Some(Self {
            category,
            results,
            priority,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Number of results in the group (never zero)
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Always false; pairs with `len`
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}
