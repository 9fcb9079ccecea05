//! Error types for engine lookup, registry construction and provider failures

use thiserror::Error;

/// Errors raised by the search core
#[derive(Debug, Error)]
pub enum SearchError {
    /// Requested engine name is not registered
    #[error(
        "Search engine \"{name}\" is not registered. Available engines: {}.",
        .available.join(", ")
    )]
    EngineNotFound { name: String, available: Vec<String> },

    /// Registry built with a default engine that is not one of its engines
    #[error(
        "Default search engine \"{name}\" is not registered. Available engines: {}.",
        .available.join(", ")
    )]
    DefaultEngineMissing { name: String, available: Vec<String> },

    /// Two engines declared under the same name
    #[error("Search engine \"{0}\" is registered more than once")]
    DuplicateEngine(String),

    /// Registry built without any engine
    #[error("No search engines are registered")]
    NoEngines,

    /// A provider failed while producing results
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl SearchError {
    pub(crate) fn engine_not_found(name: &str, available: &[String]) -> Self {
        Self::EngineNotFound {
            name: name.to_string(),
            available: available.to_vec(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_not_found_message() {
        let err = SearchError::engine_not_found(
            "nonexistent",
            &["main".to_string(), "admin".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "Search engine \"nonexistent\" is not registered. Available engines: main, admin."
        );
    }

    #[test]
    fn test_engine_not_found_with_no_engines() {
        let err = SearchError::engine_not_found("x", &[]);
        assert_eq!(
            err.to_string(),
            "Search engine \"x\" is not registered. Available engines: ."
        );
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: SearchError = anyhow::anyhow!("index unavailable").into();
        assert_eq!(err.to_string(), "index unavailable");
        assert!(matches!(err, SearchError::Provider(_)));
    }
}
