//! Builder routing providers to named engines

use super::registry::{EngineEntry, SearchEngineRegistry};
use crate::error::{Result, SearchError};
use crate::hooks::HookDispatcher;
use crate::providers::SearchProvider;
use crate::search::SearchService;
use std::sync::Arc;
use tracing::{debug, warn};

/// Declares engines and routes providers to them.
///
/// A provider added with [`provider`](Self::provider) joins every declared
/// engine; one added with [`provider_for`](Self::provider_for) joins only the
/// named engine. Providers are handed to each engine in the order they were
/// added.
#[derive(Default)]
pub struct RegistryBuilder {
    /// (name, ui) in declaration order
    engines: Vec<(String, bool)>,
    default_engine: Option<String>,
    /// (target engine, provider); `None` targets every engine
    providers: Vec<(Option<String>, Arc<dyn SearchProvider>)>,
    hooks: Option<Arc<HookDispatcher>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an engine
    pub fn engine(mut self, name: impl Into<String>, ui: bool) -> Self {
        self.engines.push((name.into(), ui));
        self
    }

    /// Choose the default engine; the first declared engine otherwise
    pub fn default_engine(mut self, name: impl Into<String>) -> Self {
        self.default_engine = Some(name.into());
        self
    }

    /// Add a provider to every engine
    pub fn provider(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.providers.push((None, provider));
        self
    }

    /// Add a provider to one engine
    pub fn provider_for(mut self, engine: impl Into<String>, provider: Arc<dyn SearchProvider>) -> Self {
        self.providers.push((Some(engine.into()), provider));
        self
    }

    /// Share hooks with every engine
    pub fn hooks(mut self, hooks: Arc<HookDispatcher>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Build one search service per engine and the registry holding them
    pub fn build(self) -> Result<SearchEngineRegistry> {
        for (target, provider) in &self.providers {
            if let Some(engine) = target {
                if !self.engines.iter().any(|(name, _)| name == engine) {
                    warn!(
                        "Ignoring provider {} for unknown engine: {}",
                        provider.category(),
                        engine
                    );
                }
            }
        }

        let default_engine = match self.default_engine {
            Some(name) => name,
            None => self
                .engines
                .first()
                .map(|(name, _)| name.clone())
                .ok_or(SearchError::NoEngines)?,
        };

        let entries = self
            .engines
            .iter()
            .map(|(name, ui)| {
                let providers: Vec<Arc<dyn SearchProvider>> = self
                    .providers
                    .iter()
                    .filter(|(target, _)| target.as_deref().map_or(true, |t| t == name))
                    .map(|(_, provider)| provider.clone())
                    .collect();

                debug!("Engine {} has {} providers", name, providers.len());

                let mut service = SearchService::new(name.clone(), providers);
                if let Some(hooks) = &self.hooks {
                    service = service.with_hooks(hooks.clone());
                }
                EngineEntry::new(Arc::new(service)).with_ui(*ui)
            })
            .collect();

        SearchEngineRegistry::new(entries, default_engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{PreSearchEvent, SearchHook};
    use crate::providers::StaticProvider;
    use crate::results::SearchResult;

    fn provider(category: &str, priority: u8) -> Arc<dyn SearchProvider> {
        Arc::new(
            StaticProvider::new(category, vec![SearchResult::new("Item", "", "/item", "icon")])
                .with_priority(priority),
        )
    }

    fn categories(registry: &SearchEngineRegistry, engine: &str) -> Vec<String> {
        registry
            .get(engine)
            .unwrap()
            .providers()
            .iter()
            .map(|p| p.category().to_string())
            .collect()
    }

    #[test]
    fn test_untargeted_provider_joins_every_engine() {
        let registry = RegistryBuilder::new()
            .engine("main", true)
            .engine("admin", false)
            .provider(provider("Pages", 10))
            .build()
            .unwrap();

        assert_eq!(categories(&registry, "main"), vec!["Pages"]);
        assert_eq!(categories(&registry, "admin"), vec!["Pages"]);
    }

    #[test]
    fn test_targeted_provider_joins_one_engine() {
        let registry = RegistryBuilder::new()
            .engine("main", true)
            .engine("admin", false)
            .provider(provider("Pages", 10))
            .provider_for("admin", provider("Users", 5))
            .build()
            .unwrap();

        assert_eq!(categories(&registry, "main"), vec!["Pages"]);
        assert_eq!(categories(&registry, "admin"), vec!["Users", "Pages"]);
    }

    #[test]
    fn test_provider_for_unknown_engine_is_dropped() {
        let registry = RegistryBuilder::new()
            .engine("main", true)
            .provider_for("missing", provider("Ghost", 10))
            .build()
            .unwrap();

        assert!(categories(&registry, "main").is_empty());
        assert!(!registry.has("missing"));
    }

    #[test]
    fn test_default_falls_back_to_first_engine() {
        let registry = RegistryBuilder::new()
            .engine("main", true)
            .engine("admin", true)
            .build()
            .unwrap();

        assert_eq!(registry.default_engine_name(), "main");
    }

    #[test]
    fn test_explicit_default_engine() {
        let registry = RegistryBuilder::new()
            .engine("main", true)
            .engine("admin", true)
            .default_engine("admin")
            .build()
            .unwrap();

        assert_eq!(registry.default_engine().engine_name(), "admin");
    }

    #[test]
    fn test_unknown_default_engine_fails() {
        let result = RegistryBuilder::new()
            .engine("main", true)
            .default_engine("admin")
            .build();

        assert!(matches!(result, Err(SearchError::DefaultEngineMissing { .. })));
    }

    #[test]
    fn test_no_engines_fails() {
        assert!(matches!(RegistryBuilder::new().build(), Err(SearchError::NoEngines)));
    }

    struct Alias;

    impl SearchHook for Alias {
        fn id(&self) -> &str {
            "alias"
        }

        fn pre_search(&self, mut event: PreSearchEvent) -> PreSearchEvent {
            if event.query() == "start" {
                event.set_query("homepage");
            }
            event
        }
    }

    #[tokio::test]
    async fn test_hooks_are_shared_with_every_engine() {
        let entries = vec![SearchResult::new("Homepage", "Main page", "/", "home")];
        let registry = RegistryBuilder::new()
            .engine("main", true)
            .engine("admin", true)
            .provider(Arc::new(StaticProvider::new("Pages", entries)))
            .hooks(Arc::new(HookDispatcher::new().with_hook(Arc::new(Alias))))
            .build()
            .unwrap();

        for engine in ["main", "admin"] {
            let service = registry.get(engine).unwrap();
            let groups: Vec<_> = service.search("start", None).await.unwrap().collect();
            assert_eq!(groups.len(), 1);
        }
    }
}
