//! Registry of named search engines

use super::builder::RegistryBuilder;
use crate::error::{Result, SearchError};
use crate::search::SearchService;
use std::collections::HashMap;
use std::sync::Arc;

/// One named engine and its UI exposure flag
#[derive(Clone)]
pub struct EngineEntry {
    service: Arc<SearchService>,
    ui: bool,
}

impl EngineEntry {
    /// Entry named after the service's engine, exposed to the UI
    pub fn new(service: Arc<SearchService>) -> Self {
        Self { service, ui: true }
    }

    pub fn with_ui(mut self, ui: bool) -> Self {
        self.ui = ui;
        self
    }

    pub fn name(&self) -> &str {
        self.service.engine_name()
    }

    pub fn service(&self) -> &Arc<SearchService> {
        &self.service
    }

    pub fn ui(&self) -> bool {
        self.ui
    }
}

/// Named search engines with one designated default
pub struct SearchEngineRegistry {
    /// Engines by name
    engines: HashMap<String, EngineEntry>,
    /// Engine names in declaration order
    names: Vec<String>,
    /// Name of the default engine
    default_name: String,
    /// Service of the default engine
    default_service: Arc<SearchService>,
}

impl SearchEngineRegistry {
    /// Create a registry from `entries`, in declaration order.
    ///
    /// Fails if there are no entries, if a name repeats, or if
    /// `default_engine` is not one of the entries.
    pub fn new(entries: Vec<EngineEntry>, default_engine: impl Into<String>) -> Result<Self> {
        if entries.is_empty() {
            return Err(SearchError::NoEngines);
        }

        let mut engines = HashMap::with_capacity(entries.len());
        let mut names = Vec::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name().to_string();
            if engines.contains_key(&name) {
                return Err(SearchError::DuplicateEngine(name));
            }
            names.push(name.clone());
            engines.insert(name, entry);
        }

        let default_name = default_engine.into();
        let default_service = match engines.get(&default_name) {
            Some(entry) => entry.service.clone(),
            None => {
                return Err(SearchError::DefaultEngineMissing {
                    name: default_name,
                    available: names,
                })
            }
        };

        Ok(Self {
            engines,
            names,
            default_name,
            default_service,
        })
    }

    /// Start building a registry with provider routing
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Get an engine by name
    pub fn get(&self, name: &str) -> Result<&Arc<SearchService>> {
        self.engines
            .get(name)
            .map(|entry| &entry.service)
            .ok_or_else(|| SearchError::engine_not_found(name, &self.names))
    }

    /// Check if an engine exists
    pub fn has(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    /// Get the default engine
    pub fn default_engine(&self) -> &Arc<SearchService> {
        &self.default_service
    }

    pub fn default_engine_name(&self) -> &str {
        &self.default_name
    }

    /// All engine names in declaration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the engine exists and is exposed to the UI
    pub fn has_ui(&self, name: &str) -> bool {
        self.engines.get(name).map(|e| e.ui).unwrap_or(false)
    }

    /// Names of engines exposed to the UI, in declaration order
    pub fn ui_engines(&self) -> Vec<&str> {
        self.names
            .iter()
            .filter(|name| self.has_ui(name))
            .map(|name| name.as_str())
            .collect()
    }

    /// Get number of registered engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Never true for a constructed registry
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
