//! Settings structures for engine and provider configuration

use crate::providers::{DEFAULT_PRIORITY, MAX_PRIORITY};
use crate::results::SearchResult;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Main settings structure loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default engine name; the first declared engine when unset
    pub default_engine: Option<String>,
    pub search: SearchSettings,
    pub engines: Vec<EngineConfig>,
    /// Providers declared directly in settings
    pub providers: Vec<ProviderConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_engine: None,
            search: SearchSettings::default(),
            engines: vec![EngineConfig::default()],
            providers: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge with environment variables (GLOBAL_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("GLOBAL_SEARCH_DEFAULT_ENGINE") {
            self.default_engine = Some(val);
        }
        if let Some(val) = var("GLOBAL_SEARCH_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.search.max_results = Some(max);
            }
        }
    }

    /// Check engine names, the default engine and provider declarations
    pub fn validate(&self) -> Result<()> {
        if self.engines.is_empty() {
            bail!("At least one search engine must be configured");
        }

        let mut seen = HashSet::new();
        for engine in &self.engines {
            if engine.name.trim().is_empty() {
                bail!("Search engine names must not be empty");
            }
            if !seen.insert(engine.name.as_str()) {
                bail!("Search engine \"{}\" is configured more than once", engine.name);
            }
        }

        if let Some(ref name) = self.default_engine {
            if self.get_engine(name).is_none() {
                bail!("Default search engine \"{}\" is not configured", name);
            }
        }

        for provider in &self.providers {
            if provider.category.trim().is_empty() {
                bail!("Provider categories must not be empty");
            }
            if provider.priority > MAX_PRIORITY {
                bail!(
                    "Provider \"{}\" has priority {}, expected 0-{}",
                    provider.category,
                    provider.priority,
                    MAX_PRIORITY
                );
            }
        }

        Ok(())
    }

    /// Get engine config by name
    pub fn get_engine(&self, name: &str) -> Option<&EngineConfig> {
        self.engines.iter().find(|e| e.name == name)
    }

    /// Configured default engine, or the first declared one
    pub fn resolved_default_engine(&self) -> Option<&str> {
        self.default_engine
            .as_deref()
            .or_else(|| self.engines.first().map(|e| e.name.as_str()))
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Cap on results per search across all groups
    pub max_results: Option<usize>,
}

/// Individual engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine name (unique identifier)
    pub name: String,
    /// Whether the engine is exposed to the UI
    pub ui: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            ui: true,
        }
    }
}

/// Provider with a fixed set of results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Group label
    pub category: String,
    /// Sort key, lower first (0-100)
    pub priority: u8,
    /// Engine this provider belongs to; every engine when unset
    pub engine: Option<String>,
    /// Entries matched against the query
    pub results: Vec<SearchResult>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            category: String::new(),
            priority: DEFAULT_PRIORITY,
            engine: None,
            results: Vec::new(),
        }
    }
}
