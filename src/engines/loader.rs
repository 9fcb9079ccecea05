//! Engine loader for building a registry from settings

use super::builder::RegistryBuilder;
use super::registry::SearchEngineRegistry;
use crate::config::Settings;
use crate::providers::{SearchProvider, StaticProvider};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing engines from configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Validate `settings` and prepare a builder with its engines and
    /// providers, ready for application providers and hooks
    pub fn builder(settings: &Settings) -> Result<RegistryBuilder> {
        settings.validate()?;

        let mut builder = RegistryBuilder::new();

        for engine in &settings.engines {
            info!("Declared search engine: {} (ui: {})", engine.name, engine.ui);
            builder = builder.engine(engine.name.clone(), engine.ui);
        }

        if let Some(ref name) = settings.default_engine {
            builder = builder.default_engine(name.clone());
        }

        for config in &settings.providers {
            let provider: Arc<dyn SearchProvider> = Arc::new(
                StaticProvider::new(config.category.clone(), config.results.clone())
                    .with_priority(config.priority),
            );

            builder = match config.engine {
                Some(ref engine) => {
                    info!("Loaded provider: {} for engine {}", config.category, engine);
                    builder.provider_for(engine.clone(), provider)
                }
                None => {
                    info!("Loaded provider: {} for all engines", config.category);
                    builder.provider(provider)
                }
            };
        }

        Ok(builder)
    }

    /// Build the registry described by `settings`
    pub fn load(settings: &Settings) -> Result<SearchEngineRegistry> {
        let registry = Self::builder(settings)?.build()?;
        info!(
            "Loaded {} search engines, default: {}",
            registry.len(),
            registry.default_engine_name()
        );
        Ok(registry)
    }
}
