//! Search engine module
//!
//! Named engines, the registry resolving them and the builders that route
//! providers to each engine.

mod builder;
mod loader;
mod registry;

pub use builder::RegistryBuilder;
pub use loader::EngineLoader;
pub use registry::{EngineEntry, SearchEngineRegistry};
