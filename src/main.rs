//! Global Search command-line front end
//!
//! Runs one query against a configured engine and prints the groups as JSON.

use anyhow::Result;
use clap::Parser;
use global_search::{config::Settings, EngineLoader, SearchResultGroup};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "global-search",
    version,
    about = "Multi-provider search aggregation",
    after_help = "Other environment variables: GLOBAL_SEARCH_DEFAULT_ENGINE, GLOBAL_SEARCH_MAX_RESULTS, RUST_LOG (default: info)"
)]
struct Args {
    /// Path to settings file
    #[arg(short, long, value_name = "FILE", env = "GLOBAL_SEARCH_SETTINGS_PATH")]
    config: Option<PathBuf>,

    /// Engine to search (default engine otherwise)
    #[arg(short, long, value_name = "NAME")]
    engine: Option<String>,

    /// Maximum number of results across all groups
    #[arg(short = 'n', long, value_name = "N")]
    max_results: Option<usize>,

    /// Query words, joined by spaces
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

impl Args {
    fn query(&self) -> String {
        self.query.join(" ")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Global Search v{}", global_search::VERSION);

    let settings = load_settings(args.config.as_deref())?;
    let registry = EngineLoader::load(&settings)?;

    let service = match args.engine {
        Some(ref name) => registry.get(name)?,
        None => registry.default_engine(),
    };
    let max_results = args.max_results.or(settings.search.max_results);
    let query = args.query();

    let groups: Vec<SearchResultGroup> = service.search(&query, max_results).await?.collect();
    info!(
        "Engine {} returned {} groups for '{}'",
        service.engine_name(),
        groups.len(),
        query
    );

    println!("{}", serde_json::to_string_pretty(&groups)?);

    Ok(())
}

/// Load settings from the given file, a default location or defaults
fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return read_settings(path);
    }

    let paths = [
        Some(PathBuf::from("global-search.yml")),
        Some(PathBuf::from("config/global-search.yml")),
        dirs::config_dir().map(|p| p.join("global-search/settings.yml")),
    ];

    for path in paths.iter().flatten() {
        if path.exists() {
            return read_settings(path);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<Settings> {
    info!("Loading settings from: {}", path.display());
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    Ok(settings)
}
