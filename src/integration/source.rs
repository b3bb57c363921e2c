//! Trait for catalog providers.

use std::fs;
use std::path::PathBuf;

use super::MatchCatalog;
use crate::engine::EngineConfig;
use crate::error::CatalogError;

/// Anything that can hand the engine a match catalog: a REST client, a file, a fixture.
///
/// # Example
///
/// ```ignore
/// use court_overlay::{CatalogSource, EngineConfig, MatchCatalog};
///
/// struct BackendClient { /* http client, analysis id */ }
///
/// impl CatalogSource for BackendClient {
///     type Error = MyHttpError;
///
///     fn load(&mut self, config: &EngineConfig) -> Result<MatchCatalog, Self::Error> {
///         let body = self.fetch_detections()?;
///         Ok(MatchCatalog::from_json_str(&body, config)?)
///     }
/// }
/// ```
pub trait CatalogSource {
    /// Error type for load failures.
    type Error;

    /// Fetch the full catalog. Called once per analyzed match.
    fn load(&mut self, config: &EngineConfig) -> Result<MatchCatalog, Self::Error>;
}

/// Reads a backend JSON payload from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    type Error = CatalogError;

    fn load(&mut self, config: &EngineConfig) -> Result<MatchCatalog, Self::Error> {
        let contents = fs::read_to_string(&self.path)?;
        MatchCatalog::from_json_str(&contents, config)
    }
}

/// Serves a JSON payload already held in memory.
#[derive(Debug, Clone)]
pub struct JsonStrSource {
    json: String,
}

impl JsonStrSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for JsonStrSource {
    type Error = CatalogError;

    fn load(&mut self, config: &EngineConfig) -> Result<MatchCatalog, Self::Error> {
        MatchCatalog::from_json_str(&self.json, config)
    }
}
