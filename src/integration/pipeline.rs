//! PlaybackPipeline: the host-facing entry point.

use crate::engine::{
    DetectionCatalog, EngineConfig, Event, EventTimeline, SceneAssembler, Scenes, SeekRequest,
    SourceDimensions,
};

use super::{CatalogSource, MatchCatalog};

/// Bundles one match's catalog with the engine configuration.
///
/// The host drives it from its playback clock: call [`render`](Self::render) with the absolute
/// current time on every tick and keep the returned scenes as "current". The pipeline itself
/// holds no per-tick state; the only thing that changes after construction is the source
/// dimensions, once video metadata has loaded.
#[derive(Debug, Clone)]
pub struct PlaybackPipeline {
    detections: DetectionCatalog,
    timeline: EventTimeline,
    config: EngineConfig,
    dims: SourceDimensions,
}

impl PlaybackPipeline {
    /// Create a pipeline over an already loaded catalog.
    pub fn new(catalog: MatchCatalog, config: EngineConfig) -> Self {
        Self {
            detections: catalog.detections,
            timeline: EventTimeline::new(catalog.events, config.event_tolerance_seconds),
            config,
            dims: SourceDimensions::unknown(),
        }
    }

    /// Create a pipeline with default engine configuration.
    pub fn with_default_config(catalog: MatchCatalog) -> Self {
        Self::new(catalog, EngineConfig::default())
    }

    /// Load the catalog from `source` and build a pipeline over it.
    pub fn from_source<S: CatalogSource>(source: &mut S, config: EngineConfig) -> Result<Self, S::Error> {
        let catalog = source.load(&config)?;
        Ok(Self::new(catalog, config))
    }

    /// Record the source video size. Unknown (zero) sizes suppress overlay output.
    pub fn set_source_dimensions(&mut self, dims: SourceDimensions) {
        self.dims = dims;
    }

    pub fn source_dimensions(&self) -> SourceDimensions {
        self.dims
    }

    /// Compute both scenes for the absolute playback time `time_seconds`.
    pub fn render(&self, time_seconds: f64) -> Scenes {
        SceneAssembler::new(&self.detections, &self.timeline, &self.config).render(time_seconds, self.dims)
    }

    /// The event "now showing" at `time_seconds`, if any.
    pub fn active_event(&self, time_seconds: f64) -> Option<&Event> {
        self.timeline.active_event(time_seconds)
    }

    /// Ask the host to jump to `event`. Call [`render`](Self::render) at the new time as usual.
    pub fn seek(&self, event: &Event) -> SeekRequest {
        self.timeline.seek(event)
    }

    pub fn events(&self) -> &[Event] {
        self.timeline.events()
    }

    pub fn detections(&self) -> &DetectionCatalog {
        &self.detections
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
