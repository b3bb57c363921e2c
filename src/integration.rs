//! Integration module for connecting a host video player with the overlay engine.
//!
//! This module provides catalog loading, the catalog source trait, and the
//! playback pipeline the host drives from its clock.

mod builder;
mod catalog;
mod pipeline;
mod source;

pub use builder::DetectionRecordBuilder;
pub use catalog::MatchCatalog;
pub use pipeline::PlaybackPipeline;
pub use source::{CatalogSource, JsonFileSource, JsonStrSource};
