//! TrackerPipeline for combining detection with identity management.

use std::collections::BTreeMap;

use crate::tracker::{
    BoundingBox, ConfigError, Frame, TrackId, TrackManager, TrackReport, TrackerConfig,
    TrackerFactory,
};

use super::DetectionSource;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameTracks {
    pub reports: Vec<TrackReport>,
    /// Trajectory of every reported identity that is still live
    pub histories: BTreeMap<TrackId, Vec<BoundingBox>>,
}

/// Bundles a `DetectionSource` with a `TrackManager` and runs the per-frame
/// loop: detect, admit every candidate, advance once.
pub struct TrackerPipeline<D: DetectionSource, F: TrackerFactory> {
    detector: D,
    manager: TrackManager<F>,
}

impl<D: DetectionSource, F: TrackerFactory> TrackerPipeline<D, F> {
    /// Create a new pipeline with the given detector, tracker factory and config.
    pub fn new(detector: D, factory: F, config: TrackerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            detector,
            manager: TrackManager::new(factory, config)?,
        })
    }

    /// Create a new pipeline with the default manager configuration.
    pub fn with_default_config(detector: D, factory: F) -> Self {
        Self {
            detector,
            manager: TrackManager::with_default_config(factory),
        }
    }

    /// Process a single frame.
    ///
    /// A detector error aborts the frame before any identity is admitted or
    /// advanced.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<FrameTracks, D::Error> {
        let detections = self.detector.detect(frame)?;
        for detection in &detections {
            self.manager.admit(frame, detection.to_bbox());
        }

        let reports = self.manager.advance(frame).to_vec();
        let histories = reports
            .iter()
            .map(|report| (report.id, self.manager.history_of(report.id)))
            .filter(|(_, history)| !history.is_empty())
            .collect();

        Ok(FrameTracks { reports, histories })
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying manager.
    pub fn manager(&self) -> &TrackManager<F> {
        &self.manager
    }

    /// Get a mutable reference to the underlying manager.
    pub fn manager_mut(&mut self) -> &mut TrackManager<F> {
        &mut self.manager
    }
}
