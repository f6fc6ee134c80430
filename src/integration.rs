//! Integration module for driving the track manager from a detector.
//!
//! This module provides the detector seam, the detector's output record and a
//! pipeline that runs the per-frame detect, admit, advance loop.

mod builder;
mod detection;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detection::Detection;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{FrameTracks, TrackerPipeline};
