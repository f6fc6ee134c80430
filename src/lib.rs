//! Multi-object tracking on top of single-object visual trackers.
//!
//! A [`TrackManager`] wraps one [`SingleObjectTracker`] per object, admits
//! new objects from detector candidates while suppressing duplicates, and
//! retires identities whose tracker keeps losing its target.

pub mod integration;
pub mod tracker;

pub use integration::{
    Detection, DetectionBuilder, DetectionSource, FrameTracks, IntoDetections, TrackerPipeline,
};
pub use tracker::{
    Admission, BoundingBox, ConfigError, Frame, FrameError, History, ManagerStats,
    SingleObjectTracker, TrackId, TrackManager, TrackReport, TrackState, TrackerConfig,
    TrackerFactory,
};
