//! Identity lifecycle: admission with overlap suppression, per-frame
//! advancement and retirement after repeated tracking loss.

use thiserror::Error;

use crate::tracker::frame::Frame;
use crate::tracker::history::History;
use crate::tracker::identity::{Identity, TrackId, TrackReport};
use crate::tracker::rect::{BoundingBox, iou_batch};
use crate::tracker::single_object::{SingleObjectTracker, TrackerFactory};

/// Configuration for the TrackManager.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Boxes kept per identity trajectory
    pub max_history_length: usize,
    /// Consecutive update failures before an identity is retired
    pub failure_threshold: u32,
    /// Candidates overlapping an active identity above this IoU are rejected
    pub iou_suppression_threshold: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_history_length: 100,
            failure_threshold: 5,
            iou_suppression_threshold: 0.3,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_history_length must be at least 1")]
    EmptyHistory,
    #[error("failure_threshold must be at least 1")]
    ZeroFailureThreshold,
    #[error("iou_suppression_threshold must be within [0, 1], got {0}")]
    IouThresholdOutOfRange(f32),
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history_length == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if self.failure_threshold == 0 {
            return Err(ConfigError::ZeroFailureThreshold);
        }
        if !(0.0..=1.0).contains(&self.iou_suppression_threshold) {
            return Err(ConfigError::IouThresholdOutOfRange(
                self.iou_suppression_threshold,
            ));
        }
        Ok(())
    }
}

/// Result of offering a candidate box to the manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// A new identity was created.
    Created(TrackId),
    /// The candidate overlaps `existing` with an IoU above the suppression threshold.
    Suppressed { existing: TrackId, iou: f32 },
    /// The single-object tracker refused to initialize on the candidate.
    InitFailed,
}

impl Admission {
    pub fn is_created(&self) -> bool {
        matches!(self, Admission::Created(_))
    }

    pub fn id(&self) -> Option<TrackId> {
        match self {
            Admission::Created(id) => Some(*id),
            _ => None,
        }
    }
}

/// Running counters since construction or the last `reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagerStats {
    pub created: u64,
    pub suppressed: u64,
    pub init_failures: u64,
    pub retired: u64,
    pub frames: u64,
}

/// Multi-object tracker built from one single-object tracker per identity.
///
/// Per frame: call `admit` for each detection, then `advance` once, then read
/// `active_tracks` and `history_of`.
pub struct TrackManager<F: TrackerFactory> {
    factory: F,
    config: TrackerConfig,
    /// Admission order, which is also ascending id order
    identities: Vec<Identity<F::Tracker>>,
    reports: Vec<TrackReport>,
    next_id: TrackId,
    stats: ManagerStats,
}

impl<F: TrackerFactory> TrackManager<F> {
    pub fn new(factory: F, config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            factory,
            config,
            identities: Vec::new(),
            reports: Vec::new(),
            next_id: 0,
            stats: ManagerStats::default(),
        })
    }

    pub fn with_default_config(factory: F) -> Self {
        Self {
            factory,
            config: TrackerConfig::default(),
            identities: Vec::new(),
            reports: Vec::new(),
            next_id: 0,
            stats: ManagerStats::default(),
        }
    }

    /// Offer a detector candidate. A new identity is created unless the box
    /// duplicates an active identity or the tracker fails to initialize.
    pub fn admit(&mut self, frame: &Frame, bbox: BoundingBox) -> Admission {
        if let Some((existing, iou)) = self.strongest_overlap(&bbox) {
            if iou > self.config.iou_suppression_threshold {
                log::debug!("Candidate {bbox:?} suppressed by track {existing} (IoU {iou:.3})");
                self.stats.suppressed += 1;
                return Admission::Suppressed { existing, iou };
            }
        }

        let mut tracker = self.factory.create();
        if !tracker.init(frame, bbox) {
            log::warn!(
                "Tracker failed to initialize on {bbox:?} in frame {}",
                frame.index()
            );
            self.stats.init_failures += 1;
            return Admission::InitFailed;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.identities.push(Identity::new(
            id,
            tracker,
            bbox,
            self.config.max_history_length,
        ));
        self.stats.created += 1;
        log::debug!("Track {id} initialized at {bbox:?}");
        Admission::Created(id)
    }

    /// Step every identity's tracker on `frame`, then retire the ones that
    /// reached the failure threshold. Retired identities still appear in this
    /// frame's reports.
    pub fn advance(&mut self, frame: &Frame) -> &[TrackReport] {
        self.stats.frames += 1;
        let failure_threshold = self.config.failure_threshold;

        // Pass 1: update every identity and record its outcome
        self.reports = self
            .identities
            .iter_mut()
            .map(|identity| identity.update(frame, failure_threshold))
            .collect();

        // Pass 2: drop exhausted identities along with their history
        let before = self.identities.len();
        self.identities.retain(|identity| {
            let exhausted = identity.is_exhausted(failure_threshold);
            if exhausted {
                log::info!(
                    "Track {} removed after {} consecutive failures",
                    identity.id,
                    identity.consecutive_failures()
                );
            }
            !exhausted
        });
        self.stats.retired += (before - self.identities.len()) as u64;

        &self.reports
    }

    /// Reports from the latest `advance`, one per identity it processed.
    pub fn active_tracks(&self) -> &[TrackReport] {
        &self.reports
    }

    /// Trajectory of `id`, oldest first. Empty for unknown or retired ids.
    pub fn history_of(&self, id: TrackId) -> Vec<BoundingBox> {
        self.find(id)
            .map(|identity| identity.history().to_vec())
            .unwrap_or_default()
    }

    /// Borrowed trajectory of a live identity.
    pub fn history(&self, id: TrackId) -> Option<&History> {
        self.find(id).map(Identity::history)
    }

    /// Last known box of a live identity.
    pub fn current_box(&self, id: TrackId) -> Option<BoundingBox> {
        self.find(id).map(Identity::current_box)
    }

    /// Clear every identity, report and counter. The next identity gets id 0.
    pub fn reset(&mut self) {
        self.identities.clear();
        self.reports.clear();
        self.next_id = 0;
        self.stats = ManagerStats::default();
    }

    /// Ids of live identities in admission order.
    pub fn ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.identities.iter().map(|identity| identity.id)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn stats(&self) -> ManagerStats {
        self.stats
    }

    fn find(&self, id: TrackId) -> Option<&Identity<F::Tracker>> {
        self.identities
            .binary_search_by_key(&id, |identity| identity.id)
            .ok()
            .map(|idx| &self.identities[idx])
    }

    /// Live identity with the highest IoU against `bbox`.
    fn strongest_overlap(&self, bbox: &BoundingBox) -> Option<(TrackId, f32)> {
        let current: Vec<BoundingBox> = self
            .identities
            .iter()
            .map(Identity::current_box)
            .collect();
        let ious = iou_batch(std::slice::from_ref(bbox), &current);

        ious.row(0)
            .iter()
            .zip(&self.identities)
            .map(|(&iou, identity)| (identity.id, iou))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}
