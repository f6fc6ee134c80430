use crate::tracker::frame::Frame;
use crate::tracker::history::History;
use crate::tracker::rect::BoundingBox;
use crate::tracker::single_object::SingleObjectTracker;
use crate::tracker::track_state::TrackState;

/// Identifier handed out by a `TrackManager`, sequential from 0.
pub type TrackId = u64;

/// Per-frame status of one identity, produced by `TrackManager::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackReport {
    pub id: TrackId,
    /// Predicted box on success, last known box on failure
    pub bbox: BoundingBox,
    pub success: bool,
    pub state: TrackState,
}

/// One tracked object: its tracker, failure streak and trajectory live and
/// die together.
#[derive(Debug)]
pub(crate) struct Identity<T> {
    pub id: TrackId,
    tracker: T,
    consecutive_failures: u32,
    history: History,
}

impl<T: SingleObjectTracker> Identity<T> {
    pub fn new(id: TrackId, tracker: T, bbox: BoundingBox, max_history_length: usize) -> Self {
        Self {
            id,
            tracker,
            consecutive_failures: 0,
            history: History::new(bbox, max_history_length),
        }
    }

    pub fn current_box(&self) -> BoundingBox {
        self.history.last()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_exhausted(&self, failure_threshold: u32) -> bool {
        self.consecutive_failures >= failure_threshold
    }

    /// Step the tracker one frame and record the outcome.
    pub fn update(&mut self, frame: &Frame, failure_threshold: u32) -> TrackReport {
        match self.tracker.update(frame) {
            Some(bbox) => {
                self.history.push(bbox);
                self.consecutive_failures = 0;
                TrackReport {
                    id: self.id,
                    bbox,
                    success: true,
                    state: TrackState::Tracked,
                }
            }
            None => {
                self.consecutive_failures += 1;
                log::trace!(
                    "Track {} lost its target ({} consecutive failures)",
                    self.id,
                    self.consecutive_failures
                );
                let state = if self.is_exhausted(failure_threshold) {
                    TrackState::Removed
                } else {
                    TrackState::Lost
                };
                TrackReport {
                    id: self.id,
                    bbox: self.history.last(),
                    success: false,
                    state,
                }
            }
        }
    }
}
