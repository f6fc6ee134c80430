//! Seam for the external single-object visual tracker.

use crate::tracker::frame::Frame;
use crate::tracker::rect::BoundingBox;

/// A visual tracker that follows exactly one object.
///
/// The track manager owns one instance per identity and never inspects how it
/// locates its target. Losing the target is an ordinary outcome, not an error.
pub trait SingleObjectTracker {
    /// Start tracking `bbox` in `frame`. Returns `false` if the tracker could
    /// not lock on.
    fn init(&mut self, frame: &Frame, bbox: BoundingBox) -> bool;

    /// Locate the target in the next frame, or `None` if it was lost.
    fn update(&mut self, frame: &Frame) -> Option<BoundingBox>;
}

impl<T: SingleObjectTracker + ?Sized> SingleObjectTracker for Box<T> {
    fn init(&mut self, frame: &Frame, bbox: BoundingBox) -> bool {
        (**self).init(frame, bbox)
    }

    fn update(&mut self, frame: &Frame) -> Option<BoundingBox> {
        (**self).update(frame)
    }
}

/// Creates fresh tracker instances, one per admitted identity.
///
/// Any `FnMut() -> T` closure is a factory.
pub trait TrackerFactory {
    type Tracker: SingleObjectTracker;

    fn create(&mut self) -> Self::Tracker;
}

impl<F, T> TrackerFactory for F
where
    F: FnMut() -> T,
    T: SingleObjectTracker,
{
    type Tracker = T;

    fn create(&mut self) -> T {
        self()
    }
}
