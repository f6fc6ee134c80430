use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use multitrack_rs::{
    Admission, BoundingBox, Frame, SingleObjectTracker, TrackManager, TrackState, TrackerConfig,
    TrackerFactory,
};

/// Update outcomes shared with the test so it can decide, frame by frame,
/// whether the tracker finds its target.
type Script = Rc<RefCell<VecDeque<Option<BoundingBox>>>>;

struct ScriptedTracker {
    script: Script,
    last: BoundingBox,
}

impl SingleObjectTracker for ScriptedTracker {
    fn init(&mut self, _frame: &Frame, bbox: BoundingBox) -> bool {
        self.last = bbox;
        true
    }

    fn update(&mut self, _frame: &Frame) -> Option<BoundingBox> {
        match self.script.borrow_mut().pop_front() {
            Some(Some(bbox)) => {
                self.last = bbox;
                Some(bbox)
            }
            Some(None) => None,
            None => Some(self.last),
        }
    }
}

fn manager_with_script(
    config: TrackerConfig,
) -> (
    TrackManager<impl TrackerFactory<Tracker = ScriptedTracker>>,
    Script,
) {
    let script: Script = Rc::default();
    let shared = Rc::clone(&script);
    let factory = move || ScriptedTracker {
        script: Rc::clone(&shared),
        last: BoundingBox::default(),
    };
    (TrackManager::new(factory, config).unwrap(), script)
}

fn frame(index: usize) -> Frame {
    Frame::blank(64, 48, 3, index)
}

#[test]
fn test_lost_track_is_retired() {
    let (mut manager, script) = manager_with_script(TrackerConfig::default());
    let bbox = BoundingBox::new(10, 10, 20, 20);

    // Frame 1: admitted and tracked in place
    assert_eq!(manager.admit(&frame(1), bbox), Admission::Created(0));
    let reports = manager.advance(&frame(1)).to_vec();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, 0);
    assert_eq!(reports[0].bbox, bbox);
    assert!(reports[0].success);

    // Frames 2 to 6: the tracker loses the object every time
    for index in 2..=6 {
        script.borrow_mut().push_back(None);
        let reports = manager.advance(&frame(index)).to_vec();
        assert_eq!(reports.len(), 1, "frame {index}");
        assert!(!reports[0].success);
        assert_eq!(reports[0].bbox, bbox);
        if index < 6 {
            assert_eq!(reports[0].state, TrackState::Lost);
            assert_eq!(manager.history_of(0).len(), 2);
        } else {
            assert_eq!(reports[0].state, TrackState::Removed);
        }
    }

    assert!(manager.history_of(0).is_empty());
    assert!(manager.is_empty());

    // Gone from the next frame's reports
    manager.advance(&frame(7));
    assert!(manager.active_tracks().is_empty());
}

#[test]
fn test_success_resets_failure_count() {
    let (mut manager, script) = manager_with_script(TrackerConfig::default());
    manager.admit(&frame(0), BoundingBox::new(0, 0, 10, 10));

    script
        .borrow_mut()
        .extend([None, None, Some(BoundingBox::new(1, 1, 10, 10))]);
    for index in 1..=3 {
        manager.advance(&frame(index));
    }
    assert!(manager.active_tracks()[0].success);

    // Four more failures are tolerated, the fifth retires it
    for index in 4..=7 {
        script.borrow_mut().push_back(None);
        manager.advance(&frame(index));
        assert_eq!(manager.len(), 1, "frame {index}");
    }
    script.borrow_mut().push_back(None);
    manager.advance(&frame(8));
    assert!(manager.is_empty());
}

#[test]
fn test_ids_are_never_reused() {
    let config = TrackerConfig {
        failure_threshold: 1,
        ..TrackerConfig::default()
    };
    let (mut manager, script) = manager_with_script(config);
    let bbox = BoundingBox::new(0, 0, 10, 10);

    assert_eq!(manager.admit(&frame(0), bbox).id(), Some(0));
    script.borrow_mut().push_back(None);
    manager.advance(&frame(0));
    assert!(manager.is_empty());

    // Same place, new identity
    assert_eq!(manager.admit(&frame(1), bbox).id(), Some(1));
    let far = BoundingBox::new(50, 0, 10, 10);
    assert_eq!(manager.admit(&frame(1), far).id(), Some(2));
    assert_eq!(manager.ids().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_deduplication_and_reset() {
    let (mut manager, _script) = manager_with_script(TrackerConfig::default());
    let f = frame(0);

    let first = BoundingBox::new(0, 0, 10, 10);
    assert_eq!(manager.admit(&f, first), Admission::Created(0));
    assert!(!manager.admit(&f, BoundingBox::new(1, 1, 10, 10)).is_created());
    assert_eq!(manager.len(), 1);
    let far = BoundingBox::new(100, 100, 10, 10);
    assert_eq!(manager.admit(&f, far), Admission::Created(1));
    assert_eq!(manager.len(), 2);

    manager.advance(&f);
    assert_eq!(manager.active_tracks().len(), 2);

    manager.reset();
    assert!(manager.active_tracks().is_empty());
    assert!(manager.history_of(0).is_empty());
    assert!(manager.history_of(1).is_empty());
    assert_eq!(manager.admit(&f, first), Admission::Created(0));
}
