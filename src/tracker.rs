mod frame;
mod history;
mod identity;
mod rect;
mod single_object;
mod track_manager;
mod track_state;

pub use frame::{Frame, FrameError};
pub use history::History;
pub use identity::{TrackId, TrackReport};
pub use rect::{BoundingBox, iou_batch};
pub use single_object::{SingleObjectTracker, TrackerFactory};
pub use track_manager::{Admission, ConfigError, ManagerStats, TrackManager, TrackerConfig};
pub use track_state::TrackState;
