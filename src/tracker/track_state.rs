/// Outcome of an identity's most recent update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// The tracker relocated its target this frame
    #[default]
    Tracked,
    /// The tracker lost its target this frame but stays under the failure threshold
    Lost,
    /// The tracker hit the failure threshold this frame and the identity was retired
    Removed,
}
