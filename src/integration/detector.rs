//! Trait for object detection backends.

use super::Detection;
use crate::tracker::Frame;

/// Trait for object detection backends.
///
/// Implement this trait to feed any detection model into a `TrackerPipeline`.
///
/// # Example
///
/// ```ignore
/// use multitrack_rs::{Detection, DetectionSource, Frame};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on a frame and return candidate objects.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
///
/// Implement this for your model's output format to enable easy conversion.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// Rows of `[xmin, ymin, xmax, ymax, confidence, class]`, the usual layout of
/// a post-NMS detector output tensor.
impl IntoDetections for ndarray::ArrayView2<'_, f32> {
    fn into_detections(self) -> Vec<Detection> {
        self.rows()
            .into_iter()
            .filter(|row| row.len() >= 6)
            .map(|row| Detection::new(row[0], row[1], row[2], row[3], row[4], row[5] as u32))
            .collect()
    }
}
