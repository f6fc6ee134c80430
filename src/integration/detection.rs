use crate::tracker::BoundingBox;

/// One detector output in corner format, as produced by YOLO-style models.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
    /// Detection confidence score
    pub confidence: f32,
    pub class_id: u32,
}

impl Detection {
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32, confidence: f32, class_id: u32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
            confidence,
            class_id,
        }
    }

    /// Integer TLWH box handed to `TrackManager::admit`.
    pub fn to_bbox(&self) -> BoundingBox {
        BoundingBox::from_corners(self.xmin, self.ymin, self.xmax, self.ymax)
    }
}
