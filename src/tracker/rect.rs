/// Axis-aligned bounding box in integer pixel coordinates.
///
/// Stored as TLWH: top-left x, top-left y, width, height. Width and height are
/// unsigned so a box can never be inverted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Top-left x coordinate
    pub x: i32,
    /// Top-left y coordinate
    pub y: i32,
    /// Width of the bounding box
    pub width: u32,
    /// Height of the bounding box
    pub height: u32,
}

impl BoundingBox {
    /// Create a new box from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box from floating point corners (xmin, ymin, xmax, ymax).
    ///
    /// Every value is truncated toward zero. Inverted corners collapse to a
    /// zero-sized box anchored at (xmin, ymin).
    pub fn from_corners(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        let width = (xmax - xmin).max(0.0) as u32;
        let height = (ymax - ymin).max(0.0) as u32;
        Self {
            x: xmin as i32,
            y: ymin as i32,
            width,
            height,
        }
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [i64; 4] {
        [
            self.x as i64,
            self.y as i64,
            self.width as i64,
            self.height as i64,
        ]
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [i64; 4] {
        [self.x as i64, self.y as i64, self.right(), self.bottom()]
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Center point, used for drawing trajectory polylines.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Calculate Intersection over Union (IoU) with another bounding box.
    ///
    /// Two boxes with an empty union (both zero-area) have an IoU of 0.
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        let inter_width = (self.right().min(other.right()) - (self.x.max(other.x) as i64)).max(0);
        let inter_height =
            (self.bottom().min(other.bottom()) - (self.y.max(other.y) as i64)).max(0);
        let inter_area = inter_width as i128 * inter_height as i128;

        let union_area = self.area() as i128 + other.area() as i128 - inter_area;

        if union_area > 0 {
            (inter_area as f64 / union_area as f64) as f32
        } else {
            0.0
        }
    }
}

impl From<(i32, i32, u32, u32)> for BoundingBox {
    fn from((x, y, width, height): (i32, i32, u32, u32)) -> Self {
        Self::new(x, y, width, height)
    }
}

use ndarray::Array2;

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `boxes_a`
/// and N is the length of `boxes_b`.
pub fn iou_batch(boxes_a: &[BoundingBox], boxes_b: &[BoundingBox]) -> Array2<f32> {
    let mut ious = Array2::zeros((boxes_a.len(), boxes_b.len()));
    for (i, a) in boxes_a.iter().enumerate() {
        for (j, b) in boxes_b.iter().enumerate() {
            ious[[i, j]] = a.iou(b);
        }
    }
    ious
}
