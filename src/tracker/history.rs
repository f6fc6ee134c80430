use std::collections::VecDeque;

use crate::tracker::rect::BoundingBox;

/// Sliding window over an identity's most recent boxes, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    boxes: VecDeque<BoundingBox>,
    capacity: usize,
}

impl History {
    /// Start a trajectory at `first`. `capacity` must be at least 1.
    pub fn new(first: BoundingBox, capacity: usize) -> Self {
        debug_assert!(capacity > 0, "history capacity must be positive");
        let mut boxes = VecDeque::with_capacity(capacity.min(128));
        boxes.push_back(first);
        Self { boxes, capacity }
    }

    /// Append a box, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, bbox: BoundingBox) {
        self.boxes.push_back(bbox);
        while self.boxes.len() > self.capacity {
            self.boxes.pop_front();
        }
    }

    /// Never empty: a history is created with one box and only ever grows or
    /// slides.
    pub fn last(&self) -> BoundingBox {
        self.boxes.back().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundingBox> + '_ {
        self.boxes.iter()
    }

    pub fn to_vec(&self) -> Vec<BoundingBox> {
        self.boxes.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(i: i32) -> BoundingBox {
        BoundingBox::new(i, i, 10, 10)
    }

    #[test]
    fn test_new_holds_first_box() {
        let history = History::new(b(0), 3);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last(), b(0));
    }

    #[test]
    fn test_push_slides_window() {
        let mut history = History::new(b(0), 3);
        for i in 1..=5 {
            history.push(b(i));
        }
        assert_eq!(history.to_vec(), vec![b(3), b(4), b(5)]);
        assert_eq!(history.last(), b(5));
    }

    #[test]
    fn test_capacity_one_keeps_latest() {
        let mut history = History::new(b(0), 1);
        history.push(b(1));
        assert_eq!(history.to_vec(), vec![b(1)]);
    }
}
