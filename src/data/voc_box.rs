use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in zero-based integer pixel coordinates.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl VocBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Builds a box from the 1-based corner coordinates used by VOC
    /// annotation files, shifting each by -1 into the zero-based convention.
    pub fn from_voc_corners(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self::new(xmin - 1, ymin - 1, xmax - 1, ymax - 1)
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Returns the bounding box coordinates as `(x1, y1, x2, y2)`.
    pub fn as_x1y1_x2y2_i32(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Returns the bounding box position and size as `(x, y, w, h)`.
    pub fn as_xy_wh_i32(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.width(), self.height())
    }
}
