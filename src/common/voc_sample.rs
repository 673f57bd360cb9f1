use image::RgbImage;

use crate::data::VocBox;

/// One fully-loaded dataset sample: decoded image plus the order-aligned
/// boxes and labels of its non-difficult annotated objects.
#[derive(Debug, Clone)]
pub struct VocSample {
    pub image: RgbImage,
    pub boxes: Vec<VocBox>,
    pub labels: Vec<usize>,
}

impl VocSample {
    pub fn new(image: RgbImage, boxes: Vec<VocBox>, labels: Vec<usize>) -> Self {
        debug_assert_eq!(boxes.len(), labels.len());
        Self {
            image,
            boxes,
            labels,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of annotated (non-difficult) objects in the sample.
    pub fn num_objects(&self) -> usize {
        self.boxes.len()
    }
}
