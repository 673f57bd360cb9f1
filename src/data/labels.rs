use std::collections::HashMap;

use crate::error::VocError;

/// The 20 PASCAL VOC 2007 object classes, in canonical order.
const VOC2007_CLASSES: [&str; 20] = [
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];

/// Fixed, ordered class-name registry defining the name<->label bijection.
///
/// Labels are dense indices `0..len()` in registration order. The registry is
/// immutable after construction; build it once and pass it by reference to
/// every component that needs it.
#[derive(Debug, Clone)]
pub struct VocLabels {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl VocLabels {
    /// The standard VOC 2007 class set.
    pub fn voc2007() -> Self {
        Self::from_names(VOC2007_CLASSES.iter().map(|s| s.to_string()))
    }

    fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let names: Vec<String> = names.into_iter().collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, index }
    }

    /// Zero-based label for `name`. Lookup is case-sensitive; callers must
    /// normalize to lowercase/trimmed first.
    pub fn name_to_label(&self, name: &str) -> Result<usize, VocError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| VocError::UnknownClass {
                name: name.to_string(),
            })
    }

    /// Class name for `label`.
    pub fn label_to_name(&self, label: usize) -> Result<&str, VocError> {
        self.names
            .get(label)
            .map(String::as_str)
            .ok_or(VocError::LabelOutOfRange {
                label,
                count: self.names.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for VocLabels {
    fn default() -> Self {
        Self::voc2007()
    }
}
