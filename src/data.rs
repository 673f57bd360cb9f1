mod labels;
mod split;
mod voc_box;

pub use labels::VocLabels;
pub use split::Split;
pub use voc_box::VocBox;
