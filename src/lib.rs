pub mod utils;
mod error;
pub mod data;
pub mod common;
pub mod render;

use std::path::Path;
use crate::common::VocDataProvider;
use crate::data::{Split, VocLabels};

pub use error::VocError;

pub type Result<T, E = VocError> = std::result::Result<T, E>;

/// Indexes one split of a VOC-layout dataset root using the standard
/// VOC 2007 class registry.
pub fn open_split(root_dir: impl AsRef<Path>, split: Split) -> Result<VocDataProvider> {
    let provider = VocDataProvider::new(root_dir, split, VocLabels::voc2007())?;
    log::info!(
        "opened '{}' split with {} samples",
        provider.split(),
        provider.len()
    );
    Ok(provider)
}
