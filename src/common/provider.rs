use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::common::annotation::load_annotation;
use crate::common::voc_sample::VocSample;
use crate::data::{Split, VocLabels};
use crate::error::VocError;
use crate::utils;

/// Ordered, random-access index over one split of a VOC-layout dataset.
///
/// Construction reads the split's ID list fully into memory; each `get` then
/// re-reads the image and annotation files for the resolved ID. Accesses are
/// stateless and idempotent, so a provider is safe to share across readers.
#[derive(Debug, Clone)]
pub struct VocDataProvider {
    root_dir: PathBuf,
    image_dir: PathBuf,
    anno_dir: PathBuf,
    split: Split,
    labels: VocLabels,
    ids: Vec<String>,
}

impl VocDataProvider {
    /// Indexes `split` under `root_dir`, which must follow the VOC layout
    /// (`JPEGImages/`, `Annotations/`, `ImageSets/Main/<split>.txt`).
    pub fn new(
        root_dir: impl AsRef<Path>,
        split: Split,
        labels: VocLabels,
    ) -> Result<Self, VocError> {
        let root_dir = root_dir.as_ref().to_path_buf();
        let ids_file = root_dir
            .join("ImageSets")
            .join("Main")
            .join(split.list_file_name());
        let ids = utils::read_id_list(&ids_file).map_err(|source| VocError::SplitListRead {
            path: ids_file.clone(),
            source,
        })?;
        if ids.is_empty() {
            return Err(VocError::SplitListEmpty { path: ids_file });
        }
        log::debug!("indexed {} split '{}': {} IDs", root_dir.display(), split, ids.len());

        Ok(Self {
            image_dir: root_dir.join("JPEGImages"),
            anno_dir: root_dir.join("Annotations"),
            root_dir,
            split,
            labels,
            ids,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn labels(&self) -> &VocLabels {
        &self.labels
    }

    /// Sample IDs in split-file order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn id_at(&self, index: usize) -> Result<&str, VocError> {
        self.ids
            .get(index)
            .map(String::as_str)
            .ok_or(VocError::IndexOutOfRange {
                index,
                len: self.ids.len(),
            })
    }

    /// Loads the sample at `index`, which must satisfy `index < len()`.
    pub fn get(&self, index: usize) -> Result<VocSample, VocError> {
        // Strict range check; out-of-range is the caller's bug to hear about.
        if index >= self.ids.len() {
            return Err(VocError::IndexOutOfRange {
                index,
                len: self.ids.len(),
            });
        }
        self.load(&self.ids[index])
    }

    /// Loads the sample for `id` directly, bypassing the split index.
    pub fn load(&self, id: &str) -> Result<VocSample, VocError> {
        let image_path = self.image_dir.join(format!("{id}.jpg"));
        let anno_path = self.anno_dir.join(format!("{id}.xml"));

        let image = load_image(&image_path)?;
        let (boxes, labels) = load_annotation(&anno_path, &self.labels)?;

        Ok(VocSample::new(image, boxes, labels))
    }

    /// Iterates samples in split-file order.
    pub fn iter(&self) -> SampleIter<'_> {
        SampleIter {
            provider: self,
            next_index: 0,
        }
    }
}

/// Decodes an image file into RGB pixels. A missing file and an undecodable
/// file surface as distinct errors.
pub fn load_image(path: &Path) -> Result<RgbImage, VocError> {
    let reader = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| VocError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    let image = reader.decode().map_err(|err| match err {
        image::ImageError::IoError(source) => VocError::ImageRead {
            path: path.to_path_buf(),
            source,
        },
        other => VocError::ImageDecode {
            path: path.to_path_buf(),
            source: other,
        },
    })?;
    Ok(image.to_rgb8())
}

pub struct SampleIter<'a> {
    provider: &'a VocDataProvider,
    next_index: usize,
}

impl Iterator for SampleIter<'_> {
    type Item = Result<VocSample, VocError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.provider.len() {
            return None;
        }
        let item = self.provider.get(self.next_index);
        self.next_index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.provider.len() - self.next_index;
        (remaining, Some(remaining))
    }
}
