use std::path::PathBuf;

/// Error taxonomy for dataset indexing and annotation parsing.
///
/// Every failure surfaces to the immediate caller; the library performs no
/// retries and returns no partial samples.
#[derive(Debug, thiserror::Error)]
pub enum VocError {
    #[error("split list {path:?} is missing or unreadable: {source}")]
    SplitListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("split list {path:?} contains no sample IDs")]
    SplitListEmpty { path: PathBuf },

    #[error("image file {path:?} could not be read: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image file {path:?} could not be decoded: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("annotation file {path:?} could not be read: {source}")]
    AnnotationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("annotation file {path:?} is malformed: {detail}")]
    AnnotationParse { path: PathBuf, detail: String },

    #[error("class name '{name}' is not a registered VOC class")]
    UnknownClass { name: String },

    #[error("label {label} is out of range for {count} registered classes")]
    LabelOutOfRange { label: usize, count: usize },

    #[error("sample index {index} is out of range for split of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
