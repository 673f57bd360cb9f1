
mod annotation;
mod provider;
mod voc_sample;

pub use annotation::*;
pub use provider::*;
pub use voc_sample::*;
