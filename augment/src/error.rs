use crate::common::*;
use label::LabelError;
use std::io;
use thiserror::Error;

/// Failures of a dataset run.
///
/// Fatal errors abort the whole run. The others only skip the image they
/// occurred on.
#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("output directory '{}' does not exist", path.display())]
    MissingOutputDir { path: PathBuf },

    #[error("preview directory '{}' does not exist", path.display())]
    MissingPreviewDir { path: PathBuf },

    #[error("unable to list images in '{}': {source}", path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to load annotation: {0}")]
    LoadAnnotation(#[source] LabelError),

    #[error("unable to decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unable to write image '{}': {source}", path.display())]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unable to write annotation: {0}")]
    WriteAnnotation(#[source] LabelError),
}

impl AugmentError {
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::LoadAnnotation(_) | Self::Decode { .. })
    }
}
