//! Augmentation program configuration format.

use crate::{common::*, processor::PipelineInit};

/// The main configuration, loadable from a JSON5 file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineInit,
    pub output: OutputConfig,
    /// Seed of the random generator. A fresh entropy seed is used if unset.
    pub seed: Option<u64>,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

/// Output file options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JPEG quality of augmented images, from 1 to 100.
    pub jpeg_quality: u8,
    /// If set, images with their boxes drawn are saved to this existing directory.
    pub preview_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: 75,
            preview_dir: None,
        }
    }
}

/// The dataset to augment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetConfig {
    /// Directory of `*.jpg` images with sibling `.gt_data.txt` annotations.
    pub input_dir: PathBuf,
    /// Existing directory receiving augmented images and annotations.
    pub output_dir: PathBuf,
    /// Augmented copies generated per source image.
    pub num_augmentations: usize,
}
