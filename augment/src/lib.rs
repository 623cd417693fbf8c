//! Augments object detection datasets annotated with axis-aligned boxes.
//!
//! Every source image goes through a [Pipeline](processor::Pipeline) of
//! randomized flip, rotation, crop and color stages. The boxes of its
//! `.gt_data.txt` annotation file are remapped alongside the image.

mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod image_ops;
pub mod processor;

use crate::{
    common::*,
    config::{Config, DatasetConfig},
    dataset::{AugmentReport, DatasetAugmenter},
};

/// Runs a whole augmentation job.
pub fn start(config: &Config, dataset: &DatasetConfig) -> Result<AugmentReport> {
    let Config {
        pipeline,
        output,
        seed,
    } = config;

    let pipeline = pipeline
        .clone()
        .build()
        .context("invalid pipeline configuration")?;
    let augmenter = DatasetAugmenter::new(pipeline, output.clone())?;

    let mut rng = match *seed {
        Some(seed) => {
            info!("seed random generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let report = augmenter.run(dataset, &mut rng)?;
    Ok(report)
}
