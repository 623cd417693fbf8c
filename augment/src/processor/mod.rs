//! Randomized transform stages and the pipeline chaining them.

pub mod color_jitter;
pub mod pipeline;
pub mod random_crop;
pub mod random_flip;
pub mod random_rotate;

pub use color_jitter::*;
pub use pipeline::*;
pub use random_crop::*;
pub use random_flip::*;
pub use random_rotate::*;

use crate::common::*;

/// An image with its boxes, handed from stage to stage.
///
/// Stages consume a record and return a new one. `bboxes[i]` always
/// annotates the same object as the i-th box of the source annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    pub image: RgbImage,
    pub bboxes: Vec<PixelBox>,
}

fn check_prob(name: &str, prob: R64) -> Result<f64> {
    let prob = prob.raw();
    ensure!(
        (0.0..=1.0).contains(&prob),
        "{} must be within [0, 1], but get {}",
        name,
        prob
    );
    Ok(prob)
}

fn check_range(name: &str, (lo, up): (R64, R64)) -> Result<(f64, f64)> {
    ensure!(lo <= up, "{} min must not exceed {} max", name, name);
    Ok((lo.raw(), up.raw()))
}
