//! The random rotation with canvas expansion.

use super::{check_prob, check_range, DataRecord};
use crate::{common::*, image_ops};
use bbox::{centering_offset, remap_rotate, remap_translate};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomRotateInit {
    pub prob: R64,
    /// Inclusive range of the counter-clockwise rotation in degrees.
    pub degrees: (R64, R64),
}

impl RandomRotateInit {
    pub fn build(self) -> Result<RandomRotate> {
        let Self { prob, degrees } = self;

        Ok(RandomRotate {
            prob: check_prob("rotate probability", prob)?,
            degrees: check_range("rotation_degrees", degrees)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RandomRotate {
    prob: f64,
    degrees: (f64, f64),
}

impl RandomRotate {
    pub fn forward<R>(&self, rng: &mut R, record: DataRecord) -> DataRecord
    where
        R: Rng,
    {
        if !rng.gen_bool(self.prob) {
            return record;
        }

        let (lo, up) = self.degrees;
        let degrees = rng.gen_range(lo..=up);
        let angle = degrees.to_radians();

        let DataRecord { image, bboxes } = record;
        let (width, height) = image.dimensions();
        let image = image_ops::rotate(&image, angle);
        let (new_w, new_h) = image.dimensions();
        debug!(
            "rotate {}x{} image by {:.2} degrees onto {}x{} canvas",
            width, height, degrees, new_w, new_h
        );

        // boxes follow the source onto the expanded canvas before turning
        let bboxes = remap_translate(
            &bboxes,
            centering_offset(width, new_w),
            centering_offset(height, new_h),
        );
        let bboxes = remap_rotate(&bboxes, angle, new_w as i64, new_h as i64);

        DataRecord { image, bboxes }
    }
}
