//! The random crop.

use super::{check_prob, DataRecord};
use crate::{common::*, image_ops};
use bbox::remap_crop;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomCropInit {
    pub prob: R64,
}

impl RandomCropInit {
    pub fn build(self) -> Result<RandomCrop> {
        let Self { prob } = self;

        Ok(RandomCrop {
            prob: check_prob("crop probability", prob)?,
        })
    }
}

/// Crops a window whose left and top edges lie in the first quarter of the
/// image and whose right and bottom edges lie in the last quarter.
#[derive(Debug, Clone)]
pub struct RandomCrop {
    prob: f64,
}

impl RandomCrop {
    pub fn forward<R>(&self, rng: &mut R, record: DataRecord) -> DataRecord
    where
        R: Rng,
    {
        if !rng.gen_bool(self.prob) {
            return record;
        }

        let (width, height) = record.image.dimensions();
        let (w, h) = (width as i64, height as i64);
        let l = rng.gen_range(0..=w / 4);
        let r = rng.gen_range(w * 3 / 4..=w - 1);
        let t = rng.gen_range(0..=h / 4);
        let b = rng.gen_range(h * 3 / 4..=h - 1);

        if r <= l || b <= t {
            debug!("skip crop of {}x{} image", width, height);
            return record;
        }

        let DataRecord { image, bboxes } = record;
        let (new_w, new_h) = (r - l, b - t);
        debug!(
            "crop {}x{} window at ({}, {}) from {}x{} image",
            new_w, new_h, l, t, width, height
        );

        let window = TLBR::from_ltrb([l as u32, t as u32, r as u32, b as u32]);
        DataRecord {
            image: image_ops::crop(&image, &window),
            bboxes: remap_crop(&bboxes, l, t, new_w, new_h),
        }
    }
}
