//! The random horizontal flip.

use super::{check_prob, DataRecord};
use crate::{common::*, image_ops};
use bbox::{remap_flip, remap_flip_unordered};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomFlipInit {
    pub prob: R64,
    /// Reflect box x coordinates in place, leaving `xmin > xmax`.
    pub keep_inversion: bool,
}

impl RandomFlipInit {
    pub fn build(self) -> Result<RandomFlip> {
        let Self {
            prob,
            keep_inversion,
        } = self;

        Ok(RandomFlip {
            prob: check_prob("flip probability", prob)?,
            keep_inversion,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RandomFlip {
    prob: f64,
    keep_inversion: bool,
}

impl RandomFlip {
    pub fn forward<R>(&self, rng: &mut R, record: DataRecord) -> DataRecord
    where
        R: Rng,
    {
        if !rng.gen_bool(self.prob) {
            return record;
        }

        let DataRecord { image, bboxes } = record;
        let width = image.width() as i64;
        debug!("flip {}x{} image", image.width(), image.height());

        let bboxes = if self.keep_inversion {
            remap_flip_unordered(&bboxes, width)
        } else {
            remap_flip(&bboxes, width)
        };

        DataRecord {
            image: image_ops::flip(&image),
            bboxes,
        }
    }
}
