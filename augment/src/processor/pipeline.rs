//! The full augmentation pipeline.

use super::*;
use crate::common::*;

/// Pipeline options. Probabilities gate the geometric stages; the
/// photometric stages always run with a factor drawn from their range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineInit {
    /// Probability of a horizontal flip.
    pub flip: R64,
    /// Probability of a rotation.
    pub rotate: R64,
    /// Probability of a crop.
    pub crop: R64,
    /// Inclusive rotation range in degrees, counter-clockwise positive.
    pub rotation_degrees: (R64, R64),
    pub saturation: (R64, R64),
    pub contrast: (R64, R64),
    pub brightness: (R64, R64),
    /// Write flipped boxes with `xmin > xmax` as older releases did.
    pub keep_flip_inversion: bool,
}

impl Default for PipelineInit {
    fn default() -> Self {
        Self {
            flip: r64(0.5),
            rotate: r64(0.25),
            crop: r64(0.25),
            rotation_degrees: (r64(-30.0), r64(30.0)),
            saturation: (r64(0.5), r64(1.5)),
            contrast: (r64(0.5), r64(1.5)),
            brightness: (r64(0.5), r64(1.5)),
            keep_flip_inversion: false,
        }
    }
}

impl PipelineInit {
    pub fn build(self) -> Result<Pipeline> {
        let Self {
            flip,
            rotate,
            crop,
            rotation_degrees,
            saturation,
            contrast,
            brightness,
            keep_flip_inversion,
        } = self;

        let random_flip = RandomFlipInit {
            prob: flip,
            keep_inversion: keep_flip_inversion,
        }
        .build()?;
        let random_rotate = RandomRotateInit {
            prob: rotate,
            degrees: rotation_degrees,
        }
        .build()?;
        let random_crop = RandomCropInit { prob: crop }.build()?;
        let color_jitter = ColorJitterInit {
            saturation,
            contrast,
            brightness,
        }
        .build()?;

        Ok(Pipeline {
            random_flip,
            random_rotate,
            random_crop,
            color_jitter,
        })
    }
}

/// Runs flip, rotate, crop and the color jitter in this order.
#[derive(Debug, Clone)]
pub struct Pipeline {
    random_flip: RandomFlip,
    random_rotate: RandomRotate,
    random_crop: RandomCrop,
    color_jitter: ColorJitter,
}

impl Pipeline {
    pub fn forward<R>(&self, rng: &mut R, record: DataRecord) -> Result<DataRecord>
    where
        R: Rng,
    {
        let (width, height) = record.image.dimensions();
        ensure!(
            width > 0 && height > 0,
            "cannot augment an empty {}x{} image",
            width,
            height
        );

        let record = self.random_flip.forward(rng, record);
        let record = self.random_rotate.forward(rng, record);
        let record = self.random_crop.forward(rng, record);
        let record = self.color_jitter.forward(rng, record);

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn neutral() -> PipelineInit {
        PipelineInit {
            flip: r64(0.0),
            rotate: r64(0.0),
            crop: r64(0.0),
            rotation_degrees: (r64(0.0), r64(0.0)),
            saturation: (r64(1.0), r64(1.0)),
            contrast: (r64(1.0), r64(1.0)),
            brightness: (r64(1.0), r64(1.0)),
            keep_flip_inversion: false,
        }
    }

    fn record() -> DataRecord {
        DataRecord {
            image: RgbImage::from_fn(100, 100, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8])),
            bboxes: vec![TLBR::from_ltrb([10, 10, 90, 90])],
        }
    }

    #[test]
    fn pipeline_defaults() {
        let init = PipelineInit::default();
        assert_eq!(init.flip, r64(0.5));
        assert_eq!(init.rotate, r64(0.25));
        assert_eq!(init.crop, r64(0.25));
        assert_eq!(init.rotation_degrees, (r64(-30.0), r64(30.0)));
        assert_eq!(init.brightness, (r64(0.5), r64(1.5)));
        assert!(init.build().is_ok());
    }

    #[test]
    fn neutral_pipeline_is_identity() {
        let pipeline = neutral().build().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(pipeline.forward(&mut rng, record()).unwrap(), record());
    }

    #[test]
    fn pipeline_rejects_empty_image() {
        let pipeline = PipelineInit::default().build().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let empty = DataRecord {
            image: RgbImage::new(0, 5),
            bboxes: vec![],
        };
        assert!(pipeline.forward(&mut rng, empty).is_err());
    }

    #[test]
    fn pipeline_is_reproducible_with_seed() {
        let pipeline = PipelineInit {
            flip: r64(1.0),
            rotate: r64(1.0),
            crop: r64(1.0),
            ..PipelineInit::default()
        }
        .build()
        .unwrap();

        let first = pipeline
            .forward(&mut StdRng::seed_from_u64(5), record())
            .unwrap();
        let second = pipeline
            .forward(&mut StdRng::seed_from_u64(5), record())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pipeline_preserves_box_count() {
        let pipeline = PipelineInit {
            flip: r64(1.0),
            rotate: r64(1.0),
            crop: r64(1.0),
            ..PipelineInit::default()
        }
        .build()
        .unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let mut input = record();
        input.bboxes.push(TLBR::from_ltrb([0, 0, 5, 5]));
        input.bboxes.push(TLBR::from_ltrb([95, 95, 99, 99]));

        for _ in 0..10 {
            let DataRecord { image, bboxes } = pipeline.forward(&mut rng, input.clone()).unwrap();
            let (w, h) = image.dimensions();
            assert_eq!(bboxes.len(), 3);
            for bbox in bboxes {
                let [l, t, r, b] = bbox.ltrb();
                assert!(0 <= l && l <= r && r < w as i64);
                assert!(0 <= t && t <= b && b < h as i64);
            }
        }
    }

    #[test]
    fn stage_options_compare_and_hash() {
        let init = RandomRotateInit {
            prob: r64(0.5),
            degrees: (r64(-5.0), r64(5.0)),
        };
        let set: HashSet<_> = [init.clone(), init].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn pipeline_rejects_out_of_range_probability() {
        let init = PipelineInit {
            rotate: r64(1.25),
            ..PipelineInit::default()
        };
        assert!(init.build().is_err());
    }
}
