//! The random photometric distortion.

use super::{check_range, DataRecord};
use crate::{
    common::*,
    image_ops::{self, Enhance},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorJitterInit {
    pub saturation: (R64, R64),
    pub contrast: (R64, R64),
    pub brightness: (R64, R64),
}

impl ColorJitterInit {
    pub fn build(self) -> Result<ColorJitter> {
        let Self {
            saturation,
            contrast,
            brightness,
        } = self;

        let check_factor = |name, range| -> Result<_> {
            let (lo, up) = check_range(name, range)?;
            ensure!(lo >= 0.0, "{} factors must be non-negative", name);
            Ok((lo, up))
        };

        Ok(ColorJitter {
            saturation: check_factor("saturation", saturation)?,
            contrast: check_factor("contrast", contrast)?,
            brightness: check_factor("brightness", brightness)?,
        })
    }
}

/// Scales saturation, contrast and brightness in this order, each by a
/// factor drawn from its own range. Boxes pass through untouched.
#[derive(Debug, Clone)]
pub struct ColorJitter {
    saturation: (f64, f64),
    contrast: (f64, f64),
    brightness: (f64, f64),
}

impl ColorJitter {
    pub fn forward<R>(&self, rng: &mut R, record: DataRecord) -> DataRecord
    where
        R: Rng,
    {
        let DataRecord { image, bboxes } = record;
        let stages = [
            (Enhance::Saturation, self.saturation),
            (Enhance::Contrast, self.contrast),
            (Enhance::Brightness, self.brightness),
        ];

        let image = stages
            .into_iter()
            .fold(image, |image, (channel, (lo, up))| {
                let factor = rng.gen_range(lo..=up);
                debug!("scale {} by {:.3}", channel, factor);
                image_ops::enhance(&image, channel, factor)
            });

        DataRecord { image, bboxes }
    }
}
