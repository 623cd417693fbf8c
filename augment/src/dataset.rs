//! Dataset traversal and output writing.

use crate::{
    common::*,
    config::{DatasetConfig, OutputConfig},
    error::AugmentError,
    image_ops,
    processor::{DataRecord, Pipeline},
};
use std::io;

/// Suffix replacing the image extension to form the annotation path.
pub const ANNOTATION_SUFFIX: &str = "gt_data.txt";

/// Counters of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AugmentReport {
    /// Source images whose iterations all ran.
    pub images_processed: usize,
    /// Source images skipped for missing or malformed input.
    pub images_skipped: usize,
    /// Iterations dropped because the pipeline failed.
    pub iterations_failed: usize,
    /// Image and annotation pairs written.
    pub outputs_written: usize,
}

impl fmt::Display for AugmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} images processed, {} skipped, {} iterations failed, {} outputs written",
            self.images_processed,
            self.images_skipped,
            self.iterations_failed,
            self.outputs_written
        )
    }
}

/// Generates augmented copies of every image in a directory.
#[derive(Debug, Clone)]
pub struct DatasetAugmenter {
    pipeline: Pipeline,
    output: OutputConfig,
}

impl DatasetAugmenter {
    pub fn new(pipeline: Pipeline, output: OutputConfig) -> Result<Self> {
        ensure!(
            (1..=100).contains(&output.jpeg_quality),
            "jpeg_quality must be within [1, 100], but get {}",
            output.jpeg_quality
        );
        Ok(Self { pipeline, output })
    }

    /// Augments every `*.jpg` image under `input_dir`, in path order.
    pub fn run<R>(
        &self,
        dataset: &DatasetConfig,
        rng: &mut R,
    ) -> Result<AugmentReport, AugmentError>
    where
        R: Rng,
    {
        let DatasetConfig {
            input_dir,
            output_dir,
            num_augmentations,
        } = dataset;

        if !output_dir.is_dir() {
            return Err(AugmentError::MissingOutputDir {
                path: output_dir.to_owned(),
            });
        }
        if let Some(preview_dir) = &self.output.preview_dir {
            if !preview_dir.is_dir() {
                return Err(AugmentError::MissingPreviewDir {
                    path: preview_dir.to_owned(),
                });
            }
        }

        let image_files = list_images(input_dir)?;
        info!(
            "found {} images in '{}'",
            image_files.len(),
            input_dir.display()
        );

        let mut report = AugmentReport::default();
        for image_file in image_files {
            let result = self.augment_image(
                &image_file,
                output_dir,
                *num_augmentations,
                rng,
                &mut report,
            );
            match result {
                Ok(()) => report.images_processed += 1,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!("skip '{}': {}", image_file.display(), err);
                    report.images_skipped += 1;
                }
            }
        }

        info!("{}", report);
        Ok(report)
    }

    fn augment_image<R>(
        &self,
        image_file: &Path,
        output_dir: &Path,
        num_augmentations: usize,
        rng: &mut R,
        report: &mut AugmentReport,
    ) -> Result<(), AugmentError>
    where
        R: Rng,
    {
        let bboxes =
            label::load(annotation_path(image_file)).map_err(AugmentError::LoadAnnotation)?;
        let image = image_ops::decode(image_file).map_err(|source| AugmentError::Decode {
            path: image_file.to_owned(),
            source,
        })?;
        info!(
            "augment '{}' ({} boxes) {} times",
            image_file.display(),
            bboxes.len(),
            num_augmentations
        );

        let stem = image_file
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or_default();

        for index in 0..num_augmentations {
            let input = DataRecord {
                image: image.clone(),
                bboxes: bboxes.clone(),
            };
            let output = match self.pipeline.forward(rng, input) {
                Ok(output) => output,
                Err(err) => {
                    warn!(
                        "augmentation {} of '{}' failed: {:#}",
                        index,
                        image_file.display(),
                        err
                    );
                    report.iterations_failed += 1;
                    continue;
                }
            };

            let name = output_name(&stem, index);
            self.write_output(&output, output_dir, &name)?;
            report.outputs_written += 1;
        }

        Ok(())
    }

    fn write_output(
        &self,
        record: &DataRecord,
        output_dir: &Path,
        name: &str,
    ) -> Result<(), AugmentError> {
        let DataRecord { image, bboxes } = record;
        let quality = self.output.jpeg_quality;

        let image_file = output_dir.join(format!("{}.jpg", name));
        image_ops::encode(image, &image_file, quality).map_err(|source| {
            AugmentError::WriteImage {
                path: image_file.clone(),
                source,
            }
        })?;

        let label_file = output_dir.join(format!("{}.{}", name, ANNOTATION_SUFFIX));
        label::save(&label_file, bboxes).map_err(AugmentError::WriteAnnotation)?;

        if let Some(preview_dir) = &self.output.preview_dir {
            let preview_file = preview_dir.join(format!("{}.jpg", name));
            let preview = image_ops::draw_boxes(image, bboxes);
            image_ops::encode(&preview, &preview_file, quality).map_err(|source| {
                AugmentError::WriteImage {
                    path: preview_file.clone(),
                    source,
                }
            })?;
        }

        debug!("wrote '{}'", image_file.display());
        Ok(())
    }
}

/// Lists the `*.jpg` files directly under `dir`, sorted by path.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, AugmentError> {
    let input_error = |source| AugmentError::InputDir {
        path: dir.to_owned(),
        source,
    };

    if !dir.is_dir() {
        return Err(input_error(io::Error::new(
            io::ErrorKind::NotFound,
            "not a directory",
        )));
    }

    let pattern = format!("{}/*.jpg", glob::Pattern::escape(&dir.to_string_lossy()));
    let paths = glob::glob(&pattern)
        .map_err(|err| input_error(io::Error::new(io::ErrorKind::InvalidInput, err)))?;

    let mut image_files = paths
        .map(|result| result.map_err(|err| input_error(err.into_error())))
        .collect::<Result<Vec<_>, _>>()?;
    image_files.sort();

    Ok(image_files)
}

/// Path of the annotation file belonging to `image_file`.
pub fn annotation_path(image_file: &Path) -> PathBuf {
    image_file.with_extension(ANNOTATION_SUFFIX)
}

/// Base name of the `index`-th augmented copy of an image named `stem`.
pub fn output_name(stem: &str, index: usize) -> String {
    format!("{}_aug{:03}", stem, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_path_replaces_last_extension() {
        assert_eq!(
            annotation_path(Path::new("data/frame.01.jpg")),
            Path::new("data/frame.01.gt_data.txt")
        );
        assert_eq!(
            annotation_path(Path::new("cat.jpg")),
            Path::new("cat.gt_data.txt")
        );
    }

    #[test]
    fn output_name_pads_index() {
        assert_eq!(output_name("cat", 0), "cat_aug000");
        assert_eq!(output_name("cat", 42), "cat_aug042");
        assert_eq!(output_name("cat", 1234), "cat_aug1234");
    }

    #[test]
    fn list_images_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.jpg", "c.png", "a.gt_data.txt", "d.jpeg"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let names: Vec<_> = list_images(dir.path())
            .unwrap()
            .into_iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn list_images_fails_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_images(&dir.path().join("missing"));
        assert!(matches!(result, Err(AugmentError::InputDir { .. })));
    }
}
