//! Image operations backing the pipeline stages.

use crate::common::*;
use bbox::{centering_offset, rotated_extent};
use image::{codecs::jpeg::JpegEncoder, imageops, ImageResult};
use imageproc::{
    drawing::draw_hollow_rect_mut,
    geometric_transformations::{warp_into, Interpolation, Projection},
    rect::Rect as DrawRect,
};
use std::{
    fs::File,
    io::{BufWriter, Write as _},
};

/// Fill color of canvas regions not covered by a rotated image.
const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Outline color of previewed boxes.
const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Photometric adjustments understood by [enhance].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enhance {
    Brightness,
    Contrast,
    Saturation,
}

impl fmt::Display for Enhance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
        };
        write!(f, "{}", name)
    }
}

pub fn decode(path: &Path) -> ImageResult<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Saves `image` as a JPEG file, replacing any existing file.
pub fn encode(image: &RgbImage, path: &Path, quality: u8) -> ImageResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    JpegEncoder::new_with_quality(&mut writer, quality).encode_image(image)?;
    writer.flush()?;
    Ok(())
}

/// Blends the image with a degenerate version of itself.
///
/// The degenerate image is black for brightness, a uniform gray at the
/// mean luma for contrast, and the per-pixel luma for saturation. A factor
/// of 0 yields the degenerate image, 1 the original, and larger factors
/// extrapolate away from the degenerate image.
pub fn enhance(image: &RgbImage, channel: Enhance, factor: f64) -> RgbImage {
    match channel {
        Enhance::Brightness => blend(image, factor, |_| 0.0),
        Enhance::Contrast => {
            let mean = mean_luma(image);
            blend(image, factor, |_| mean)
        }
        Enhance::Saturation => blend(image, factor, luma),
    }
}

pub fn flip(image: &RgbImage) -> RgbImage {
    imageops::flip_horizontal(image)
}

/// Rotates the image counter-clockwise by `angle` radians.
///
/// The canvas grows to [rotated_extent] so no corner is cut off. The source
/// is placed at [centering_offset] on the canvas and turned about the
/// canvas center.
pub fn rotate(image: &RgbImage, angle: f64) -> RgbImage {
    let (width, height) = image.dimensions();
    let extent = rotated_extent(width, height, angle);
    let (new_w, new_h) = (extent.w(), extent.h());

    let dx = centering_offset(width, new_w) as f32;
    let dy = centering_offset(height, new_h) as f32;
    let cx = new_w as f32 / 2.0;
    let cy = new_h as f32 / 2.0;

    let projection = Projection::translate(dx - cx, dy - cy)
        .and_then(Projection::rotate((-angle) as f32))
        .and_then(Projection::translate(cx, cy));

    let mut output = RgbImage::from_pixel(new_w, new_h, BACKGROUND);
    warp_into(
        image,
        &projection,
        Interpolation::Bilinear,
        BACKGROUND,
        &mut output,
    );
    output
}

/// Cuts out the half-open window `[l, r) x [t, b)`.
pub fn crop(image: &RgbImage, window: &TLBR<u32>) -> RgbImage {
    imageops::crop_imm(image, window.l(), window.t(), window.w(), window.h()).to_image()
}

/// Draws the outline of every box onto a copy of the image.
pub fn draw_boxes(image: &RgbImage, bboxes: &[PixelBox]) -> RgbImage {
    let mut canvas = image.clone();
    bboxes.iter().map(TLBR::normalized).for_each(|bbox| {
        let [l, t, r, b] = bbox.ltrb();
        let rect =
            DrawRect::at(l as i32, t as i32).of_size((r - l + 1) as u32, (b - t + 1) as u32);
        draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);
    });
    canvas
}

/// ITU-R 601-2 luma of a pixel, rounded to an integer level.
fn luma(pixel: &Rgb<u8>) -> f64 {
    let Rgb([r, g, b]) = *pixel;
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    (weighted as f64 / 1000.0).round()
}

fn mean_luma(image: &RgbImage) -> f64 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: f64 = image.pixels().map(luma).sum();
    (sum / count as f64).round()
}

fn blend<F>(image: &RgbImage, factor: f64, degenerate: F) -> RgbImage
where
    F: Fn(&Rgb<u8>) -> f64,
{
    let mut output = image.clone();
    output.pixels_mut().for_each(|pixel| {
        let base = degenerate(pixel);
        pixel.0.iter_mut().for_each(|channel| {
            let value = base + factor * (*channel as f64 - base);
            *channel = value.round().clamp(0.0, 255.0) as u8;
        });
    });
    output
}
