//! Box remapping for geometric image transforms.
//!
//! Every function maps the i-th input box to the i-th output box, so box
//! count and order survive every stage.

use super::{aabb_of, rotate_point, Point, Transform, TLBR};

/// Box in integer pixel coordinates.
pub type PixelBox = TLBR<i64>;

/// Saturating clamp of `value` into `[lo, hi]`.
///
/// Unlike [Ord::clamp] this does not panic when `lo > hi`; the result is
/// then meaningless and callers must keep `lo <= hi`.
pub fn clamp<T>(value: T, lo: T, hi: T) -> T
where
    T: PartialOrd,
{
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Clamps every coordinate into `[0, width - 1] x [0, height - 1]`.
pub fn clamp_box(bbox: &PixelBox, width: i64, height: i64) -> PixelBox {
    let TLBR { t, l, b, r } = *bbox;
    TLBR {
        t: clamp(t, 0, height - 1),
        l: clamp(l, 0, width - 1),
        b: clamp(b, 0, height - 1),
        r: clamp(r, 0, width - 1),
    }
}

/// Remaps boxes for an image mirrored left to right.
///
/// A box `(xmin, ymin, xmax, ymax)` becomes
/// `(width - xmax - 1, ymin, width - xmin - 1, ymax)`.
pub fn remap_flip(bboxes: &[PixelBox], width: i64) -> Vec<PixelBox> {
    remap_flip_unordered(bboxes, width)
        .iter()
        .map(TLBR::normalized)
        .collect()
}

/// Remaps boxes for an image mirrored left to right, reflecting each x
/// coordinate in place.
///
/// The result has `xmin > xmax` for every box that had `xmin < xmax`. This
/// reproduces annotation files written by older releases of the tool.
pub fn remap_flip_unordered(bboxes: &[PixelBox], width: i64) -> Vec<PixelBox> {
    let flip = Transform::horizontal_flip(width);
    bboxes.iter().map(|bbox| &flip * bbox).collect()
}

/// Shifts boxes by `(dx, dy)` without clamping.
pub fn remap_translate(bboxes: &[PixelBox], dx: i64, dy: i64) -> Vec<PixelBox> {
    let shift = Transform::translation(dx, dy);
    bboxes.iter().map(|bbox| &shift * bbox).collect()
}

/// Remaps boxes for an image rotated by `angle` radians onto a canvas of
/// `new_width` x `new_height` pixels.
///
/// The corners of each box are rotated about the center of the new canvas,
/// and the box is replaced by the rounded bounding box of the rotated corners,
/// clamped into the canvas.
pub fn remap_rotate(
    bboxes: &[PixelBox],
    angle: f64,
    new_width: i64,
    new_height: i64,
) -> Vec<PixelBox> {
    let origin = Point {
        x: new_width as f64 / 2.0,
        y: new_height as f64 / 2.0,
    };

    bboxes
        .iter()
        .map(|bbox| {
            let corners = bbox.corners().map(|corner| {
                let corner = Point {
                    x: corner.x as f64,
                    y: corner.y as f64,
                };
                rotate_point(corner, origin, angle)
            });
            let TLBR { t, l, b, r } = aabb_of(&corners);
            let rotated = TLBR {
                t: t.round() as i64,
                l: l.round() as i64,
                b: b.round() as i64,
                r: r.round() as i64,
            };
            clamp_box(&rotated, new_width, new_height)
        })
        .collect()
}

/// Remaps boxes for a crop whose top-left corner sits at
/// `(crop_l, crop_t)` and whose size is `new_width` x `new_height`.
pub fn remap_crop(
    bboxes: &[PixelBox],
    crop_l: i64,
    crop_t: i64,
    new_width: i64,
    new_height: i64,
) -> Vec<PixelBox> {
    remap_translate(bboxes, -crop_l, -crop_t)
        .iter()
        .map(|bbox| clamp_box(bbox, new_width, new_height))
        .collect()
}
