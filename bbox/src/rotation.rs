use super::{Point, HW, TLBR};

/// Floating noise tolerated when snapping a rotated extent to whole pixels.
const EXTENT_EPSILON: f64 = 1e-6;

/// Rotates `point` about `origin` by `-angle` radians.
///
/// In pixel space, where y grows downwards, a positive `angle` turns the
/// point counter-clockwise on screen.
pub fn rotate_point(point: Point<f64>, origin: Point<f64>, angle: f64) -> Point<f64> {
    let (sin, cos) = (-angle).sin_cos();
    let px = point.x - origin.x;
    let py = point.y - origin.y;

    Point {
        x: px * cos - py * sin + origin.x,
        y: px * sin + py * cos + origin.y,
    }
}

/// Axis-aligned bounding box of four points.
pub fn aabb_of(points: &[Point<f64>; 4]) -> TLBR<f64> {
    let [first, rest @ ..] = points;
    let init = TLBR {
        t: first.y,
        l: first.x,
        b: first.y,
        r: first.x,
    };

    rest.iter().fold(init, |aabb, point| TLBR {
        t: aabb.t.min(point.y),
        l: aabb.l.min(point.x),
        b: aabb.b.max(point.y),
        r: aabb.r.max(point.x),
    })
}

/// Size of the canvas that holds a `width` x `height` image rotated by
/// `angle` radians without cutting off its corners.
pub fn rotated_extent(width: u32, height: u32, angle: f64) -> HW<u32> {
    let (sin, cos) = angle.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let width = width as f64;
    let height = height as f64;

    let snap = |extent: f64| (extent - EXTENT_EPSILON).ceil().max(0.0) as u32;

    HW {
        h: snap(width * sin + height * cos),
        w: snap(width * cos + height * sin),
    }
}

/// Offset that centers `size` pixels within `extent` pixels, rounded
/// towards negative infinity.
pub fn centering_offset(size: u32, extent: u32) -> i64 {
    (extent as i64 - size as i64).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectNum;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI};

    #[test]
    fn rotate_point_quarter_turn() {
        let origin = Point { x: 50.0, y: 50.0 };

        // right of the center moves above it
        let p = rotate_point(Point { x: 60.0, y: 50.0 }, origin, FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 40.0, epsilon = 1e-9);

        let p = rotate_point(Point { x: 40.0, y: 40.0 }, origin, FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_point_zero_and_half_turn() {
        let origin = Point { x: 3.0, y: -2.0 };
        let point = Point { x: 7.5, y: 1.25 };

        let same = rotate_point(point, origin, 0.0);
        assert_eq!(same, point);

        let opposite = rotate_point(point, origin, PI);
        assert_abs_diff_eq!(opposite.x, -1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(opposite.y, -5.25, epsilon = 1e-9);
    }

    #[test]
    fn aabb_of_points() {
        let aabb = aabb_of(&[
            Point { x: 5.0, y: 1.0 },
            Point { x: -2.0, y: 3.0 },
            Point { x: 4.0, y: 9.0 },
            Point { x: 0.0, y: -4.0 },
        ]);
        assert_eq!(aabb.ltrb(), [-2.0, -4.0, 5.0, 9.0]);
    }

    #[test]
    fn rotated_extent_snaps_right_angles() {
        assert_eq!(rotated_extent(640, 480, 0.0), HW { h: 480, w: 640 });
        assert_eq!(rotated_extent(640, 480, FRAC_PI_2), HW { h: 640, w: 480 });
        assert_eq!(rotated_extent(640, 480, -FRAC_PI_2), HW { h: 640, w: 480 });
        assert_eq!(rotated_extent(0, 0, FRAC_PI_6), HW { h: 0, w: 0 });
    }

    #[test]
    fn centering_offset_rounds_down() {
        assert_eq!(centering_offset(100, 137), 18);
        assert_eq!(centering_offset(100, 100), 0);
        assert_eq!(centering_offset(640, 480), -80);
        assert_eq!(centering_offset(5, 2), -2);
    }

    #[test]
    fn rotated_extent_grows_for_oblique_angles() {
        let HW { h, w } = rotated_extent(100, 100, FRAC_PI_6);
        // 100 * (cos 30° + sin 30°) = 136.6
        assert_eq!((h, w), (137, 137));
    }
}
