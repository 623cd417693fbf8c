use super::{Point, Rect};
use crate::{common::*, Transform};

/// Bounding box in TLBR format.
///
/// Boxes read from annotation files or produced by the legacy flip may be
/// inverted, so ordering is only checked by [Rect::try_from_tlbr].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TLBR<T> {
    pub(crate) t: T,
    pub(crate) l: T,
    pub(crate) b: T,
    pub(crate) r: T,
}

impl<T> TLBR<T> {
    /// Builds a box from `[xmin, ymin, xmax, ymax]` without checking ordering.
    pub fn from_ltrb(ltrb: [T; 4]) -> Self {
        let [l, t, r, b] = ltrb;
        Self { t, l, b, r }
    }
}

impl<T> TLBR<T>
where
    T: Copy,
{
    /// Corner points in the order top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point<T>; 4] {
        let Self { t, l, b, r } = *self;
        [
            Point { x: l, y: t },
            Point { x: r, y: t },
            Point { x: l, y: b },
            Point { x: r, y: b },
        ]
    }
}

impl<T> TLBR<T>
where
    T: Copy + PartialOrd,
{
    /// Sorts both coordinate pairs so that `t <= b` and `l <= r`.
    pub fn normalized(&self) -> Self {
        let Self { t, l, b, r } = *self;
        let (t, b) = if t <= b { (t, b) } else { (b, t) };
        let (l, r) = if l <= r { (l, r) } else { (r, l) };
        Self { t, l, b, r }
    }
}

impl<T> TLBR<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        TLBR {
            t: self.t * transform.sy + transform.ty,
            l: self.l * transform.sx + transform.tx,
            b: self.b * transform.sy + transform.ty,
            r: self.r * transform.sx + transform.tx,
        }
    }
}

impl<T> Rect for TLBR<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn t(&self) -> Self::Type {
        self.t
    }

    fn l(&self) -> Self::Type {
        self.l
    }

    fn b(&self) -> Self::Type {
        self.b
    }

    fn r(&self) -> Self::Type {
        self.r
    }

    fn h(&self) -> Self::Type {
        self.b - self.t
    }

    fn w(&self) -> Self::Type {
        self.r - self.l
    }

    fn try_from_tlbr(tlbr: [Self::Type; 4]) -> Result<Self> {
        let [t, l, b, r] = tlbr;
        ensure!(b >= t && r >= l, "b >= t and r >= l must hold");

        Ok(Self { t, l, b, r })
    }
}
