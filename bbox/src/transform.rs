use super::TLBR;
use crate::common::*;

/// An axis-aligned affine map `x' = sx * x + tx`, `y' = sy * y + ty`.
///
/// Covers the box remapping of horizontal flips and crops. Rotations do not
/// keep boxes axis-aligned and go through [crate::remap_rotate] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sy: T,
    pub sx: T,
    pub ty: T,
    pub tx: T,
}

impl<T> Transform<T>
where
    T: Copy + Num,
{
    /// Mirrors pixel columns of an image `width` pixels wide, column `x`
    /// landing on `width - x - 1`.
    pub fn horizontal_flip(width: T) -> Self {
        Self {
            sy: T::one(),
            sx: T::zero() - T::one(),
            ty: T::zero(),
            tx: width - T::one(),
        }
    }

    pub fn translation(dx: T, dy: T) -> Self {
        Self {
            sy: T::one(),
            sx: T::one(),
            ty: dy,
            tx: dx,
        }
    }
}

impl<T> Mul<&TLBR<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = TLBR<T>;

    fn mul(self, rhs: &TLBR<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T> Mul<&Transform<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = Transform<T>;

    fn mul(self, rhs: &Transform<T>) -> Self::Output {
        Transform {
            sx: self.sx * rhs.sx,
            sy: self.sy * rhs.sy,
            tx: rhs.tx * self.sx + self.tx,
            ty: rhs.ty * self.sy + self.ty,
        }
    }
}
