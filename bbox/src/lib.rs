//! Pixel bounding box types and the geometry used to keep boxes aligned
//! with flipped, rotated and cropped images.

mod common;

pub use transform::*;
mod transform;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub use hw::*;
pub mod hw;

pub use point::*;
pub mod point;

pub use rotation::*;
pub mod rotation;

pub use remap::*;
pub mod remap;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
