//! .
//!
//! The origin of the coordinate system is the top-left corner of the canvas, `x` grows to the
//! right and `y` grows downwards. All coordinates are integer pixel indices.

use {
  euclid::{Box2D, Point2D, Size2D},
  crate::canvas::Pixel
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<u32, PixelSpace>;
pub type Dimensions = Size2D<u32, PixelSpace>;

/// A designated point whose region of influence is rasterized.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Seed {
  pub position: P2,
  pub color: Pixel
}

impl Seed {
  pub fn new(x: u32, y: u32, color: Pixel) -> Self {
    Self { position: P2::new(x, y), color }
  }

  /// Absolute horizontal and vertical distance to `pixel`.
  #[inline]
  pub fn delta(&self, pixel: P2) -> (u32, u32) {
    (
      pixel.x.abs_diff(self.position.x),
      pixel.y.abs_diff(self.position.y)
    )
  }
}

pub fn contains(size: Dimensions, point: P2) -> bool {
  point.x < size.width && point.y < size.height
}

/// Square of side `2 * radius + 1` around `center`, clipped to the canvas.
/// `None` when nothing of it is visible.
pub fn clipped_square(center: P2, radius: u32, size: Dimensions) -> Option<Box2D<u32, PixelSpace>> {
  let square = Box2D::new(
    P2::new(center.x.saturating_sub(radius), center.y.saturating_sub(radius)),
    P2::new(
      center.x.saturating_add(radius).saturating_add(1),
      center.y.saturating_add(radius).saturating_add(1)
    )
  );
  square.intersection(&Box2D::from_size(size))
}
