//! Seed markers drawn on top of the classified canvas.
//!
//! Markers are always round: inclusion is `dx² + dy² <= r²` whatever exponent was used for
//! classification. They must be drawn after rasterization, which overwrites every pixel.

use crate::{
  canvas::{Canvas, Pixel},
  geometry::{self, Seed, P2}
};

#[cfg(test)] mod tests;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// Filled disk of integer radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Marker {
  pub center: P2,
  pub radius: u32,
  pub color: Pixel
}

impl Marker {
  pub fn contains(&self, pixel: P2) -> bool {
    let dx = pixel.x.abs_diff(self.center.x) as u64;
    let dy = pixel.y.abs_diff(self.center.y) as u64;
    let r = self.radius as u64;
    dx * dx + dy * dy <= r * r
  }
}

impl Draw<Canvas> for Marker {
  /// Parts of the disk outside of the canvas are skipped.
  fn draw(&self, canvas: &mut Canvas) {
    let bounding_box = match geometry::clipped_square(self.center, self.radius, canvas.size()) {
      Some(x) => x,
      None => return // disk has no intersection with the canvas at all
    };
    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| P2::new(x, y))
      .filter(|&pixel| self.contains(pixel))
      .for_each(|pixel| { canvas.put(pixel.x, pixel.y, self.color); });
  }
}

/// Stamp a disk of `radius` at every seed. Radius `0` marks the seed pixel only.
pub fn draw_markers(canvas: &mut Canvas, seeds: &[Seed], radius: u32, color: Pixel) {
  seeds.iter()
    .map(|seed| Marker { center: seed.position, radius, color })
    .for_each(|marker| marker.draw(canvas));
}
