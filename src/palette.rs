//! Seed colors.
//!
//! Entry `0` of a palette is reserved for markers; seeds cycle through the remaining entries.

use crate::{
  canvas::Pixel,
  error::{Error, Result},
  geometry::{Dimensions, P2}
};

/// The sixteen basic web colors, in their conventional order.
pub const CLASSIC: [Pixel; 16] = [
  Pixel::new(0, 0, 0),       // black
  Pixel::new(255, 255, 255), // white
  Pixel::new(255, 0, 0),     // red
  Pixel::new(0, 255, 0),     // lime
  Pixel::new(0, 0, 255),     // blue
  Pixel::new(255, 255, 0),   // yellow
  Pixel::new(0, 255, 255),   // cyan
  Pixel::new(255, 0, 255),   // magenta
  Pixel::new(192, 192, 192), // silver
  Pixel::new(128, 128, 128), // gray
  Pixel::new(128, 0, 0),     // maroon
  Pixel::new(128, 128, 0),   // olive
  Pixel::new(0, 128, 0),     // green
  Pixel::new(128, 0, 128),   // purple
  Pixel::new(0, 128, 128),   // teal
  Pixel::new(0, 0, 128),     // navy
];

/// How seeds obtain their color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Coloring {
  /// Cycle through the palette, skipping the marker entry.
  Palette,
  /// Derive the color from the seed coordinate.
  Procedural
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
  colors: Vec<Pixel>
}

impl Default for Palette {
  fn default() -> Self {
    Self::classic()
  }
}

impl Palette {
  pub fn classic() -> Self {
    Self { colors: CLASSIC.to_vec() }
  }

  /// A marker color followed by at least one seed color.
  pub fn new(colors: Vec<Pixel>) -> Result<Self> {
    if colors.len() < 2 {
      return Err(Error::config(format!(
        "palette needs a marker color and at least one seed color, got {} entries",
        colors.len()
      )));
    }
    Ok(Self { colors })
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<Pixel> {
    self.colors.get(index).copied()
  }

  pub fn marker(&self) -> Pixel {
    self.colors[0]
  }

  /// Color of the `index`-th seed: entry `1 + index mod (len - 1)`.
  pub fn seed_color(&self, index: usize) -> Pixel {
    self.colors[1 + index % (self.colors.len() - 1)]
  }

  pub fn color_for(&self, coloring: Coloring, index: usize, position: P2, size: Dimensions) -> Pixel {
    match coloring {
      Coloring::Palette => self.seed_color(index),
      Coloring::Procedural => procedural(position, size)
    }
  }
}

/// Linear rescale of `value` from `[0, max]` into `[0, 255]`.
fn rescale(value: u32, max: u32) -> u8 {
  if max == 0 {
    return 0;
  }
  (value as u64 * 255 / max as u64).min(255) as u8
}

/// Red follows `x`, green follows `y`, blue follows `x + y`, each stretched over its own range.
pub fn procedural(position: P2, size: Dimensions) -> Pixel {
  let (max_x, max_y) = (size.width.saturating_sub(1), size.height.saturating_sub(1));
  Pixel::new(
    rescale(position.x, max_x),
    rescale(position.y, max_y),
    rescale(position.x + position.y, max_x + max_y)
  )
}
