//! Random seed placement.

use {
  crate::{
    geometry::{Dimensions, Seed, P2},
    palette::{Coloring, Palette}
  },
  rand::Rng
};

/// Places seeds uniformly over a canvas and colors them.
#[derive(Debug, Clone)]
pub struct SeedGenerator<'a> {
  size: Dimensions,
  palette: &'a Palette,
  coloring: Coloring
}

impl<'a> SeedGenerator<'a> {
  pub fn new(size: Dimensions, palette: &'a Palette) -> Self {
    Self { size, palette, coloring: Coloring::Palette }
  }

  pub fn with_coloring(mut self, coloring: Coloring) -> Self {
    self.coloring = coloring;
    self
  }

  /// Seed with index `index` at `position`, colored according to the generator settings.
  pub fn seed_at(&self, index: usize, position: P2) -> Seed {
    Seed {
      position,
      color: self.palette.color_for(self.coloring, index, position, self.size)
    }
  }

  /// `count` independent seeds. Coincident seeds are kept as is.
  /// The canvas must not be empty.
  pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Seed> {
    (0..count)
      .map(|i| {
        let position = P2::new(
          rng.gen_range(0..self.size.width),
          rng.gen_range(0..self.size.height)
        );
        self.seed_at(i, position)
      })
      .collect()
  }
}
