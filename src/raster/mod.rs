//! Nearest-seed classification, the dominant cost of a run.
//!
//! Every pixel scans the seeds in index order and keeps a running minimum. Only a strictly
//! smaller distance replaces it, so ties resolve to the lowest seed index, which keeps the
//! output reproducible. The running minimum doubles as a bound: a seed whose horizontal or
//! vertical term alone already reaches it can't win, and its full distance is never computed.
//!
//! Rows are independent, [`Rasterizer::par_render`] spreads them over the rayon pool and
//! produces the same canvas as [`Rasterizer::render`].

use {
  crate::{
    canvas::{Canvas, Pixel},
    error::{Error, Result},
    geometry::{Dimensions, Seed, P2},
    metric::Metric
  },
  rayon::prelude::*
};


pub struct Rasterizer<'a, M> {
  seeds: &'a [Seed],
  metric: M
}

impl<'a, M: Metric> Rasterizer<'a, M> {
  pub fn new(seeds: &'a [Seed], metric: M) -> Result<Self> {
    if seeds.is_empty() {
      return Err(Error::NoSeeds);
    }
    Ok(Self { seeds, metric })
  }

  pub fn seeds(&self) -> &'a [Seed] {
    self.seeds
  }

  pub fn metric(&self) -> &M {
    &self.metric
  }

  /// Index of the seed closest to `pixel`, lowest index on ties.
  pub fn nearest(&self, pixel: P2) -> usize {
    let (dx, dy) = self.seeds[0].delta(pixel);
    let mut min_distance = self.metric.distance(dx, dy);
    let mut closest = 0;

    for (i, seed) in self.seeds.iter().enumerate().skip(1) {
      let (dx, dy) = seed.delta(pixel);
      // distance >= bound >= min_distance, can't be strictly less
      if self.metric.axis_bound(dx) >= min_distance || self.metric.axis_bound(dy) >= min_distance {
        continue;
      }
      let distance = self.metric.distance(dx, dy);
      if distance < min_distance {
        min_distance = distance;
        closest = i;
      }
    }
    closest
  }

  /// Row-major map of closest seed indices.
  pub fn classify(&self, size: Dimensions) -> Vec<u32> {
    itertools::iproduct!(0..size.height, 0..size.width)
      .map(|(y, x)| self.nearest(P2::new(x, y)) as u32)
      .collect()
  }

  fn render_row(&self, y: u32, row: &mut [Pixel]) {
    row.iter_mut()
      .enumerate()
      .for_each(|(x, pixel)| {
        *pixel = self.seeds[self.nearest(P2::new(x as u32, y))].color;
      });
  }

  /// Overwrite every pixel of `canvas` with the color of its closest seed.
  pub fn render(&self, canvas: &mut Canvas) {
    canvas.rows_mut()
      .enumerate()
      .for_each(|(y, row)| self.render_row(y as u32, row));
  }
}

impl<'a, M: Metric + Sync> Rasterizer<'a, M> {
  /// Same as [`Rasterizer::render`], rows distributed over the rayon thread pool.
  pub fn par_render(&self, canvas: &mut Canvas) {
    canvas.par_rows_mut()
      .enumerate()
      .for_each(|(y, row)| self.render_row(y as u32, row));
  }
}
