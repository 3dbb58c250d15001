//! Rasterized generalized Voronoi diagrams.
//!
//! Every pixel of the canvas is painted with the color of the seed closest to it under a
//! Minkowski metric of order `p`, then a small disk is stamped at every seed so that their
//! locations stay visible. The result is written as a binary PPM.
//!
//! The pipeline is split into the following stages:
//! - [`seeds`]: random seed placement with an explicitly seeded RNG, colored by a [`palette`];
//! - [`raster`]: nearest-seed classification driven by a [`metric::Metric`];
//! - [`drawing`]: seed markers;
//! - [`output`]: PPM (and optionally PNG) serialization.
//!
//! # Basic usage
//! ```no_run
//! # use voronoi_raster::{config::Config, error::Result};
//! # fn main() -> Result<()> {
//! let config = Config {
//!   point_count: 30,
//!   exponent: 1.0, // Manhattan
//!   seed: Some(42),
//!   ..Default::default()
//! };
//! voronoi_raster::run(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! Stages can be driven separately, e.g. with hand-placed seeds:
//! ```
//! # use voronoi_raster::{
//! #   canvas::{Canvas, Pixel},
//! #   drawing::draw_markers,
//! #   error::Result,
//! #   geometry::Seed,
//! #   metric::Minkowski,
//! #   raster::Rasterizer,
//! # };
//! # fn main() -> Result<()> {
//! let seeds = [
//!   Seed::new(10, 10, Pixel::new(255, 0, 0)),
//!   Seed::new(20, 10, Pixel::new(0, 0, 255)),
//! ];
//! let mut canvas = Canvas::new(30, 20);
//! Rasterizer::new(&seeds, Minkowski::euclidean())?.render(&mut canvas);
//! draw_markers(&mut canvas, &seeds, 2, Pixel::BLACK);
//! assert_eq!(canvas.get(0, 0), Some(Pixel::new(255, 0, 0)));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod geometry;
pub mod canvas;
pub mod palette;
pub mod metric;
pub mod seeds;
pub mod raster;
pub mod drawing;
pub mod output;
pub mod config;
mod util;

#[cfg(test)] mod tests;

use {
  crate::{
    canvas::Canvas,
    config::Config,
    error::Result,
    geometry::Seed,
    palette::Palette,
    raster::Rasterizer,
    seeds::SeedGenerator,
    util::profile
  },
  rand::Rng
};

/// Place `config.point_count` seeds on the canvas described by `config`.
pub fn generate_seeds<R: Rng + ?Sized>(config: &Config, palette: &Palette, rng: &mut R) -> Vec<Seed> {
  SeedGenerator::new(config.size(), palette)
    .with_coloring(config.coloring())
    .generate(config.point_count, rng)
}

/// Classify every pixel, then draw the seed markers on top.
pub fn render(config: &Config, seeds: &[Seed], palette: &Palette) -> Result<Canvas> {
  let mut canvas = Canvas::from_size(config.size());
  let raster = Rasterizer::new(seeds, config.metric())?;

  profile!("rasterize", {
    if config.parallel {
      raster.par_render(&mut canvas)
    } else {
      raster.render(&mut canvas)
    }
  });
  profile!("markers", {
    drawing::draw_markers(&mut canvas, seeds, config.marker_radius, palette.marker())
  });
  Ok(canvas)
}

/// Whole pipeline: validate, place seeds, render, write `config.output`.
pub fn run(config: &Config) -> Result<()> {
  config.validate()?;
  let palette = Palette::classic();
  let mut rng = config.rng();

  log::info!(
    "rendering {} seeds on {}x{}, p = {}",
    config.point_count, config.width, config.height, config.exponent
  );
  let seeds = generate_seeds(config, &palette, &mut rng);
  log::debug!("seeds: {:?}", seeds.iter().map(|s| s.position.to_tuple()).collect::<Vec<_>>());

  let canvas = render(config, &seeds, &palette)?;

  profile!("write", output::save(&canvas, &config.output))?;
  match std::fs::metadata(&config.output) {
    Ok(meta) => log::info!("wrote {} ({})", config.output.display(), util::file_size(meta.len())),
    Err(_) => log::info!("wrote {}", config.output.display())
  }
  Ok(())
}
