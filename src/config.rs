//! Run configuration, built once and read-only afterwards.

use {
  crate::{
    error::{Error, Result},
    geometry::Dimensions,
    metric::Minkowski,
    output::OutputFormat,
    palette::Coloring
  },
  rand::SeedableRng,
  std::{ops::RangeInclusive, path::PathBuf}
};

pub const DEFAULT_POINT_COUNT: usize = 15;
pub const DEFAULT_EXPONENT: f64 = 2.0;
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_MARKER_RADIUS: u32 = 4;
pub const DEFAULT_OUTPUT: &str = "voronoi.ppm";

pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 1..=100_000;
pub const DIMENSION_RANGE: RangeInclusive<u32> = 1..=8192;
pub const MARKER_RADIUS_RANGE: RangeInclusive<u32> = 0..=256;
/// Keeps `8192^p` finite in `f64`.
pub const MAX_EXPONENT: f64 = 64.0;
/// Bytes.
pub const MAX_PATH_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Number of seeds.
  pub point_count: usize,
  /// Minkowski exponent `p`.
  pub exponent: f64,
  pub width: u32,
  pub height: u32,
  pub marker_radius: u32,
  /// Derive seed colors from their coordinates instead of the palette.
  pub auto_colors: bool,
  pub output: PathBuf,
  /// RNG seed for reproducible seed placement; OS entropy when absent.
  pub seed: Option<u64>,
  /// Rasterize rows on the rayon thread pool.
  pub parallel: bool
}

impl Default for Config {
  fn default() -> Self {
    Self {
      point_count: DEFAULT_POINT_COUNT,
      exponent: DEFAULT_EXPONENT,
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
      marker_radius: DEFAULT_MARKER_RADIUS,
      auto_colors: false,
      output: PathBuf::from(DEFAULT_OUTPUT),
      seed: None,
      parallel: true
    }
  }
}

fn check_range<T: PartialOrd + std::fmt::Display>(name: &str, value: T, range: RangeInclusive<T>) -> Result<()> {
  if !range.contains(&value) {
    return Err(Error::config(format!(
      "{} must be within {}..={}, got {}", name, range.start(), range.end(), value
    )));
  }
  Ok(())
}

impl Config {
  /// Reject every value the core is not prepared to handle.
  pub fn validate(&self) -> Result<()> {
    check_range("point count", self.point_count, POINT_COUNT_RANGE)?;
    check_range("width", self.width, DIMENSION_RANGE)?;
    check_range("height", self.height, DIMENSION_RANGE)?;
    check_range("marker radius", self.marker_radius, MARKER_RADIUS_RANGE)?;

    if !(self.exponent > 0.0 && self.exponent <= MAX_EXPONENT) {
      return Err(Error::config(format!(
        "exponent must be within (0, {}], got {}", MAX_EXPONENT, self.exponent
      )));
    }

    let path_len = self.output.as_os_str().len();
    if path_len == 0 {
      return Err(Error::config("output path is empty"));
    }
    if path_len > MAX_PATH_LEN {
      return Err(Error::config(format!(
        "output path is {} bytes long, at most {} are allowed", path_len, MAX_PATH_LEN
      )));
    }
    if !OutputFormat::from_path(&self.output).is_supported() {
      return Err(Error::UnsupportedFormat(format!(
        "{}: PNG output requires the `png` feature", self.output.display()
      )));
    }
    Ok(())
  }

  pub fn size(&self) -> Dimensions {
    Dimensions::new(self.width, self.height)
  }

  pub fn metric(&self) -> Minkowski {
    Minkowski::new(self.exponent)
  }

  pub fn coloring(&self) -> Coloring {
    if self.auto_colors { Coloring::Procedural } else { Coloring::Palette }
  }

  pub fn rng(&self) -> rand_pcg::Pcg64 {
    match self.seed {
      Some(seed) => rand_pcg::Pcg64::seed_from_u64(seed),
      None => rand_pcg::Pcg64::from_entropy()
    }
  }
}
