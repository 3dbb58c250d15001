//! Row-major RGB framebuffer.
//!
//! The flat `y * width + x` layout is the same one the PPM payload uses, so the writer
//! streams rows without any reordering.

use {
  crate::geometry::{Dimensions, P2},
  rayon::prelude::*
};

/// 8-bit RGB triple.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
  pub r: u8,
  pub g: u8,
  pub b: u8
}

impl Pixel {
  pub const BLACK: Pixel = Pixel::new(0, 0, 0);
  pub const WHITE: Pixel = Pixel::new(255, 255, 255);

  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  pub const fn to_bytes(self) -> [u8; 3] {
    [self.r, self.g, self.b]
  }
}

impl From<[u8; 3]> for Pixel {
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}

#[cfg(feature = "png")]
impl From<Pixel> for image::Rgb<u8> {
  fn from(px: Pixel) -> Self {
    image::Rgb(px.to_bytes())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
  size: Dimensions,
  data: Vec<Pixel>
}

impl Canvas {
  /// Black canvas.
  pub fn new(width: u32, height: u32) -> Self {
    Self::from_size(Dimensions::new(width, height))
  }

  pub fn from_size(size: Dimensions) -> Self {
    Self {
      size,
      data: vec![Pixel::default(); size.area() as usize]
    }
  }

  pub fn size(&self) -> Dimensions {
    self.size
  }

  pub fn width(&self) -> u32 {
    self.size.width
  }

  pub fn height(&self) -> u32 {
    self.size.height
  }

  #[inline]
  fn offset(&self, x: u32, y: u32) -> Option<usize> {
    (x < self.size.width && y < self.size.height)
      .then(|| y as usize * self.size.width as usize + x as usize)
  }

  pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
    self.offset(x, y).map(|i| self.data[i])
  }

  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Pixel> {
    match self.offset(x, y) {
      Some(i) => Some(&mut self.data[i]),
      None => None
    }
  }

  /// Returns `false` and leaves the canvas untouched if `(x, y)` is out of bounds.
  pub fn put(&mut self, x: u32, y: u32, pixel: Pixel) -> bool {
    match self.get_mut(x, y) {
      Some(px) => { *px = pixel; true },
      None => false
    }
  }

  pub fn row(&self, y: u32) -> Option<&[Pixel]> {
    let width = self.size.width as usize;
    (y < self.size.height)
      .then(|| &self.data[y as usize * width .. (y as usize + 1) * width])
  }

  pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
    // `chunks` rejects a zero chunk size; a zero-width canvas has no rows worth yielding
    self.data.chunks(self.size.width.max(1) as usize)
  }

  pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> + '_ {
    self.data.chunks_mut(self.size.width.max(1) as usize)
  }

  /// Disjoint rows for parallel writers.
  pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = &mut [Pixel]> + '_ {
    self.data.par_chunks_mut(self.size.width.max(1) as usize)
  }

  /// Every pixel with its coordinate, row-major.
  pub fn pixels(&self) -> impl Iterator<Item = (P2, Pixel)> + '_ {
    let width = self.size.width.max(1);
    self.data.iter()
      .enumerate()
      .map(move |(i, px)| (P2::new(i as u32 % width, i as u32 / width), *px))
  }

  pub fn as_slice(&self) -> &[Pixel] {
    &self.data
  }

  /// Raw interleaved `RGBRGB...` bytes.
  pub fn to_bytes(&self) -> Vec<u8> {
    self.data.iter()
      .flat_map(|px| px.to_bytes())
      .collect()
  }

  #[cfg(feature = "png")]
  pub fn to_rgb_image(&self) -> image::RgbImage {
    image::RgbImage::from_fn(self.size.width, self.size.height, |x, y| {
      self.data[y as usize * self.size.width as usize + x as usize].into()
    })
  }
}
