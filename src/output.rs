//! Image writers.
//!
//! Binary PPM is the native format: `P6\n<width> <height>\n255\n` followed by the raw
//! row-major `RGB` payload, no padding.

use {
  crate::{
    canvas::Canvas,
    error::{Error, Result},
    geometry::Dimensions
  },
  std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path
  }
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
  Ppm,
  Png
}

impl OutputFormat {
  /// `.png` selects PNG, anything else is written as binary PPM.
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("png") => OutputFormat::Png,
      _ => OutputFormat::Ppm
    }
  }

  /// Whether this build is able to encode the format.
  pub fn is_supported(self) -> bool {
    match self {
      OutputFormat::Ppm => true,
      OutputFormat::Png => cfg!(feature = "png")
    }
  }
}

pub fn ppm_header(size: Dimensions) -> String {
  format!("P6\n{} {}\n255\n", size.width, size.height)
}

pub fn write_ppm<W: Write>(canvas: &Canvas, mut writer: W) -> io::Result<()> {
  writer.write_all(ppm_header(canvas.size()).as_bytes())?;
  let mut line = Vec::with_capacity(canvas.width() as usize * 3);
  for row in canvas.rows() {
    line.clear();
    line.extend(row.iter().flat_map(|px| px.to_bytes()));
    writer.write_all(&line)?;
  }
  writer.flush()
}

pub fn save_ppm(canvas: &Canvas, path: &Path) -> Result<()> {
  let io_error = |source| Error::Io { path: path.to_path_buf(), source };
  let file = File::create(path).map_err(io_error)?;
  write_ppm(canvas, BufWriter::new(file)).map_err(io_error)
}

#[cfg(feature = "png")]
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
  canvas.to_rgb_image()
    .save_with_format(path, image::ImageFormat::Png)
    .map_err(|err| match err {
      image::ImageError::IoError(source) => Error::Io { path: path.to_path_buf(), source },
      source => Error::Image { path: path.to_path_buf(), source }
    })
}

#[cfg(not(feature = "png"))]
pub fn save_png(_canvas: &Canvas, path: &Path) -> Result<()> {
  Err(Error::UnsupportedFormat(format!(
    "{}: PNG output requires the `png` feature",
    path.display()
  )))
}

/// Write `canvas` to `path` in the format its extension selects.
pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
  match OutputFormat::from_path(path) {
    OutputFormat::Ppm => save_ppm(canvas, path),
    OutputFormat::Png => save_png(canvas, path)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::canvas::Pixel,
    std::path::PathBuf
  };

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("voronoi-raster-{}-{}", std::process::id(), name))
  }

  #[test] fn header_is_exact() {
    assert_eq!(ppm_header(Dimensions::new(600, 400)), "P6\n600 400\n255\n");
    assert_eq!(ppm_header(Dimensions::new(1, 8192)).as_bytes(), b"P6\n1 8192\n255\n");
  }

  #[test] fn payload_is_raw_rgb() -> io::Result<()> {
    let mut canvas = Canvas::new(3, 2);
    canvas.put(0, 0, Pixel::new(1, 2, 3));
    canvas.put(2, 1, Pixel::new(7, 8, 9));
    let mut buffer = vec![];
    write_ppm(&canvas, &mut buffer)?;

    let header = b"P6\n3 2\n255\n";
    assert_eq!(&buffer[..header.len()], header);
    let payload = &buffer[header.len()..];
    assert_eq!(payload.len(), 3 * 3 * 2);
    assert_eq!(&payload[..3], &[1, 2, 3]);
    assert_eq!(&payload[15..], &[7, 8, 9]);
    assert_eq!(payload, canvas.to_bytes().as_slice());
    Ok(())
  }

  #[test] fn save_to_disk() -> Result<()> {
    let path = temp_path("save.ppm");
    let canvas = Canvas::new(17, 5);
    save(&canvas, &path)?;
    let bytes = std::fs::read(&path).map_err(|source| Error::Io { path: path.clone(), source })?;
    std::fs::remove_file(&path).ok();
    assert_eq!(bytes.len(), "P6\n17 5\n255\n".len() + 3 * 17 * 5);
    Ok(())
  }

  #[test] fn unwritable_path_is_io_error() {
    let path = temp_path("missing-dir").join("nested").join("out.ppm");
    let err = save(&Canvas::new(2, 2), &path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.exit_code(), 1);
  }

  #[test] fn format_from_extension() {
    assert_eq!(OutputFormat::from_path(Path::new("voronoi.ppm")), OutputFormat::Ppm);
    assert_eq!(OutputFormat::from_path(Path::new("out/diagram.PNG")), OutputFormat::Png);
    assert_eq!(OutputFormat::from_path(Path::new("voronoi")), OutputFormat::Ppm);
    assert!(OutputFormat::Ppm.is_supported());
  }
}
