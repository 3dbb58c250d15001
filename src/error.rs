//! .
//!
//! Every failure of the library surfaces as [`Error`]. The process is never terminated from
//! inside the crate; the caller maps an error to a status with [`Error::exit_code`].
use std::{fmt, path::PathBuf};

#[derive(Debug)]
pub enum Error {
  /// Output file could not be created, written or flushed.
  Io {
    path: PathBuf,
    source: std::io::Error
  },
  #[cfg(feature = "png")]
  Image {
    path: PathBuf,
    source: image::ImageError
  },
  /// A configuration value is outside of its admissible range.
  Config(String),
  /// Output format is not compiled in.
  UnsupportedFormat(String),
  /// Rasterization was requested over an empty seed set.
  NoSeeds,
}

impl Error {
  pub fn config(msg: impl Into<String>) -> Self {
    Error::Config(msg.into())
  }

  /// Integer status reported to the surrounding process. `0` is reserved for success.
  pub fn exit_code(&self) -> u8 {
    use Error::*;
    match self {
      Io { .. } => 1,
      #[cfg(feature = "png")]
      Image { .. } => 1,
      Config(_) | UnsupportedFormat(_) | NoSeeds => 2,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      Io { path, .. } => write!(f, "can't write file {}", path.display()),
      #[cfg(feature = "png")]
      Image { path, .. } => write!(f, "can't encode image {}", path.display()),
      Config(msg) => write!(f, "invalid configuration: {}", msg),
      UnsupportedFormat(ext) => write!(f, "unsupported output format: {}", ext),
      NoSeeds => f.write_str("at least one seed is required"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io { source, .. } => Some(source),
      #[cfg(feature = "png")]
      Error::Image { source, .. } => Some(source),
      _ => None
    }
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// Render the error with its whole source chain, one cause per line.
pub fn display(error: &(dyn std::error::Error + 'static)) -> String {
  let mut msg = format!("{}", error);
  let mut source = error.source();
  let mut index = 1;
  while let Some(cause) = source {
    msg.push_str(&format!("\n└> {} - {}", index, cause));
    source = cause.source();
    index += 1;
  }
  msg
}
