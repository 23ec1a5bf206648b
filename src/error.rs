//! .
//!
//! Every failure the crate can report. The refinement core itself never fails once entered:
//! all of these are raised at its boundary, before any canvas is touched.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no source image was given")]
  MissingInput,
  #[error("number of iterations must be at least {minimum}, got {given}")]
  TooFewIterations { given: u64, minimum: u64 },
  #[error("image has zero width or height")]
  EmptyImage,
  #[error("pixel buffer holds {actual} bytes, expected {expected}")]
  BufferSize { expected: usize, actual: usize },
  #[error("canvas dimensions differ: {0:?} vs {1:?}")]
  DimensionMismatch((u32, u32), (u32, u32)),
  #[cfg(feature = "codec")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
  #[error(transparent)]
  Io(#[from] std::io::Error),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
