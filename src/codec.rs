//! Boundary between image files and the refinement core.

use {
  crate::{
    canvas::{Canvas, metric},
    config::Config,
    error::Result,
    profile,
    solver::{Refiner, RunStats}
  },
  image::ColorType,
  std::path::Path,
  tracing::info
};

/// Decode any supported image and normalize it to 8-bit RGB.
pub fn load(path: impl AsRef<Path>) -> Result<Canvas> {
  let image = image::open(path)?.into_rgb8();
  let (width, height) = image.dimensions();
  Canvas::from_raw(width, height, image.into_raw())
}

/// Encode `canvas` as RGB8, row stride `3 * width`. Format follows the extension of `path`.
pub fn save(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
  image::save_buffer(
    path,
    canvas.as_raw(),
    canvas.width(),
    canvas.height(),
    ColorType::Rgb8
  )?;
  Ok(())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Report {
  pub stats: RunStats,
  /// Mean squared RGB distance of the output from the source.
  pub mean_squared_error: f64
}

/// Load `input`, refine it according to `config` and write the result to `config.output`.
///
/// The configuration is validated before the input is decoded; on any error no output is written.
pub fn run(input: impl AsRef<Path>, config: &Config) -> Result<Report> {
  config.validate()?;
  let source = profile!("decode", load(input)?);
  let outcome = Refiner::new(&source, config)?.run()?;

  let mean_squared_error = metric::mean_squared_error(&outcome.canvas, &source)?;
  info!(mean_squared_error, "fidelity");

  profile!("encode", save(&outcome.canvas, &config.output)?);
  info!(output = %config.output.display(), "saved");
  Ok(Report {
    stats: outcome.stats,
    mean_squared_error
  })
}
