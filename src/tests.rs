use {
  crate::{
    canvas::{Canvas, Pixel},
    codec,
    config::{Config, MIN_ITERATIONS},
    error::Error,
    geometry::ClipPolicy
  },
  anyhow::Result,
  euclid::point2,
  image::{Rgb, RgbImage}
};

fn four_colors() -> RgbImage {
  RgbImage::from_fn(2, 2, |x, y| match (x, y) {
    (0, 0) => Rgb([255, 0, 0]),
    (1, 0) => Rgb([0, 255, 0]),
    (0, 1) => Rgb([0, 0, 255]),
    _ => Rgb([255, 255, 0])
  })
}

#[test] fn load_normalizes_to_rgb() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("rgba.png");
  image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 40])).save(&path)?;

  let canvas = codec::load(&path)?;
  assert_eq!(canvas.size().to_tuple(), (3, 2));
  assert_eq!(canvas.as_raw().len(), 18);
  assert_eq!(canvas.pixel(point2(2, 1)), Pixel::new(10, 20, 30));
  Ok(())
}

#[test] fn save_then_load() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("canvas.png");
  let canvas = Canvas::from_raw(2, 2, four_colors().into_raw())?;
  codec::save(&canvas, &path)?;
  assert_eq!(codec::load(&path)?, canvas);
  Ok(())
}

#[test] fn decode_failure() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("garbage.png");
  std::fs::write(&path, b"not an image")?;
  assert!(matches!(codec::load(&path), Err(Error::Image(_))));
  assert!(codec::load(dir.path().join("missing.png")).is_err());
  Ok(())
}

#[test] fn run_writes_output() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.png");
  four_colors().save(&input)?;

  let config = Config::default()
    .with_output(&output)
    .with_iterations(MIN_ITERATIONS)
    .with_seed(42);
  let report = codec::run(&input, &config)?;
  assert_eq!(report.stats.iterations, MIN_ITERATIONS);
  assert!(report.mean_squared_error >= 0.0);

  let written = image::open(&output)?;
  assert_eq!((written.width(), written.height()), (2, 2));
  assert_eq!(written.color(), image::ColorType::Rgb8);
  Ok(())
}

#[test] fn run_rejects_short_run_without_output() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.png");
  four_colors().save(&input)?;

  let config = Config::default()
    .with_output(&output)
    .with_iterations(50_000);
  assert!(matches!(
    codec::run(&input, &config),
    Err(Error::TooFewIterations { given: 50_000, minimum: MIN_ITERATIONS })
  ));
  assert!(!output.exists());
  Ok(())
}

#[test] fn run_reconstructs_uniform_image() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.png");
  RgbImage::from_pixel(40, 30, Rgb([90, 60, 30])).save(&input)?;

  let config = Config::default()
    .with_output(&output)
    .with_iterations(MIN_ITERATIONS)
    .with_clip(ClipPolicy::Filter)
    .with_annealing(true)
    .with_seed(2);
  let report = codec::run(&input, &config)?;
  assert_eq!(report.mean_squared_error, 0.0);
  assert_eq!(codec::load(&output)?, codec::load(&input)?);
  Ok(())
}
