use {
  crate::{
    error::{Error, Result},
    geometry::ClipPolicy,
    solver::RadiusSchedule
  },
  std::path::PathBuf
};

pub const DEFAULT_OUTPUT: &str = "output.png";
pub const DEFAULT_ITERATIONS: u64 = 500_000;
/// Runs shorter than this are rejected before any canvas is allocated.
pub const MIN_ITERATIONS: u64 = 100_000;
/// Constant radius used without annealing.
pub const DEFAULT_RADIUS: u32 = 10;
/// Upper bound, and default, for the radius an annealed run starts with.
pub const MAX_RADIUS: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub output: PathBuf,
  pub iterations: u64,
  pub annealing: bool,
  /// Radius for the whole run when `annealing` is off.
  pub radius: u32,
  /// Radius an annealed run starts with, clamped to [`MAX_RADIUS`].
  pub initial_radius: u32,
  pub clip: ClipPolicy,
  /// `None` seeds the generator from the wall clock.
  pub seed: Option<u64>
}

impl Default for Config {
  fn default() -> Self {
    Self {
      output: DEFAULT_OUTPUT.into(),
      iterations: DEFAULT_ITERATIONS,
      annealing: false,
      radius: DEFAULT_RADIUS,
      initial_radius: MAX_RADIUS,
      clip: ClipPolicy::default(),
      seed: None
    }
  }
}

impl Config {
  pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
    self.output = output.into();
    self
  }

  pub fn with_iterations(mut self, iterations: u64) -> Self {
    self.iterations = iterations;
    self
  }

  pub fn with_annealing(mut self, annealing: bool) -> Self {
    self.annealing = annealing;
    self
  }

  pub fn with_radius(mut self, radius: u32) -> Self {
    self.radius = radius;
    self
  }

  pub fn with_initial_radius(mut self, radius: u32) -> Self {
    self.initial_radius = radius;
    self
  }

  pub fn with_clip(mut self, clip: ClipPolicy) -> Self {
    self.clip = clip;
    self
  }

  pub fn with_seed(mut self, seed: impl Into<Option<u64>>) -> Self {
    self.seed = seed.into();
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.iterations < MIN_ITERATIONS {
      return Err(Error::TooFewIterations {
        given: self.iterations,
        minimum: MIN_ITERATIONS
      });
    }
    Ok(())
  }

  pub fn schedule(&self) -> RadiusSchedule {
    if self.annealing {
      RadiusSchedule::annealing(self.initial_radius)
    } else {
      RadiusSchedule::Constant(self.radius)
    }
  }
}
