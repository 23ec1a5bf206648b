use {
  super::{
    reconcile::{CanvasPair, Verdict},
    schedule::RadiusSchedule
  },
  crate::{
    canvas::Canvas,
    config::Config,
    error::Result,
    geometry::{ClipPolicy, Disk},
    util
  },
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::time::{Duration, Instant},
  tracing::{debug, info}
};

/// Progress notifications emitted by [`Refiner::run_with`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
  Started { seed: u64, iterations: u64, width: u32, height: u32 },
  /// The scheduler switched to a new radius, starting with `iteration`.
  RadiusChanged { iteration: u64, radius: u32 },
  /// Emitted once, at iteration `n / 2`. The elapsed time is also the estimate of time remaining.
  Halfway { iteration: u64, elapsed: Duration },
  Finished(RunStats)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunStats {
  pub iterations: u64,
  /// Number of iterations whose proposal won reconciliation.
  pub accepted: u64,
  pub elapsed: Duration,
  pub seed: u64
}

impl RunStats {
  pub fn acceptance_rate(&self) -> f64 {
    if self.iterations == 0 { return 0.0; }
    self.accepted as f64 / self.iterations as f64
  }
}

#[derive(Debug)]
pub struct Outcome {
  /// Final reconstruction, taken from the accepted canvas.
  pub canvas: Canvas,
  pub stats: RunStats
}

/// Owns one run: both working canvases, the schedule and the random stream.
/// The source is borrowed read-only for the lifetime of the refiner.
pub struct Refiner<'a> {
  source: &'a Canvas,
  pair: CanvasPair,
  schedule: RadiusSchedule,
  clip: ClipPolicy,
  iterations: u64,
  seed: u64,
  rng: Pcg64,
  accepted: u64
}

impl<'a> Refiner<'a> {
  /// Validates `config` first; nothing is allocated for a rejected configuration.
  pub fn new(source: &'a Canvas, config: &Config) -> Result<Self> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(util::seed_from_time);
    let pair = CanvasPair::for_source(source);
    debug!(canvas = ?pair.accepted, "allocated working canvases");
    Ok(Self {
      source,
      pair,
      schedule: config.schedule(),
      clip: config.clip,
      iterations: config.iterations,
      seed,
      rng: Pcg64::seed_from_u64(seed),
      accepted: 0
    })
  }

  pub fn seed(&self) -> u64 { self.seed }
  pub fn iterations(&self) -> u64 { self.iterations }
  pub fn schedule(&self) -> &RadiusSchedule { &self.schedule }
  pub fn canvases(&self) -> &CanvasPair { &self.pair }

  /// One stamp-then-reconcile iteration with index `i`.
  pub fn step(&mut self, i: u64) -> Result<Verdict> {
    let index = self.rng.gen_range(0 .. self.source.pixel_count());
    let anchor = self.source.index_to_point(index);
    let color = self.source.pixel(anchor);
    let disk = Disk::new(anchor.to_i64(), self.schedule.radius_at(i, self.iterations));

    self.pair.stamp(disk, color, self.clip);
    let verdict = self.pair.reconcile(disk, self.source, self.clip)?;
    if verdict == Verdict::Accepted {
      self.accepted += 1;
    }
    Ok(verdict)
  }

  /// Run every iteration, reporting progress through the `tracing` log.
  pub fn run(self) -> Result<Outcome> {
    self.run_with(log_event)
  }

  pub fn run_with(mut self, mut observer: impl FnMut(&Event)) -> Result<Outcome> {
    let n = self.iterations;
    let t0 = Instant::now();
    observer(&Event::Started {
      seed: self.seed,
      iterations: n,
      width: self.source.width(),
      height: self.source.height()
    });

    let mut breakpoints = self.schedule.breakpoints(n).into_iter().peekable();
    for i in 0..n {
      if i == n / 2 {
        observer(&Event::Halfway { iteration: i, elapsed: t0.elapsed() });
      }
      if let Some((iteration, radius)) = breakpoints.next_if(|&(at, _)| at == i) {
        observer(&Event::RadiusChanged { iteration, radius });
      }
      self.step(i)?;
    }

    let stats = RunStats {
      iterations: n,
      accepted: self.accepted,
      elapsed: t0.elapsed(),
      seed: self.seed
    };
    observer(&Event::Finished(stats));
    Ok(Outcome {
      canvas: self.pair.into_accepted(),
      stats
    })
  }
}

/// Default observer.
pub fn log_event(event: &Event) {
  match *event {
    Event::Started { seed, iterations, width, height } =>
      info!(seed, iterations, width, height, "refinement started"),
    Event::RadiusChanged { iteration, radius } =>
      debug!(iteration, radius, "radius changed"),
    Event::Halfway { elapsed, .. } =>
      info!("half done: {} seconds estimated remaining", elapsed.as_secs()),
    Event::Finished(stats) =>
      info!(
        accepted = stats.accepted,
        acceptance_rate = stats.acceptance_rate(),
        "iterations completed in {} seconds", stats.elapsed.as_secs()
      )
  }
}

/// Build a [`Refiner`] and run it to completion with the default observer.
pub fn refine(source: &Canvas, config: &Config) -> Result<Outcome> {
  Refiner::new(source, config)?.run()
}
