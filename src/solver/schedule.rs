use {
  crate::config::MAX_RADIUS,
  itertools::Itertools
};

/// When a [`Stage`] takes effect, relative to a run of `n` iterations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Trigger {
  /// Iteration `n / 2`.
  Midpoint,
  /// Iteration `n - k`. Never fires when `k > n`.
  BeforeEnd(u64)
}

impl Trigger {
  pub fn index(self, n: u64) -> Option<u64> {
    match self {
      Trigger::Midpoint => Some(n / 2),
      Trigger::BeforeEnd(k) => n.checked_sub(k)
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stage {
  pub trigger: Trigger,
  pub radius: u32
}

/// Coarse-to-fine tail, plus a wide correction pass at the midpoint.
/// Entries later in the table win when two stages fire on the same iteration.
pub const ANNEALING_STAGES: [Stage; 4] = [
  Stage { trigger: Trigger::BeforeEnd(45_000), radius: 32 },
  Stage { trigger: Trigger::BeforeEnd(15_000), radius: 16 },
  Stage { trigger: Trigger::BeforeEnd(5_000), radius: 8 },
  Stage { trigger: Trigger::Midpoint, radius: 40 },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadiusSchedule {
  Constant(u32),
  /// Starts at `initial`; each stage replaces the radius from its firing iteration on.
  Annealing {
    initial: u32,
    stages: Vec<Stage>
  }
}

impl RadiusSchedule {
  /// Default annealing table, starting from `initial` clamped to [`MAX_RADIUS`].
  pub fn annealing(initial: u32) -> Self {
    RadiusSchedule::Annealing {
      initial: initial.min(MAX_RADIUS),
      stages: ANNEALING_STAGES.to_vec()
    }
  }

  /// Radius for iteration `i` of a run of `n` iterations.
  pub fn radius_at(&self, i: u64, n: u64) -> u32 {
    match self {
      RadiusSchedule::Constant(radius) => *radius,
      RadiusSchedule::Annealing { initial, stages } => stages.iter()
        .filter_map(|stage| stage.trigger.index(n)
          .filter(|&at| at <= i)
          .map(|at| (at, stage.radius)))
        // last maximum wins ties
        .max_by_key(|&(at, _)| at)
        .map_or(*initial, |(_, radius)| radius)
    }
  }

  /// `(first iteration, radius)` for every segment of constant radius within `[0, n)`.
  pub fn breakpoints(&self, n: u64) -> Vec<(u64, u32)> {
    let stages: &[Stage] = match self {
      RadiusSchedule::Constant(_) => &[],
      RadiusSchedule::Annealing { stages, .. } => stages
    };
    std::iter::once(0)
      .chain(stages.iter()
        .filter_map(|stage| stage.trigger.index(n))
        .filter(|&at| at < n))
      .sorted()
      .dedup()
      .map(|at| (at, self.radius_at(at, n)))
      .dedup_by(|a, b| a.1 == b.1)
      .collect()
  }
}
