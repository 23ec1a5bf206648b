//! Stochastic refinement: stamp a disk on the proposal canvas, then [`reconcile`](fn@reconcile) it with the
//! accepted one.

pub mod reconcile;
pub use reconcile::{reconcile, CanvasPair, Verdict};

pub mod schedule;
pub use schedule::{RadiusSchedule, Stage, Trigger, ANNEALING_STAGES};

pub mod refiner;
pub use refiner::{refine, Event, Outcome, Refiner, RunStats};
