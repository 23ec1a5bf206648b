//! Approximate an image with overlapping filled disks.
//!
//! Two canvases take part in a run: the *proposal*, which receives a freshly stamped disk on
//! every iteration, and the *accepted* canvas, which only ever takes regions that won
//! [`reconcile`](fn@solver::reconcile). Each iteration picks a random pixel of the source, stamps a
//! disk of its color centered on it, and keeps the stamp if the proposal is closer to the source
//! than to the accepted canvas inside that disk. After all iterations the accepted canvas is the
//! result.
//!
//! # Basic usage
//! ```no_run
//! # use disk_mosaic::{codec, config::Config, error::Result};
//! # fn main() -> Result<()> {
//! let config = Config::default()
//!   .with_output("out.png")
//!   .with_iterations(200_000)
//!   .with_annealing(true); // coarse disks first, fine detail at the end
//! let report = codec::run("in.jpg", &config)?;
//! println!("accepted {} of {} stamps", report.stats.accepted, report.stats.iterations);
//! #   Ok(())
//! # }
//! ```
//! Without the `codec` feature the core works on raw RGB buffers:
//! ```
//! # use disk_mosaic::{canvas::Canvas, config::{Config, MIN_ITERATIONS}, solver, error::Result};
//! # fn main() -> Result<()> {
//! let source = Canvas::from_raw(2, 1, vec![255, 0, 0, 0, 0, 255])?;
//! let config = Config::default().with_iterations(MIN_ITERATIONS).with_seed(0);
//! let outcome = solver::refine(&source, &config)?;
//! assert_eq!(outcome.canvas.size(), source.size());
//! #   Ok(())
//! # }
//! ```
//!
//! # Edge clipping
//! By default a disk traversal stops a row at the first pixel outside the canvas
//! ([`ClipPolicy::RowStop`](geometry::ClipPolicy::RowStop)), so disks hanging over the left edge
//! lose whole rows. [`ClipPolicy::Filter`](geometry::ClipPolicy::Filter) clips per pixel instead.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geometry;
pub mod canvas;
pub mod solver;
pub mod config;
pub mod util;
#[cfg(feature = "codec")]
#[cfg_attr(docsrs, doc(cfg(feature = "codec")))]
pub mod codec;
#[cfg(all(test, feature = "codec"))] mod tests;
