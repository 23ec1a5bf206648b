//! Squared RGB distance, per pixel and aggregated over a region.

use {
  super::{Canvas, CHANNELS},
  crate::{
    error::Result,
    geometry::{ClipPolicy, Disk}
  },
  rayon::prelude::*
};

/// Sum of squared channel differences of the pixels starting at byte `offset`.
///
/// At most `3 * 255² = 195075`. Panics if `offset + 3` exceeds either buffer.
#[inline]
pub fn squared_color_distance(a: &[u8], b: &[u8], offset: usize) -> u32 {
  a[offset .. offset + CHANNELS].iter()
    .zip(&b[offset .. offset + CHANNELS])
    .map(|(&x, &y)| {
      let d = x.abs_diff(y) as u32;
      d * d
    })
    .sum()
}

/// Distance between `a` and `b` summed over the points of `disk`.
pub fn disk_distance(a: &Canvas, b: &Canvas, disk: Disk, clip: ClipPolicy) -> Result<u64> {
  a.ensure_same_size(b)?;
  Ok(disk.scan(a.size(), clip)
    .map(|point| {
      let pos = a.offset(point);
      squared_color_distance(a.as_raw(), b.as_raw(), pos) as u64
    })
    .sum())
}

/// Distance between `a` and `b` summed over the whole canvas, computed in parallel.
pub fn total_distance(a: &Canvas, b: &Canvas) -> Result<u64> {
  a.ensure_same_size(b)?;
  Ok(a.as_raw().par_chunks_exact(CHANNELS)
    .zip(b.as_raw().par_chunks_exact(CHANNELS))
    .map(|(x, y)| squared_color_distance(x, y, 0) as u64)
    .sum())
}

/// Mean of [`squared_color_distance`] over all pixels.
pub fn mean_squared_error(a: &Canvas, b: &Canvas) -> Result<f64> {
  Ok(total_distance(a, b)? as f64 / a.pixel_count() as f64)
}
