//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right and `y` grows
//! downwards. Disk centers are signed, so a disk may hang over any edge of the canvas.

use euclid::{Point2D, Size2D};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Returns `true` if `point` lies inside a canvas of given `size`.
pub fn in_bounds(point: Point2D<i64, PixelSpace>, size: Size2D<u32, PixelSpace>) -> bool {
  point.x >= 0 && point.x < size.width as i64 &&
  point.y >= 0 && point.y < size.height as i64
}

/// How a disk traversal treats points that fall outside of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ClipPolicy {
  /// The first out-of-bounds point ends the current row. Rows whose leftmost
  /// point is past the left edge are dropped entirely.
  #[default]
  RowStop,
  /// Out-of-bounds points are skipped, every in-bounds point of the disk is visited.
  Filter,
}

/// Set of integer offsets `(dx, dy)` with `dx² + dy² <= r²` around `center`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Disk {
  pub center: Point2D<i64, PixelSpace>,
  pub radius: u32
}

impl Disk {
  pub fn new(center: Point2D<i64, PixelSpace>, radius: u32) -> Self {
    Self { center, radius }
  }

  // squares of offsets up to `u32::MAX` do not fit in i64
  pub fn contains_offset(&self, dx: i64, dy: i64) -> bool {
    let (dx, dy, r) = (dx as i128, dy as i128, self.radius as i128);
    dx * dx + dy * dy <= r * r
  }

  /// Largest `w` such that `(w, dy)` is inside the disk. Requires `|dy| <= r`.
  fn half_width(&self, dy: i64) -> i64 {
    let (r, dy2) = (self.radius as i128, dy as i128);
    let mut w = ((r * r - dy2 * dy2) as f64).sqrt() as i64;
    while w > 0 && !self.contains_offset(w, dy) { w -= 1; }
    while self.contains_offset(w + 1, dy) { w += 1; }
    w
  }

  /// Visit the in-bounds points of the disk, `dy` outer and `dx` inner, both ascending.
  ///
  /// Equivalent to testing every offset of `[-r, r]²` in that order, but only touches the rows
  /// that intersect the canvas and computes each row's span directly.
  pub fn scan(self, size: Size2D<u32, PixelSpace>, clip: ClipPolicy)
    -> impl Iterator<Item = Point2D<u32, PixelSpace>>
  {
    let r = self.radius as i64;
    let (x0, y0) = (self.center.x, self.center.y);
    let (width, height) = (size.width as i64, size.height as i64);

    // rows above or below the canvas are empty under either policy
    let rows = (-r).max(-y0) ..= r.min(height - 1 - y0);
    rows.flat_map(move |dy| {
      let w = self.half_width(dy);
      let (left, right) = (x0 - w, x0 + w);
      let start = match clip {
        ClipPolicy::RowStop if left < 0 => None,
        ClipPolicy::RowStop => Some(left),
        ClipPolicy::Filter => Some(left.max(0))
      };
      let y = (y0 + dy) as u32;
      start.into_iter()
        .flat_map(move |start| start ..= right.min(width - 1))
        .map(move |x| Point2D::new(x as u32, y))
    })
  }
}
