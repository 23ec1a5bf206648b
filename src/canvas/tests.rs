use {
  super::{*, metric::*},
  crate::geometry::{in_bounds, ClipPolicy, Disk},
  anyhow::Result,
  euclid::point2,
  std::collections::HashSet
};

const RED: Pixel = Pixel::new(255, 0, 0);
const TEAL: Pixel = Pixel::new(0, 128, 128);

fn noise(width: u32, height: u32) -> Result<Canvas> {
  use rand::prelude::*;

  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let mut data = vec![0u8; CHANNELS * (width * height) as usize];
  rng.fill_bytes(&mut data);
  Ok(Canvas::from_raw(width, height, data)?)
}

#[test] fn rejects_bad_dimensions() {
  assert!(matches!(Canvas::new(0, 4), Err(Error::EmptyImage)));
  assert!(matches!(Canvas::new(4, 0), Err(Error::EmptyImage)));
  assert!(matches!(
    Canvas::from_raw(2, 2, vec![0; 11]),
    Err(Error::BufferSize { expected: 12, actual: 11 })
  ));
}

#[test] fn put_pixel_offset() -> Result<()> {
  let mut canvas = Canvas::new(4, 3)?;
  canvas.put_pixel(point2(2, 1), Pixel::new(1, 2, 3));
  let pos = 3 * (4 * 1 + 2);
  assert_eq!(&canvas.as_raw()[pos .. pos + 3], &[1, 2, 3]);
  assert_eq!(canvas.as_raw().iter().filter(|&&b| b != 0).count(), 3);
  assert_eq!(canvas.pixel(point2(2, 1)), Pixel::new(1, 2, 3));
  Ok(())
}

#[test] fn index_to_point() -> Result<()> {
  let canvas = Canvas::new(5, 4)?;
  assert_eq!(canvas.index_to_point(0), point2(0, 0));
  assert_eq!(canvas.index_to_point(7), point2(2, 1));
  assert_eq!(canvas.index_to_point(19), point2(4, 3));
  Ok(())
}

#[test] fn draw_disk_counts() -> Result<()> {
  let mut canvas = Canvas::new(100, 100)?;
  assert_eq!(canvas.draw_disk(Disk::new(point2(5, 5), 5), RED, ClipPolicy::RowStop), 81);
  assert_eq!(canvas.draw_disk(Disk::new(point2(0, 0), 5), RED, ClipPolicy::RowStop), 1);
  assert_eq!(canvas.draw_disk(Disk::new(point2(0, 0), 5), RED, ClipPolicy::Filter), 26);
  Ok(())
}

#[test] fn draw_then_copy_disk() -> Result<()> {
  let disk = Disk::new(point2(20, 15), 7);
  let mut painted = noise(40, 30)?;
  painted.draw_disk(disk, TEAL, ClipPolicy::RowStop);

  let background = noise(40, 30)?.blank_like();
  let mut copy = background.clone();
  copy.copy_disk(&painted, disk, ClipPolicy::RowStop)?;

  let inside = disk.scan(copy.size(), ClipPolicy::RowStop).collect::<HashSet<_>>();
  itertools::iproduct!(0..30u32, 0..40u32)
    .map(|(y, x)| point2(x, y))
    .for_each(|p| if inside.contains(&p) {
      assert_eq!(copy.pixel(p), TEAL);
      assert_eq!(copy.pixel(p), painted.pixel(p));
    } else {
      assert_eq!(copy.pixel(p), background.pixel(p));
    });
  Ok(())
}

#[test] fn copy_leaves_source_untouched() -> Result<()> {
  let source = noise(16, 16)?;
  let snapshot = source.clone();
  let mut dest = source.blank_like();
  dest.copy_disk(&source, Disk::new(point2(3, 12), 6), ClipPolicy::Filter)?;
  assert_eq!(source, snapshot);
  Ok(())
}

#[test] fn distance_identity_and_symmetry() -> Result<()> {
  let a = noise(8, 8)?;
  let b = {
    let mut b = a.clone();
    b.draw_disk(Disk::new(point2(4, 4), 3), RED, ClipPolicy::Filter);
    b
  };
  for pos in (0 .. a.as_raw().len()).step_by(CHANNELS) {
    assert_eq!(squared_color_distance(a.as_raw(), a.as_raw(), pos), 0);
    assert_eq!(
      squared_color_distance(a.as_raw(), b.as_raw(), pos),
      squared_color_distance(b.as_raw(), a.as_raw(), pos)
    );
  }
  Ok(())
}

#[test] fn distance_values() {
  let a = [10u8, 20, 30, 0, 0, 0];
  let b = [13u8, 16, 30, 255, 255, 255];
  assert_eq!(squared_color_distance(&a, &b, 0), 25);
  assert_eq!(squared_color_distance(&a, &b, 3), 195075);
}

#[test] fn disk_and_total_distance() -> Result<()> {
  let blank = Canvas::new(10, 10)?;
  let mut red = blank.clone();
  let disk = Disk::new(point2(5, 5), 2);
  let written = red.draw_disk(disk, RED, ClipPolicy::RowStop) as u64;

  assert_eq!(disk_distance(&blank, &red, disk, ClipPolicy::RowStop)?, written * 255 * 255);
  assert_eq!(total_distance(&blank, &red)?, written * 255 * 255);
  assert_eq!(total_distance(&red, &red)?, 0);
  assert_eq!(mean_squared_error(&blank, &red)?, (written * 255 * 255) as f64 / 100.0);
  Ok(())
}

#[test] fn total_distance_size_mismatch() -> Result<()> {
  let a = Canvas::new(4, 4)?;
  let b = Canvas::new(4, 5)?;
  assert!(matches!(total_distance(&a, &b), Err(Error::DimensionMismatch((4, 4), (4, 5)))));
  Ok(())
}

#[test] fn region_ops_reject_size_mismatch() -> Result<()> {
  let wide = noise(8, 4)?;
  let mut narrow = Canvas::new(4, 8)?;
  let disk = Disk::new(point2(2, 2), 2);

  assert!(matches!(
    narrow.copy_disk(&wide, disk, ClipPolicy::Filter),
    Err(Error::DimensionMismatch((4, 8), (8, 4)))
  ));
  assert_eq!(narrow, Canvas::new(4, 8)?);
  assert!(matches!(
    disk_distance(&wide, &narrow, disk, ClipPolicy::Filter),
    Err(Error::DimensionMismatch((8, 4), (4, 8)))
  ));
  Ok(())
}

#[test] fn scan_points_are_writable() -> Result<()> {
  let mut canvas = Canvas::new(3, 2)?;
  itertools::iproduct!(-4i64..8, -4i64..7)
    .for_each(|(x, y)| {
      let disk = Disk::new(point2(x, y), 4);
      assert!(disk.scan(canvas.size(), ClipPolicy::Filter).all(|p| in_bounds(p.to_i64(), canvas.size())));
      canvas.draw_disk(disk, RED, ClipPolicy::Filter);
    });
  Ok(())
}
