use {
  crate::{
    error::{Error, Result},
    geometry::{ClipPolicy, Disk, PixelSpace}
  },
  euclid::{Point2D, Size2D},
  std::fmt::{Debug, Formatter}
};

pub mod metric;
#[cfg(test)] mod tests;

/// Bytes per pixel: red, green, blue. No alpha.
pub const CHANNELS: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pixel(pub [u8; CHANNELS]);

impl Pixel {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self([r, g, b])
  }
}

impl From<[u8; CHANNELS]> for Pixel {
  fn from(rgb: [u8; CHANNELS]) -> Self { Self(rgb) }
}

/// Row-major RGB framebuffer, origin in the top-left corner.
///
/// Width and height are never zero, and the buffer always holds exactly
/// `3 * width * height` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
  data: Vec<u8>,
  size: Size2D<u32, PixelSpace>
}

impl Canvas {
  /// A canvas in the neutral state: every channel zero.
  pub fn new(width: u32, height: u32) -> Result<Self> {
    let len = byte_len(width, height)?;
    Ok(Self {
      data: vec![0; len],
      size: Size2D::new(width, height)
    })
  }

  pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
    let expected = byte_len(width, height)?;
    if data.len() != expected {
      return Err(Error::BufferSize { expected, actual: data.len() });
    }
    Ok(Self { data, size: Size2D::new(width, height) })
  }

  /// Neutral canvas with the same dimensions as `self`.
  pub fn blank_like(&self) -> Self {
    Self {
      data: vec![0; self.data.len()],
      size: self.size
    }
  }

  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }
  pub fn as_raw(&self) -> &[u8] { &self.data }
  pub fn into_raw(self) -> Vec<u8> { self.data }

  /// Byte offset of the first channel of `point`.
  #[inline]
  pub fn offset(&self, point: Point2D<u32, PixelSpace>) -> usize {
    CHANNELS * (self.size.width as usize * point.y as usize + point.x as usize)
  }

  /// Inverse of the linear pixel index used for sampling: `index = width * y + x`.
  pub fn index_to_point(&self, index: usize) -> Point2D<u32, PixelSpace> {
    let width = self.size.width as usize;
    Point2D::new((index % width) as u32, (index / width) as u32)
  }

  pub fn pixel_count(&self) -> usize {
    self.size.width as usize * self.size.height as usize
  }

  /// Panics if `point` is out of bounds.
  pub fn pixel(&self, point: Point2D<u32, PixelSpace>) -> Pixel {
    let pos = self.offset(point);
    let mut rgb = [0; CHANNELS];
    rgb.copy_from_slice(&self.data[pos .. pos + CHANNELS]);
    Pixel(rgb)
  }

  /// Panics if `point` is out of bounds; callers guard with [`in_bounds`](crate::geometry::in_bounds)
  /// or obtain points from [`Disk::scan`].
  pub fn put_pixel(&mut self, point: Point2D<u32, PixelSpace>, pixel: Pixel) {
    let pos = self.offset(point);
    self.data[pos .. pos + CHANNELS].copy_from_slice(&pixel.0);
  }

  /// Fill the disk with a solid color, returns the number of pixels written.
  pub fn draw_disk(&mut self, disk: Disk, pixel: Pixel, clip: ClipPolicy) -> usize {
    let size = self.size;
    disk.scan(size, clip).fold(0, |n, point| {
      self.put_pixel(point, pixel);
      n + 1
    })
  }

  /// Copy the disk region of `source` into `self`, returns the number of pixels copied.
  ///
  /// Fails with [`Error::DimensionMismatch`] unless both canvases have the same dimensions.
  pub fn copy_disk(&mut self, source: &Canvas, disk: Disk, clip: ClipPolicy) -> Result<usize> {
    self.ensure_same_size(source)?;
    let size = self.size;
    Ok(disk.scan(size, clip).fold(0, |n, point| {
      let pos = self.offset(point);
      self.data[pos .. pos + CHANNELS].copy_from_slice(&source.data[pos .. pos + CHANNELS]);
      n + 1
    }))
  }

  /// Fails with [`Error::DimensionMismatch`] unless both canvases have equal dimensions.
  pub fn ensure_same_size(&self, other: &Canvas) -> Result<()> {
    if self.size != other.size {
      return Err(Error::DimensionMismatch(
        self.size.to_tuple(),
        other.size.to_tuple()
      ));
    }
    Ok(())
  }
}

impl Debug for Canvas {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    f.debug_struct("Canvas")
      .field("width", &self.size.width)
      .field("height", &self.size.height)
      .field("size", &self.data.len().file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}

fn byte_len(width: u32, height: u32) -> Result<usize> {
  if width == 0 || height == 0 {
    return Err(Error::EmptyImage);
  }
  Ok(CHANNELS * width as usize * height as usize)
}
