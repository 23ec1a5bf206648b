use {
  crate::{
    canvas::{Canvas, Pixel, metric::squared_color_distance},
    error::Result,
    geometry::{ClipPolicy, Disk}
  }
};

/// Which canvas won a [`reconcile`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
  /// Proposal region was copied onto the accepted canvas.
  Accepted,
  /// Accepted region was copied back onto the proposal.
  Rejected
}

/// Make `proposal` and `accepted` agree on `disk`.
///
/// Sums, over the disk, the distance of the proposal to the accepted canvas and the distance of
/// the proposal to `source`. If the proposal is strictly closer to the source than to the
/// accepted canvas, its region is copied onto `accepted`, otherwise `accepted` is copied back
/// onto it. The accepted canvas is never compared to the source.
///
/// Fails with [`Error::DimensionMismatch`](crate::error::Error::DimensionMismatch) unless both
/// canvases have the dimensions of `source`; neither is modified in that case.
pub fn reconcile(
  disk: Disk,
  proposal: &mut Canvas,
  accepted: &mut Canvas,
  source: &Canvas,
  clip: ClipPolicy
) -> Result<Verdict> {
  proposal.ensure_same_size(source)?;
  accepted.ensure_same_size(source)?;
  let (to_accepted, to_source) = disk.scan(source.size(), clip)
    .map(|point| source.offset(point))
    .fold((0u64, 0u64), |(to_accepted, to_source), pos| (
      to_accepted + squared_color_distance(proposal.as_raw(), accepted.as_raw(), pos) as u64,
      to_source + squared_color_distance(proposal.as_raw(), source.as_raw(), pos) as u64
    ));

  if to_source < to_accepted {
    accepted.copy_disk(proposal, disk, clip)?;
    Ok(Verdict::Accepted)
  } else {
    proposal.copy_disk(accepted, disk, clip)?;
    Ok(Verdict::Rejected)
  }
}

/// The two working canvases of a run, in their fixed roles.
#[derive(Debug, Clone)]
pub struct CanvasPair {
  /// Receives every fresh stamp.
  pub proposal: Canvas,
  /// Accumulates the regions that won reconciliation; the final image.
  pub accepted: Canvas
}

impl CanvasPair {
  /// Two neutral canvases with the dimensions of `source`.
  pub fn for_source(source: &Canvas) -> Self {
    Self {
      proposal: source.blank_like(),
      accepted: source.blank_like()
    }
  }

  pub fn from_canvases(proposal: Canvas, accepted: Canvas) -> Result<Self> {
    proposal.ensure_same_size(&accepted)?;
    Ok(Self { proposal, accepted })
  }

  pub fn stamp(&mut self, disk: Disk, pixel: Pixel, clip: ClipPolicy) -> usize {
    self.proposal.draw_disk(disk, pixel, clip)
  }

  pub fn reconcile(&mut self, disk: Disk, source: &Canvas, clip: ClipPolicy) -> Result<Verdict> {
    reconcile(disk, &mut self.proposal, &mut self.accepted, source, clip)
  }

  pub fn into_accepted(self) -> Canvas {
    self.accepted
  }
}
