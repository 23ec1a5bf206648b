use std::time::{SystemTime, UNIX_EPOCH};

/// Evaluate an expression and log how long it took.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    ::tracing::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Seed for runs that don't specify one: nanoseconds since the Unix epoch.
pub fn seed_from_time() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|t| t.as_nanos() as u64)
    .unwrap_or_default()
}
