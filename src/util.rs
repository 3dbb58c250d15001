/// Evaluate `$expr` and log how long it took.
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
pub(crate) use profile;

/// Human readable byte count, e.g. `703.13 KB`.
pub fn file_size(bytes: u64) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}
