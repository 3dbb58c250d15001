//! Distance functions driving nearest-seed classification.
//!
//! Only the ordering of distances matters to the rasterizer, so metrics may return any
//! order-preserving surrogate of the true distance.

/// Comparison function between a pixel and a seed, given their absolute per-axis deltas.
pub trait Metric {
  fn distance(&self, dx: u32, dy: u32) -> f64;

  /// Lower bound of `distance(delta, e)` and of `distance(e, delta)` for every `e`.
  /// Lets the rasterizer skip seeds that can't beat the current minimum.
  fn axis_bound(&self, delta: u32) -> f64;
}

impl<M: Metric + ?Sized> Metric for &M {
  fn distance(&self, dx: u32, dy: u32) -> f64 { (**self).distance(dx, dy) }
  fn axis_bound(&self, delta: u32) -> f64 { (**self).axis_bound(delta) }
}

/// Minkowski distance of order `p`, without the final `p`-th root: `dx^p + dy^p`.
///
/// - `p = 1`: Manhattan
/// - `p = 2`: squared Euclidean
/// - `p → ∞`: approaches Chebyshev
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Minkowski {
  p: f64
}

impl Default for Minkowski {
  fn default() -> Self {
    Self::euclidean()
  }
}

impl Minkowski {
  /// `p` must be positive and finite.
  pub fn new(p: f64) -> Self {
    debug_assert!(p > 0.0 && p.is_finite(), "invalid Minkowski exponent: {p}");
    Self { p }
  }

  pub fn manhattan() -> Self {
    Self::new(1.0)
  }

  pub fn euclidean() -> Self {
    Self::new(2.0)
  }

  pub fn exponent(&self) -> f64 {
    self.p
  }

  #[inline]
  fn term(&self, delta: u32) -> f64 {
    let delta = delta as f64;
    if self.p == 1.0 {
      delta
    } else if self.p == 2.0 {
      delta * delta
    } else {
      delta.powf(self.p)
    }
  }
}

impl Metric for Minkowski {
  #[inline]
  fn distance(&self, dx: u32, dy: u32) -> f64 {
    self.term(dx) + self.term(dy)
  }

  /// For `p >= 1` the raw delta already bounds `delta^p` from below (integer deltas), so the
  /// power is not evaluated. Below 1 that no longer holds and the power term is used.
  #[inline]
  fn axis_bound(&self, delta: u32) -> f64 {
    if self.p >= 1.0 {
      delta as f64
    } else {
      self.term(delta)
    }
  }
}
