//! Disc externally tangent to three given discs.
//!
//! Subtracting the tangency equations `(x - x_i)² + (y - y_i)² = (r + r_i)²` pairwise cancels
//! the quadratic terms, so the centre is an affine function of the radius:
//! `x = Ax + Bx·r`, `y = Ay + By·r`. Substituting it back into the three equations (summed)
//! leaves a quadratic `α·r² + β·r + γ = 0` for the radius alone.

use {
  super::Disc,
  std::fmt
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Degenerate {
  /// Centres are (almost) on one line; the tangent disc would be huge or not exist.
  Collinear,
  /// The radius equation has no usable real root.
  NoRealSolution
}

impl fmt::Display for Degenerate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Degenerate::Collinear => f.write_str("disc centres are collinear"),
      Degenerate::NoRealSolution => f.write_str("no real tangent disc"),
    }
  }
}

impl std::error::Error for Degenerate {}

#[inline]
fn cyclic_prod1(x: [f64; 3], y: [f64; 3]) -> f64 {
  x[0] * (y[2] - y[1]) + x[1] * (y[0] - y[2]) + x[2] * (y[1] - y[0])
}

#[inline]
fn cyclic_prod2(x: [f64; 3], y: [f64; 3]) -> f64 {
  x[0] * (y[2] - y[1]) * (y[2] + y[1])
    + x[1] * (y[0] - y[2]) * (y[0] + y[2])
    + x[2] * (y[1] - y[0]) * (y[1] + y[0])
}

#[inline]
fn cyclic_prod3(x: [f64; 3]) -> f64 {
  (x[2] - x[1]) * (x[1] - x[0]) * (x[0] - x[2])
}

#[inline]
fn sum_sq(x: [f64; 3]) -> f64 {
  x[0] * x[0] + x[1] * x[1] + x[2] * x[2]
}

/// Solve the Apollonius problem for the externally tangent disc.
pub fn solve(a: &Disc, b: &Disc, c: &Disc) -> Result<Disc, Degenerate> {
  let x = [a.xy.x, b.xy.x, c.xy.x];
  let y = [a.xy.y, b.xy.y, c.xy.y];
  let r = [a.r, b.r, c.r];

  let det = cyclic_prod1(x, y);
  let scale = sum_sq([1.0 / a.r, 1.0 / b.r, 1.0 / c.r]);
  if !(det.abs() >= 1e-10 * scale) {
    return Err(Degenerate::Collinear);
  }

  let ax = 0.5 / det * (cyclic_prod2(y, r) - cyclic_prod2(y, x) - cyclic_prod3(y));
  let bx = cyclic_prod1(y, r) / det;
  let ay = -0.5 / det * (cyclic_prod2(x, r) - cyclic_prod2(x, y) - cyclic_prod3(x));
  let by = -cyclic_prod1(x, r) / det;

  let (sx, sy, sr) = (x.iter().sum::<f64>(), y.iter().sum::<f64>(), r.iter().sum::<f64>());
  let (qx, qy, qr) = (sum_sq(x), sum_sq(y), sum_sq(r));

  let mut alpha = 3.0 * (bx * bx + by * by - 1.0);
  let mut beta = 2.0 * bx * (3.0 * ax - sx) + 2.0 * by * (3.0 * ay - sy) - 2.0 * sr;
  let mut gamma = ax * (3.0 * ax - 2.0 * sx) + ay * (3.0 * ay - 2.0 * sy) + (qx + qy - qr);
  if alpha < 0.0 {
    alpha = -alpha;
    beta = -beta;
    gamma = -gamma;
  }

  let discriminant = beta * beta - 4.0 * alpha * gamma;
  if !(discriminant > 0.0) {
    return Err(Degenerate::NoRealSolution);
  }
  // avoids cancellation when γ is small
  let radius = -2.0 * gamma / (beta + discriminant.sqrt());
  let solution = Disc::new(ax + bx * radius, ay + by * radius, radius);

  if solution.r.is_finite() && solution.xy.x.is_finite() && solution.xy.y.is_finite() {
    Ok(solution)
  } else {
    Err(Degenerate::NoRealSolution)
  }
}
