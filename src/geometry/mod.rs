//! .
//!
//! The domain is a periodic rectangle `[0, width) × [0, height)` with the origin in the top-left
//! corner. All distances between discs follow the minimum-image convention: of all toroidal
//! copies of a pair, the closest one counts.

use {
  euclid::{Point2D, Vector2D, Size2D},
  anyhow::{Result, ensure}
};

pub mod apollonius;
pub mod periodic;
#[cfg(test)] mod tests;

pub use {
  apollonius::Degenerate,
  periodic::Shift
};

/// Coordinate basis of the periodic domain
#[derive(Debug, Copy, Clone)]
pub struct DomainSpace;

pub type P2 = Point2D<f64, DomainSpace>;
pub type V2 = Vector2D<f64, DomainSpace>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Disc {
  pub xy: P2,
  pub r: f64,
}

impl Disc {
  pub fn new(x: f64, y: f64, r: f64) -> Self {
    Self { xy: P2::new(x, y), r }
  }

  pub fn translate(self, offset: V2) -> Self {
    Self { xy: self.xy + offset, ..self }
  }

  /// Euclidean distance between centres, ignoring periodicity.
  pub fn distance_to(&self, other: &Self) -> f64 {
    self.xy.distance_to(other.xy)
  }
}

/// Periodic (toroidal) rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
  pub size: Size2D<f64, DomainSpace>
}

impl Domain {
  pub fn new(width: f64, height: f64) -> Result<Self> {
    ensure!(width.is_finite() && height.is_finite(), "domain size must be finite, got {width}×{height}");
    ensure!(width > 0.0 && height > 0.0, "domain size must be positive, got {width}×{height}");
    Ok(Self { size: Size2D::new(width, height) })
  }

  pub fn width(&self) -> f64 { self.size.width }
  pub fn height(&self) -> f64 { self.size.height }

  pub fn min_side(&self) -> f64 {
    self.size.width.min(self.size.height)
  }

  /// Shortest displacement `a - b` over all periodic images, each component in `[-L/2, L/2)`.
  pub fn minimum_image_delta(&self, a: P2, b: P2) -> V2 {
    let reduce = |d: f64, l: f64| (d + 0.5 * l).rem_euclid(l) - 0.5 * l;
    let d = a - b;
    V2::new(
      reduce(d.x, self.size.width),
      reduce(d.y, self.size.height)
    )
  }

  pub fn minimum_image_distance(&self, a: &Disc, b: &Disc) -> f64 {
    self.minimum_image_delta(a.xy, b.xy).length()
  }

  /// Whether the point lies in the base rectangle, extended by `slack` on every side.
  pub fn contains(&self, p: P2, slack: f64) -> bool {
    p.x >= -slack && p.x <= self.size.width + slack &&
    p.y >= -slack && p.y <= self.size.height + slack
  }

  /// The periodic image of `p` inside `[0, width) × [0, height)`.
  pub fn wrap(&self, p: P2) -> P2 {
    P2::new(
      p.x.rem_euclid(self.size.width),
      p.y.rem_euclid(self.size.height)
    )
  }
}
