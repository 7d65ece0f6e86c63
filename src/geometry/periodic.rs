use {
  super::{Disc, Domain, V2},
  itertools::iproduct
};

/// Offsets moving each disc of a triple to one of its neighbouring periodic images.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shift(pub [V2; 3]);

impl Shift {
  pub fn apply(&self, discs: [Disc; 3]) -> [Disc; 3] {
    [
      discs[0].translate(self.0[0]),
      discs[1].translate(self.0[1]),
      discs[2].translate(self.0[2]),
    ]
  }

  pub fn is_identity(&self) -> bool {
    self.0.iter().all(|v| *v == V2::zero())
  }
}

/// Combinations of image shifts under which three discs may be mutually tangent.
///
/// At least one disc stays in the base rectangle, and no two discs end up more than one
/// rectangle apart along either axis: a copy two steps away always has a closer copy in between,
/// which is found by another combination.
pub fn enumerate_shifts(domain: &Domain) -> Vec<Shift> {
  let steps = -1i32..=1;
  let neighbours = |a: i32, b: i32| (a - b).abs() <= 1;
  let offset = |ix: i32, iy: i32| V2::new(
    ix as f64 * domain.width(),
    iy as f64 * domain.height()
  );

  iproduct!(
    steps.clone(), steps.clone(),
    steps.clone(), steps.clone(),
    steps.clone(), steps
  )
    .filter(|&(iy, ix, jy, jx, ky, kx)|
      neighbours(iy, jy) && neighbours(ix, jx) &&
      neighbours(iy, ky) && neighbours(ix, kx) &&
      neighbours(jy, ky) && neighbours(jx, kx))
    .filter(|&(iy, ix, jy, jx, ky, kx)|
      (iy, ix) == (0, 0) || (jy, jx) == (0, 0) || (ky, kx) == (0, 0))
    .map(|(iy, ix, jy, jx, ky, kx)| Shift([
      offset(ix, iy),
      offset(jx, jy),
      offset(kx, ky)
    ]))
    .collect()
}
