//! Initial discs, placed by rejection sampling.

use {
  crate::geometry::{Disc, Domain, P2},
  anyhow::{Result, ensure},
  rand::Rng,
  rand_distr::StandardNormal
};

/// Source of the random numbers driving seed placement and height jitter.
pub trait RandomSource {
  /// Uniform in `[0, 1)`
  fn uniform(&mut self) -> f64;
  /// Normal with zero mean
  fn gaussian(&mut self, sigma: f64) -> f64;
}

impl<R: Rng> RandomSource for R {
  fn uniform(&mut self) -> f64 {
    self.gen::<f64>()
  }
  fn gaussian(&mut self, sigma: f64) -> f64 {
    sigma * self.sample::<f64, _>(StandardNormal)
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeedParams {
  pub radius_init: f64,
  /// Log-normal spread of the seed radius
  pub radius_init_noise: f64,
  /// Stop after this many rejections in a row
  pub max_failures: u32,
  pub max_count: Option<usize>
}

impl Default for SeedParams {
  fn default() -> Self {
    SeedParams {
      radius_init: 30.0,
      radius_init_noise: 0.0,
      max_failures: 15,
      max_count: None
    }}}

impl SeedParams {
  pub fn validate(&self) -> Result<()> {
    ensure!(self.radius_init.is_finite() && self.radius_init > 0.0,
      "initial radius must be positive, got {}", self.radius_init);
    ensure!(self.radius_init_noise.is_finite() && self.radius_init_noise >= 0.0,
      "initial radius spread must be non-negative, got {}", self.radius_init_noise);
    ensure!(self.max_failures > 0, "at least one placement attempt is required");
    Ok(())
  }
}

fn overlaps(domain: &Domain, a: &Disc, b: &Disc, separation: f64) -> bool {
  let s = a.r + b.r + separation;
  domain.minimum_image_delta(a.xy, b.xy).square_length() <= s * s
}

/// Throw discs at random positions until `max_failures` consecutive throws hit an
/// already placed one. Running out of room is the normal way to stop.
pub fn place_seeds(
  domain: &Domain,
  params: &SeedParams,
  separation: f64,
  rng: &mut impl RandomSource
) -> Vec<Disc> {
  let mut seeds: Vec<Disc> = vec![];
  let mut failures = 0;

  while failures < params.max_failures && params.max_count.map_or(true, |max| seeds.len() < max) {
    let xy = P2::new(rng.uniform() * domain.width(), rng.uniform() * domain.height());
    let mut r = params.radius_init;
    if params.radius_init_noise > 0.0 {
      r *= rng.gaussian(params.radius_init_noise).exp();
    }
    let disc = Disc { xy, r };

    if seeds.iter().any(|s| overlaps(domain, &disc, s, separation)) {
      failures += 1;
    } else {
      seeds.push(disc);
      failures = 0;
    }
  }
  log::debug!("placed {} seeds", seeds.len());
  seeds
}

/// Check a caller-supplied seed set: positive radii, centres inside the domain, no overlaps.
pub fn validate_seeds(domain: &Domain, seeds: &[Disc], separation: f64, tolerance: f64) -> Result<()> {
  for (i, s) in seeds.iter().enumerate() {
    ensure!(s.r.is_finite() && s.r > 0.0, "seed #{i} has invalid radius {}", s.r);
    ensure!(domain.contains(s.xy, 0.0), "seed #{i} at {:?} lies outside the domain", s.xy);
    for (j, t) in seeds[..i].iter().enumerate() {
      let dist = domain.minimum_image_distance(s, t);
      ensure!(dist + tolerance >= s.r + t.r + separation, "seeds #{j} and #{i} overlap");
    }
  }
  Ok(())
}
