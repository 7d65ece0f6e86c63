//! The packing engine.
//!
//! Growth always commits the largest admissible candidate, so the committed radii never
//! increase. After each commit only the triples formed by the new disc and a
//! [productive pair](productive_pairs::ProductivePair) are searched for new candidates, which
//! keeps a step linear in the number of pairs instead of quadratic in the number of discs.

use {
  crate::geometry::{periodic, Disc, Domain, Shift},
  candidates::{CandidatePool, Candidate},
  productive_pairs::ProductivePairs,
  seed::{RandomSource, SeedParams},
  anyhow::{Result, ensure},
  rand::SeedableRng,
  std::sync::atomic::{AtomicBool, Ordering}
};

pub mod candidates;
pub mod productive_pairs;
pub mod seed;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PackingConfig {
  pub domain: Domain,
  pub radius_min: f64,
  pub separation: f64,
  /// Absolute slack of the contact tests
  pub tolerance: f64,
  /// Search the initial triples on the rayon pool
  pub parallel_bootstrap: bool
}

impl PackingConfig {
  pub fn new(domain: Domain, radius_min: f64, separation: f64) -> Result<Self> {
    let config = Self {
      domain,
      radius_min,
      separation,
      tolerance: 0.1,
      parallel_bootstrap: true
    };
    config.validate()?;
    Ok(config)
  }

  pub fn with_tolerance(mut self, tolerance: f64) -> Self {
    self.tolerance = tolerance;
    self
  }

  pub fn with_parallel_bootstrap(mut self, parallel: bool) -> Self {
    self.parallel_bootstrap = parallel;
    self
  }

  pub fn validate(&self) -> Result<()> {
    let Domain { size } = self.domain;
    ensure!(size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0,
      "degenerate domain {}×{}", size.width, size.height);
    ensure!(self.radius_min.is_finite() && self.radius_min > 0.0,
      "minimum radius must be positive, got {}", self.radius_min);
    ensure!(self.separation.is_finite() && self.separation >= 0.0,
      "separation must be non-negative, got {}", self.separation);
    ensure!(self.tolerance.is_finite() && self.tolerance >= 0.0,
      "tolerance must be non-negative, got {}", self.tolerance);
    Ok(())
  }

  fn max_gap(&self, max_r: f64) -> f64 {
    2.0 * (max_r + self.separation)
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
  Bootstrapping,
  Growing,
  /// No candidate is left; the packing is complete.
  Exhausted
}

#[derive(Debug, Clone)]
pub struct DiscPacking {
  config: PackingConfig,
  discs: Vec<Disc>,
  seed_count: usize,
  shifts: Vec<Shift>,
  candidates: CandidatePool,
  pairs: ProductivePairs,
  state: State
}

impl DiscPacking {
  /// Start from the given seed discs.
  pub fn new(config: PackingConfig, seeds: Vec<Disc>) -> Result<Self> {
    config.validate()?;
    seed::validate_seeds(&config.domain, &seeds, config.separation, config.tolerance)?;
    Ok(Self {
      shifts: periodic::enumerate_shifts(&config.domain),
      seed_count: seeds.len(),
      discs: seeds,
      candidates: CandidatePool::new(),
      pairs: ProductivePairs::default(),
      state: State::Bootstrapping,
      config
    })
  }

  /// Start from randomly placed seeds.
  pub fn with_random_seeds(config: PackingConfig, params: &SeedParams, rng: &mut impl RandomSource) -> Result<Self> {
    config.validate()?;
    params.validate()?;
    let seeds = seed::place_seeds(&config.domain, params, config.separation, rng);
    Self::new(config, seeds)
  }

  /// Start from randomly placed seeds, drawn from a PCG generator seeded with `seed`.
  pub fn from_seed(config: PackingConfig, params: &SeedParams, seed: u64) -> Result<Self> {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
    Self::with_random_seeds(config, params, &mut rng)
  }

  pub fn config(&self) -> &PackingConfig { &self.config }
  pub fn state(&self) -> State { self.state }

  /// Seeds followed by the committed discs, in commit order.
  pub fn discs(&self) -> &[Disc] { &self.discs }
  pub fn seeds(&self) -> &[Disc] { &self.discs[..self.seed_count] }
  pub fn committed(&self) -> &[Disc] { &self.discs[self.seed_count..] }

  pub fn candidates(&self) -> &CandidatePool { &self.candidates }
  pub fn productive_pairs(&self) -> &ProductivePairs { &self.pairs }

  pub fn into_discs(self) -> Vec<Disc> { self.discs }

  /// Build the initial candidate pool and productive pairs. Does nothing past the first call.
  pub fn bootstrap(&mut self) {
    if self.state != State::Bootstrapping {
      return;
    }
    self.candidates = candidates::bootstrap_candidates(&self.discs, &self.shifts, &self.config);
    match self.candidates.largest() {
      Some(largest) => {
        let max_gap = self.config.max_gap(largest.disc.r);
        self.pairs = ProductivePairs::find_all(&self.discs, &self.config, max_gap);
        self.state = State::Growing;
      }
      None => self.state = State::Exhausted
    }
    log::debug!(
      "bootstrap done: {} candidates, {} productive pairs",
      self.candidates.len(),
      self.pairs.len()
    );
  }

  /// Commit the largest candidate and refresh the pool. `None` once exhausted.
  pub fn step(&mut self) -> Option<Disc> {
    self.bootstrap();
    if self.state == State::Exhausted {
      return None;
    }
    let Some(Candidate { disc, .. }) = self.candidates.take_largest() else {
      self.exhaust();
      return None;
    };

    // nothing found from here on can be larger
    let max_r = disc.r;
    let new_index = self.discs.len();
    self.discs.push(disc);
    self.candidates.remove_inadmissible(&disc, &self.config);

    let mut found = vec![];
    for pair in self.pairs.iter() {
      candidates::triple_candidates(
        &self.discs,
        [pair.i, pair.j, new_index],
        &self.shifts,
        &self.config,
        max_r,
        &mut found
      );
    }
    self.candidates.extend(found);
    log::trace!("committed #{new_index} {disc:?}, {} candidates left", self.candidates.len());

    if self.candidates.is_empty() {
      self.exhaust();
    } else {
      self.candidates.sort();
      if let Some(largest) = self.candidates.largest() {
        let max_gap = self.config.max_gap(largest.disc.r);
        self.pairs.filter(max_gap, &self.config);
        self.pairs.add_with_new_disc(&self.discs, &self.config, max_gap);
      }
    }
    Some(disc)
  }

  fn exhaust(&mut self) {
    self.state = State::Exhausted;
    log::debug!("exhausted after {} commits", self.discs.len() - self.seed_count);
  }

  /// Lazily commit discs; stopping the iteration leaves a valid packing behind.
  pub fn iter(&mut self) -> PackingIter<'_> {
    PackingIter { packing: self }
  }

  /// Grow until no candidate is left.
  pub fn run(mut self) -> Vec<Disc> {
    while self.step().is_some() {}
    self.into_discs()
  }

  /// Grow until no candidate is left or `cancel` is raised; checked after every commit.
  pub fn run_cancellable(mut self, cancel: &AtomicBool) -> Vec<Disc> {
    while !cancel.load(Ordering::Relaxed) && self.step().is_some() {}
    self.into_discs()
  }
}

pub struct PackingIter<'a> {
  packing: &'a mut DiscPacking
}

impl Iterator for PackingIter<'_> {
  type Item = Disc;

  fn next(&mut self) -> Option<Disc> {
    self.packing.step()
  }
}
