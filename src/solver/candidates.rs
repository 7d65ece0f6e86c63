//! Candidate discs: generation from triples, admission, and the pool they wait in.

use {
  super::PackingConfig,
  crate::geometry::{apollonius, Disc, Shift},
  std::{
    cmp::Ordering,
    ops::Range,
    sync::{Mutex, PoisonError}
  },
  rayon::prelude::*
};

/// Centres of candidates come from tangency with periodic images, so they are only nominally
/// inside the base rectangle.
const CENTRE_SLACK: f64 = 1e-3;

/// A disc proposed by the solver, not yet part of the packing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
  pub disc: Disc,
  /// Indices of the discs the candidate touches
  pub origin: [usize; 3],
  /// Index into the shift table
  pub shift: usize
}

impl Candidate {
  /// Largest radius first; equal radii are ordered by originating triple, then by shift.
  pub fn priority(&self, other: &Self) -> Ordering {
    other.disc.r.total_cmp(&self.disc.r)
      .then_with(|| self.origin.cmp(&other.origin))
      .then_with(|| self.shift.cmp(&other.shift))
  }
}

/// Whether a solver result (at full contact radius, i.e. including separation) may enter the pool.
pub fn is_admissible(discs: &[Disc], candidate: &Disc, config: &PackingConfig, max_r: f64) -> bool {
  let PackingConfig { domain, radius_min, separation, tolerance, .. } = *config;

  if !domain.contains(candidate.xy, CENTRE_SLACK) {
    return false;
  }
  if candidate.r < radius_min + separation || candidate.r > max_r + separation {
    return false;
  }
  discs.iter().all(|d| {
    let dist = domain.minimum_image_distance(candidate, d);
    !(dist + tolerance < d.r + candidate.r || dist < d.r + radius_min + separation)
  })
}

fn too_far(a: &Disc, b: &Disc, max_gap: f64, tolerance: f64) -> bool {
  let limit = a.r + b.r + max_gap + tolerance;
  (a.xy - b.xy).square_length() > limit * limit
}

/// Try every shift combination of the triple `origin`, appending admissible candidates to `out`.
pub fn triple_candidates(
  discs: &[Disc],
  origin: [usize; 3],
  shifts: &[Shift],
  config: &PackingConfig,
  max_r: f64,
  out: &mut Vec<Candidate>
) {
  let max_gap = 2.0 * (max_r + config.separation);
  let triple = origin.map(|i| discs[i]);

  for (s, shift) in shifts.iter().enumerate() {
    let [a, b, c] = shift.apply(triple);
    if too_far(&a, &b, max_gap, config.tolerance)
      || too_far(&b, &c, max_gap, config.tolerance)
      || too_far(&c, &a, max_gap, config.tolerance) {
      continue;
    }
    // the solution touches the others at full size; it shrinks by the separation once admitted
    let Ok(mut disc) = apollonius::solve(&a, &b, &c) else { continue };
    if !is_admissible(discs, &disc, config, max_r) {
      continue;
    }
    disc.r -= config.separation;
    out.push(Candidate { disc, origin, shift: s });
  }
}

/// Split the outer index `0..n` of the triple loop `i <= j <= k < n` into `workers` ranges of
/// roughly equal work. Later `i` carry far fewer `(j, k)` completions, so the split follows the
/// cumulative work count rather than the index.
pub fn partition_work(n: usize, workers: usize) -> Vec<Range<usize>> {
  if n == 0 {
    return vec![];
  }
  let workers = workers.max(1) as u64;

  let mut counts: Vec<u64> = (0..n)
    .map(|i| (i..n).map(|j| (n + 1 - j) as u64).sum())
    .collect();
  for i in 1..n {
    counts[i] += counts[i - 1];
  }
  let total = counts[n - 1];

  (0..workers)
    .map(|t| {
      let (work_from, work_to) = (total * t / workers, total * (t + 1) / workers);
      let start = counts.iter()
        .position(|&c| c > work_from)
        .unwrap_or(n);
      let end = counts[start..].iter()
        .position(|&c| c > work_to)
        .map_or(n, |p| start + p);
      start..end
    })
    .collect()
}

fn search_range(
  discs: &[Disc],
  range: Range<usize>,
  shifts: &[Shift],
  config: &PackingConfig,
  max_r: f64
) -> Vec<Candidate> {
  let n = discs.len();
  let mut found = vec![];
  for i in range {
    for j in i..n {
      for k in j..n {
        triple_candidates(discs, [i, j, k], shifts, config, max_r, &mut found);
      }
    }
  }
  found
}

/// Initial candidate pool from all triples of `discs`, sorted.
pub fn bootstrap_candidates(discs: &[Disc], shifts: &[Shift], config: &PackingConfig) -> CandidatePool {
  let max_r = 0.5 * config.domain.min_side();
  let workers = if config.parallel_bootstrap { rayon::current_num_threads() } else { 1 };
  let ranges = partition_work(discs.len(), workers);
  log::debug!("bootstrap: {} discs, work ranges {:?}", discs.len(), ranges);

  let candidates = if config.parallel_bootstrap {
    let shared = Mutex::new(vec![]);
    ranges.into_par_iter().for_each(|range| {
      let mut found = search_range(discs, range, shifts, config, max_r);
      shared.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .append(&mut found);
    });
    shared.into_inner().unwrap_or_else(PoisonError::into_inner)
  } else {
    ranges.into_iter()
      .flat_map(|range| search_range(discs, range, shifts, config, max_r))
      .collect()
  };

  let mut pool = CandidatePool { candidates };
  pool.sort();
  pool
}

/// Candidates waiting for commit.
///
/// Between [`sort`](CandidatePool::sort) calls the order is arbitrary: removal swaps the last
/// element into the hole.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
  candidates: Vec<Candidate>
}

impl CandidatePool {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize { self.candidates.len() }
  pub fn is_empty(&self) -> bool { self.candidates.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &Candidate> + '_ {
    self.candidates.iter()
  }

  pub fn push(&mut self, candidate: Candidate) {
    self.candidates.push(candidate);
  }

  pub fn extend(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
    self.candidates.extend(candidates);
  }

  /// Remove the candidate at `index`, moving the last one in its place. Order is not preserved.
  pub fn remove_swap(&mut self, index: usize) -> Candidate {
    self.candidates.swap_remove(index)
  }

  /// Drop every candidate that would collide with the freshly committed `disc`.
  pub fn remove_inadmissible(&mut self, disc: &Disc, config: &PackingConfig) {
    let PackingConfig { domain, radius_min, separation, tolerance, .. } = *config;
    let mut i = 0;
    while i < self.candidates.len() {
      let c = &self.candidates[i].disc;
      let dist = domain.minimum_image_distance(c, disc);
      if dist + tolerance < disc.r + c.r + separation || dist < disc.r + radius_min + separation {
        self.remove_swap(i);
      } else {
        i += 1;
      }
    }
  }

  pub fn sort(&mut self) {
    self.candidates.sort_unstable_by(Candidate::priority);
  }

  /// The largest candidate; only meaningful right after [`sort`](CandidatePool::sort).
  pub fn largest(&self) -> Option<&Candidate> {
    self.candidates.first()
  }

  pub fn take_largest(&mut self) -> Option<Candidate> {
    (!self.candidates.is_empty()).then(|| self.remove_swap(0))
  }
}
