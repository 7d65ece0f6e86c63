use {
  super::PackingConfig,
  crate::geometry::Disc
};

/// Two committed discs close enough for a new disc to touch both.
/// `i == j` stands for a disc and its own periodic repeat.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProductivePair {
  pub i: usize,
  pub j: usize,
  pub gap: f64
}

/// Unordered set of productive pairs.
#[derive(Debug, Clone, Default)]
pub struct ProductivePairs {
  pairs: Vec<ProductivePair>
}

impl ProductivePairs {
  /// Full O(n²) scan over all pairs `i <= j`.
  pub fn find_all(discs: &[Disc], config: &PackingConfig, max_gap: f64) -> Self {
    let mut pairs = Self::default();
    let n = discs.len();
    for i in 0..n {
      for j in i..n {
        pairs.check_and_add(discs, i, j, config, max_gap);
      }
    }
    pairs
  }

  /// Pairs formed by the last disc of `discs` with every disc, itself included.
  pub fn add_with_new_disc(&mut self, discs: &[Disc], config: &PackingConfig, max_gap: f64) {
    let n = discs.len();
    if n < 2 {
      return;
    }
    for i in 0..n {
      self.check_and_add(discs, i, n - 1, config, max_gap);
    }
  }

  /// Forget pairs whose gap exceeds `max_gap`. Order is not preserved.
  pub fn filter(&mut self, max_gap: f64, config: &PackingConfig) {
    let mut i = 0;
    while i < self.pairs.len() {
      if self.pairs[i].gap > max_gap + config.tolerance {
        self.pairs.swap_remove(i);
      } else {
        i += 1;
      }
    }
  }

  fn check_and_add(&mut self, discs: &[Disc], i: usize, j: usize, config: &PackingConfig, max_gap: f64) {
    debug_assert!(i <= j);
    let (a, b) = (&discs[i], &discs[j]);
    let dist = if i != j {
      config.domain.minimum_image_distance(a, b)
    } else {
      config.domain.min_side()
    };
    let gap = dist - a.r - b.r;
    if gap <= max_gap + config.tolerance {
      self.pairs.push(ProductivePair { i, j, gap });
    }
  }

  pub fn len(&self) -> usize { self.pairs.len() }
  pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &ProductivePair> + '_ {
    self.pairs.iter()
  }
}
