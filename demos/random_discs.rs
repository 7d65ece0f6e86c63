/// Grow a packing from random seeds and save it as flat discs of random height.
/// Discs are produced lazily, the largest first.

use {
  disc_packing::{
    geometry::Domain,
    solver::{DiscPacking, PackingConfig, seed::SeedParams},
    drawing::{self, HeightParams, OutputMode}
  },
  anyhow::Result,
  rand::prelude::*
};

fn main() -> Result<()> {
  let path = "out.png";
  let config = PackingConfig::new(Domain::new(1024.0, 1024.0)?, 4.0, 2.0)?;
  let params = SeedParams { radius_init: 60.0, radius_init_noise: 0.3, ..Default::default() };
  let mut packing = DiscPacking::from_seed(config, &params, 0)?;

  let t0 = std::time::Instant::now();
  let committed = packing.iter()
    .take(20000)
    .count();
  println!("{} seeds, {} discs committed, {}ms", packing.seeds().len(), committed, t0.elapsed().as_millis());

  let discs = packing.into_discs();
  let mut rng = rand_pcg::Pcg64::seed_from_u64(1);
  let heights = drawing::disc_heights(discs.len(), &HeightParams { height: 1.0, height_noise: 0.5 }, &mut rng);
  drawing::to_luma8(&drawing::render(&discs, &heights, &config.domain, OutputMode::Discs)?)
    .save(path)?;
  Ok(())
}
