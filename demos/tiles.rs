/// Random tiles: a packing with the gaps between discs closed up, like cobblestones.
/// Growth can be interrupted from another thread; whatever was packed by then is still valid.

use {
  disc_packing::{
    geometry::Domain,
    solver::{DiscPacking, PackingConfig, seed::SeedParams},
    drawing::{self, HeightParams, OutputMode}
  },
  anyhow::Result,
  rand::SeedableRng,
  std::{
    sync::{Arc, atomic::{AtomicBool, Ordering}},
    thread,
    time::Duration
  }
};

fn main() -> Result<()> {
  let path = "tiles.png";
  let config = PackingConfig::new(Domain::new(512.0, 512.0)?, 12.0, 3.0)?;
  let params = SeedParams { radius_init: 30.0, ..Default::default() };
  let packing = DiscPacking::from_seed(config, &params, 7)?;

  let cancel = Arc::new(AtomicBool::new(false));
  {
    let cancel = cancel.clone();
    thread::spawn(move || {
      thread::sleep(Duration::from_secs(10));
      cancel.store(true, Ordering::Relaxed);
    });
  }
  let discs = packing.run_cancellable(&cancel);
  println!("{} discs", discs.len());

  let heights = drawing::disc_heights(discs.len(), &HeightParams::default(),
    &mut rand_pcg::Pcg64::seed_from_u64(0));
  drawing::to_luma8(&drawing::render(&discs, &heights, &config.domain, OutputMode::Tiles { gap_thickness: 3.0 })?)
    .save(path)?;
  Ok(())
}
