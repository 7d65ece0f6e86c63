use {
  super::*,
  crate::{
    error::Result,
    solver::{DiscPacking, PackingConfig, seed::SeedParams}
  },
  rand::SeedableRng
};

fn value(field: &HeightField, x: u32, y: u32) -> f32 {
  field.get_pixel(x, y).0[0]
}

#[test] fn discs_wrap_around() -> Result<()> {
  let domain = Domain::new(64.0, 32.0)?;
  let discs = [Disc::new(32.0, 16.0, 6.0), Disc::new(1.0, 1.0, 4.0)];
  let field = render(&discs, &[2.0, 3.0], &domain, OutputMode::Discs)?;

  assert_eq!(field.dimensions(), (64, 32));
  assert_eq!(value(&field, 32, 16), 2.0);
  assert_eq!(value(&field, 20, 16), 0.0);
  // the small disc spills over both edges
  assert_eq!(value(&field, 0, 0), 3.0);
  assert_eq!(value(&field, 63, 31), 3.0);
  assert_eq!(value(&field, 63, 0), 3.0);
  assert_eq!(value(&field, 10, 10), 0.0);
  Ok(())
}

#[test] fn tiles_have_gaps() -> Result<()> {
  let domain = Domain::new(64.0, 64.0)?;
  let discs = [Disc::new(16.0, 32.0, 10.0), Disc::new(48.0, 32.0, 10.0)];
  let field = render(&discs, &[1.0, 2.0], &domain, OutputMode::Tiles { gap_thickness: 3.0 })?;

  assert_eq!(value(&field, 16, 32), 1.0);
  assert_eq!(value(&field, 48, 32), 2.0);
  // tiles extend past the disc edges, up to the gap
  assert_eq!(value(&field, 28, 32), 1.0);
  assert_eq!(value(&field, 16, 2), 1.0);
  // halfway between the discs, on both sides of the torus
  assert_eq!(value(&field, 32, 32), 0.0);
  assert_eq!(value(&field, 0, 32), 0.0);
  Ok(())
}

#[test] fn render_rejects_mismatched_heights() -> Result<()> {
  let domain = Domain::new(16.0, 16.0)?;
  assert!(render(&[Disc::new(8.0, 8.0, 2.0)], &[], &domain, OutputMode::Discs).is_err());
  assert!(render(&[], &[], &domain, OutputMode::Tiles { gap_thickness: -1.0 }).is_err());
  Ok(())
}

#[test] fn heights() {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let flat = disc_heights(4, &HeightParams { height: 2.5, height_noise: 0.0 }, &mut rng);
  assert_eq!(flat, vec![2.5; 4]);

  let noisy = disc_heights(100, &HeightParams { height: 1.0, height_noise: 0.5 }, &mut rng);
  assert_eq!(noisy.len(), 100);
  assert!(noisy.iter().all(|&h| h > 0.0));
  assert!(noisy.iter().any(|&h| (h - 1.0).abs() > 1e-3));
}

#[test] fn luma8_normalised() -> Result<()> {
  let domain = Domain::new(8.0, 8.0)?;
  let field = render(&[Disc::new(4.0, 4.0, 2.0)], &[0.25], &domain, OutputMode::Discs)?;
  let image = to_luma8(&field);
  assert_eq!(image.get_pixel(4, 4).0[0], 255);
  assert_eq!(image.get_pixel(0, 0).0[0], 0);
  Ok(())
}

#[test] #[ignore] fn draw_packing() -> Result<()> {
  let config = PackingConfig::new(Domain::new(512.0, 512.0)?, 4.0, 2.0)?;
  let params = SeedParams { radius_init: 40.0, radius_init_noise: 0.2, ..Default::default() };
  let discs = DiscPacking::from_seed(config, &params, 0)?.run();
  let heights = disc_heights(discs.len(), &HeightParams { height: 1.0, height_noise: 0.5 },
    &mut rand_pcg::Pcg64::seed_from_u64(1));

  std::fs::create_dir_all("test")?;
  to_luma8(&render(&discs, &heights, &config.domain, OutputMode::Discs)?)
    .save("test/test_discs.png")?;
  to_luma8(&render(&discs, &heights, &config.domain, OutputMode::Tiles { gap_thickness: 3.0 })?)
    .save("test/test_tiles.png")?;
  Ok(())
}
