use {
  super::*,
  anyhow::Result
};

fn assert_tangent(d: &Disc, others: &[Disc]) {
  for o in others {
    let gap = d.distance_to(o) - (d.r + o.r);
    assert!(gap.abs() < 1e-9, "{d:?} is not tangent to {o:?}, gap = {gap}");
  }
}

#[test] fn apollonius_equilateral() -> Result<()> {
  let r = 1.0;
  let a = Disc::new(0.0, 0.0, r);
  let b = Disc::new(2.0 * r, 0.0, r);
  let c = Disc::new(r, 3f64.sqrt() * r, r);
  let d = apollonius::solve(&a, &b, &c)?;

  assert!((d.r - (2.0 / 3f64.sqrt() - 1.0) * r).abs() < 1e-12);
  assert!((d.xy.x - r).abs() < 1e-12);
  assert!((d.xy.y - r / 3f64.sqrt()).abs() < 1e-12);
  assert_tangent(&d, &[a, b, c]);
  Ok(())
}

#[test] fn apollonius_unequal_radii() -> Result<()> {
  let discs = [
    Disc::new(10.0, 10.0, 3.0),
    Disc::new(30.0, 12.0, 5.0),
    Disc::new(18.0, 40.0, 4.0),
  ];
  let d = apollonius::solve(&discs[0], &discs[1], &discs[2])?;
  assert!(d.r > 0.0);
  assert_tangent(&d, &discs);

  // argument order does not matter
  let e = apollonius::solve(&discs[2], &discs[0], &discs[1])?;
  assert!((d.r - e.r).abs() < 1e-9);
  assert!(d.xy.distance_to(e.xy) < 1e-9);
  Ok(())
}

#[test] fn apollonius_collinear() {
  let a = Disc::new(0.0, 0.0, 1.0);
  let b = Disc::new(5.0, 0.0, 1.0);
  let c = Disc::new(10.0, 0.0, 1.0);
  assert_eq!(apollonius::solve(&a, &b, &c), Err(Degenerate::Collinear));
  // same centre twice
  assert_eq!(apollonius::solve(&a, &a, &b), Err(Degenerate::Collinear));
}

#[test] fn domain_validation() {
  assert!(Domain::new(100.0, 50.0).is_ok());
  assert!(Domain::new(0.0, 50.0).is_err());
  assert!(Domain::new(100.0, -1.0).is_err());
  assert!(Domain::new(f64::NAN, 1.0).is_err());
  assert!(Domain::new(f64::INFINITY, 1.0).is_err());
}

#[test] fn minimum_image_wraps() -> Result<()> {
  let domain = Domain::new(100.0, 80.0)?;
  let a = Disc::new(0.5, 40.0, 0.6);
  let b = Disc::new(99.5, 40.0, 0.6);
  let dist = domain.minimum_image_distance(&a, &b);
  assert!((dist - 1.0).abs() < 1e-12);
  assert!(dist < a.r + b.r, "wrapped discs must overlap");

  let c = Disc::new(50.0, 79.0, 1.0);
  let d = Disc::new(50.0, 1.0, 1.0);
  assert!((domain.minimum_image_distance(&c, &d) - 2.0).abs() < 1e-12);

  let delta = domain.minimum_image_delta(P2::new(1.0, 1.0), P2::new(99.0, 79.0));
  assert!((delta.x - 2.0).abs() < 1e-12);
  assert!((delta.y - 2.0).abs() < 1e-12);
  Ok(())
}

#[test] fn wrap_and_contains() -> Result<()> {
  let domain = Domain::new(10.0, 20.0)?;
  let p = domain.wrap(P2::new(-1.0, 45.0));
  assert!((p.x - 9.0).abs() < 1e-12);
  assert!((p.y - 5.0).abs() < 1e-12);
  assert!(domain.contains(P2::new(10.0005, 0.0), 1e-3));
  assert!(!domain.contains(P2::new(10.01, 0.0), 1e-3));
  assert!(!domain.contains(P2::new(5.0, -0.5), 1e-3));
  Ok(())
}

#[test] fn shift_table() -> Result<()> {
  let domain = Domain::new(100.0, 60.0)?;
  let shifts = periodic::enumerate_shifts(&domain);
  assert_eq!(shifts.len(), 121);
  assert_eq!(shifts.iter().filter(|s| s.is_identity()).count(), 1);

  let steps = |v: V2| ((v.x / domain.width()).round() as i32, (v.y / domain.height()).round() as i32);
  for shift in &shifts {
    let s = shift.0.map(steps);
    assert!(s.iter().any(|&step| step == (0, 0)), "{s:?} moves every disc");
    for (p, q) in [(0, 1), (0, 2), (1, 2)] {
      assert!((s[p].0 - s[q].0).abs() <= 1 && (s[p].1 - s[q].1).abs() <= 1, "{s:?} spreads too far");
    }
  }
  Ok(())
}

#[test] fn shift_apply() -> Result<()> {
  let domain = Domain::new(10.0, 10.0)?;
  let discs = [Disc::new(1.0, 1.0, 1.0); 3];
  let shift = Shift([V2::new(10.0, 0.0), V2::zero(), V2::new(0.0, 10.0)]);
  let [a, b, c] = shift.apply(discs);
  assert_eq!(a.xy, P2::new(11.0, 1.0));
  assert_eq!(b.xy, P2::new(1.0, 1.0));
  assert_eq!(c.xy, P2::new(1.0, 11.0));
  assert!(periodic::enumerate_shifts(&domain).contains(&shift));
  Ok(())
}
