use {
  super::HeightField,
  crate::geometry::{Disc, Domain, P2},
  rayon::prelude::*
};

#[inline]
fn pixel_centre(x: u32, y: u32) -> P2 {
  P2::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Fill each disc interior, wrapping around the edges; rows are painted in parallel.
pub(super) fn paint_discs(field: &mut HeightField, discs: &[Disc], heights: &[f64], domain: &Domain) {
  let w = field.width() as usize;
  if w == 0 {
    return;
  }
  field.par_chunks_mut(w)
    .enumerate()
    .for_each(|(y, row)| {
      let centre_y = y as f64 + 0.5;
      for (disc, &h) in discs.iter().zip(heights) {
        let dy = domain.minimum_image_delta(P2::new(0.0, centre_y), P2::new(0.0, disc.xy.y)).y;
        if dy.abs() > disc.r {
          continue;
        }
        let half = (disc.r * disc.r - dy * dy).sqrt();
        // pixel centres x + 0.5 within [cx - half, cx + half]
        let from = (disc.xy.x - half - 0.5).ceil() as i64;
        let to = (disc.xy.x + half - 0.5).floor() as i64;
        if to < from {
          continue;
        }
        if (to - from + 1) as usize >= w {
          row.fill(h as f32);
          continue;
        }
        for x in from..=to {
          row[x.rem_euclid(w as i64) as usize] = h as f32;
        }
      }
    });
}

/// Assign every pixel to the disc whose edge is nearest; pixels almost equally close to two
/// edges form the gap.
pub(super) fn paint_tiles(field: &mut HeightField, discs: &[Disc], heights: &[f64], domain: &Domain, gap_thickness: f64) {
  let w = field.width() as usize;
  if w == 0 || discs.is_empty() {
    return;
  }
  field.par_chunks_mut(w)
    .enumerate()
    .for_each(|(y, row)| {
      for (x, value) in row.iter_mut().enumerate() {
        let p = pixel_centre(x as u32, y as u32);
        let (mut first, mut second) = ((f64::INFINITY, 0), f64::INFINITY);
        for (k, disc) in discs.iter().enumerate() {
          let edge = domain.minimum_image_delta(p, disc.xy).length() - disc.r;
          if edge < first.0 {
            second = first.0;
            first = (edge, k);
          } else if edge < second {
            second = edge;
          }
        }
        *value = if second - first.0 < gap_thickness { 0.0 } else { heights[first.1] as f32 };
      }
    });
}
