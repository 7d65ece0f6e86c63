//! Height fields from a finished packing.
//!
//! One pixel covers one unit of the domain, and the field is periodic like the domain itself.

use {
  crate::{
    geometry::{Disc, Domain},
    solver::seed::RandomSource
  },
  anyhow::{Result, ensure},
  image::{GrayImage, ImageBuffer, Luma}
};

mod impl_render;
#[cfg(test)] mod tests;

pub type HeightField = ImageBuffer<Luma<f32>, Vec<f32>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OutputMode {
  /// Disc interiors at their height, zero elsewhere
  Discs,
  /// Every pixel belongs to the disc with the nearest edge; zero-height gaps of the given
  /// thickness separate neighbouring tiles.
  Tiles { gap_thickness: f64 }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeightParams {
  pub height: f64,
  /// Spread of the per-disc height
  pub height_noise: f64
}

impl Default for HeightParams {
  fn default() -> Self {
    HeightParams { height: 1.0, height_noise: 0.0 }
  }
}

/// Random positive height for each of `n` discs: `height · (√(z² + 1) + z)`, `z ~ N(0, noise)`.
pub fn disc_heights(n: usize, params: &HeightParams, rng: &mut impl RandomSource) -> Vec<f64> {
  if params.height_noise <= 0.0 {
    return vec![params.height; n];
  }
  (0..n)
    .map(|_| {
      let z = rng.gaussian(params.height_noise);
      params.height * ((z * z + 1.0).sqrt() + z)
    })
    .collect()
}

pub fn render(discs: &[Disc], heights: &[f64], domain: &Domain, mode: OutputMode) -> Result<HeightField> {
  ensure!(discs.len() == heights.len(), "{} discs but {} heights", discs.len(), heights.len());
  let (width, height) = (domain.width().ceil(), domain.height().ceil());
  ensure!(width <= u32::MAX as f64 && height <= u32::MAX as f64, "domain {width}×{height} is too large to render");

  let mut field = HeightField::new(width as u32, height as u32);
  match mode {
    OutputMode::Discs => impl_render::paint_discs(&mut field, discs, heights, domain),
    OutputMode::Tiles { gap_thickness } => {
      ensure!(gap_thickness >= 0.0, "gap thickness must be non-negative, got {gap_thickness}");
      impl_render::paint_tiles(&mut field, discs, heights, domain, gap_thickness)
    }
  }
  Ok(field)
}

/// Scale to the full 8-bit range.
pub fn to_luma8(field: &HeightField) -> GrayImage {
  let max = field.pixels()
    .map(|p| p.0[0])
    .fold(0.0f32, f32::max);
  let scale = if max > 0.0 { 255.0 / max } else { 0.0 };
  GrayImage::from_fn(field.width(), field.height(), |x, y| {
    Luma([(field.get_pixel(x, y).0[0] * scale).round().clamp(0.0, 255.0) as u8])
  })
}
