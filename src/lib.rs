//! Random discs in a periodic rectangle, packed Apollonian style.
//!
//! It is split into two main modules: [`solver`] for growing the packing, and [`drawing`] for
//! turning it into a height field (requires `drawing` feature).
//!
//! A packing starts from a few seed discs. The engine then repeatedly finds discs tangent to
//! three existing ones (the Apollonius problem), and commits the largest one that fits. The
//! domain is a torus: a disc leaving one edge reenters on the opposite side, so the result tiles
//! seamlessly.
//!
//! # Basic usage
//! ```
//! # use disc_packing::{
//! #   error::Result,
//! #   geometry::{Disc, Domain},
//! #   solver::{DiscPacking, PackingConfig, seed::SeedParams},
//! # };
//! # fn main() -> Result<()> {
//! // 128×128 periodic domain; discs at least 3 units in radius, kept 1 unit apart.
//! let config = PackingConfig::new(Domain::new(128.0, 128.0)?, 3.0, 1.0)?;
//!
//! // Throw seed discs of radius ~15 at random, until 15 throws in a row miss.
//! let params = SeedParams { radius_init: 15.0, radius_init_noise: 0.2, ..Default::default() };
//! let packing = DiscPacking::from_seed(config, &params, 0)?;
//!
//! // Grow until there is no more room. Seeds come first, then discs of non-increasing radius.
//! let discs: Vec<Disc> = packing.run();
//! assert!(discs.iter().all(|d| d.r > 0.0));
//! # Ok(())
//! # }
//! ```
//! Growth can also be driven one disc at a time; dropping the iterator early leaves a valid,
//! non-overlapping packing:
//! ```
//! # use disc_packing::{error::Result, geometry::{Disc, Domain}, solver::{DiscPacking, PackingConfig}};
//! # fn main() -> Result<()> {
//! let config = PackingConfig::new(Domain::new(100.0, 100.0)?, 3.0, 1.0)?;
//! let seeds = vec![
//!   Disc::new(20.0, 20.0, 10.0),
//!   Disc::new(70.0, 20.0, 10.0),
//!   Disc::new(45.0, 70.0, 10.0),
//! ];
//! let mut packing = DiscPacking::new(config, seeds)?;
//! let largest: Vec<Disc> = packing.iter().take(3).collect();
//! # assert_eq!(largest.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Parallelism
//! Only the very first candidate search, over all triples of seeds, runs on the rayon pool. Every
//! later step depends on the disc committed before it and runs on the calling thread. The result
//! does not depend on the number of threads.

#![cfg_attr(doc, feature(doc_cfg))]
#![allow(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod geometry;
pub mod solver;
#[cfg(feature = "drawing")]
#[cfg_attr(doc, doc(cfg(feature = "drawing")))]
pub mod drawing;
