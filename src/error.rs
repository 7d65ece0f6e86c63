//! .
//!
//! Only an invalid configuration is reported as an error; everything that can go wrong inside
//! the growth loop (degenerate triples, running out of room for seeds or candidates) is
//! handled where it happens.

pub use anyhow::{Error, Result};
pub use crate::geometry::Degenerate;
