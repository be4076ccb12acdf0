//! Data models for catalog contents.
//!
//! - [`kind`] - The catalog family discriminator (JPL or COLOGNE)
//! - [`molecule`] - One line of a catalog directory file
//! - [`transition`] - One line of a per-molecule transitions file
//! - [`constants`] - Conversion factors used to derive upper-state temperatures

pub mod constants;
pub mod kind;
pub mod molecule;
pub mod transition;
