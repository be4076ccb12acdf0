//! Provides input/output functionality for the catalog file formats.
//!
//! Catalog records are fixed-width text lines. This module declares their layout as data
//! ([`fixed_width`], [`layout`]) and abstracts where the files come from ([`source`]), so the
//! engine never touches the filesystem directly.

pub mod fixed_width;
pub mod layout;
pub mod source;
