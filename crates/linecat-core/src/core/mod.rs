//! # Core Module
//!
//! Fundamental building blocks for reading spectroscopy line catalogs.
//!
//! - **File I/O** ([`io`]) - Fixed-width field descriptors, the transition record layout and
//!   the [`io::source::CatalogSource`] seam through which catalog files are opened
//! - **Data Models** ([`models`]) - Catalog kinds, directory entries, transitions and the
//!   physical constants used to derive upper-state temperatures

pub mod io;
pub mod models;
