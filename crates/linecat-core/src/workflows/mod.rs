//! # Workflows Module
//!
//! High-level entry points for users of the library.
//!
//! - **Catalog queries** ([`query`]) - [`query::CatalogReader`] resolves molecules by name,
//!   reads their transitions through the single-entry cache, and answers single-line and
//!   frequency-window lookups.

pub mod query;
